//! docblock — extract JSDoc-style comment blocks from source files.
//!
//! Two modes:
//!
//! - **stdin mode**: `docblock < file.js`
//! - **file mode**: `docblock -o docs/api src/*.js contracts/*.sol`

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use docblock::model::ParseResult;
use docblock::parser::{self, UnterminatedPolicy};
use docblock::render;

#[derive(Parser)]
#[command(
    name = "docblock",
    about = "Extract JSDoc-style comment blocks from source files"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Fail on an unterminated comment block instead of warning
    #[arg(long)]
    strict: bool,

    /// Filter blocks by tag name. Prefix with ! to exclude.
    /// Can be specified multiple times. E.g. --filter '!internal'
    #[arg(long)]
    filter: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn build_parser(cli: &Cli) -> parser::Parser {
    let policy = if cli.strict {
        UnterminatedPolicy::Error
    } else {
        UnterminatedPolicy::Warn
    };
    parser::Parser::new().unterminated(policy)
}

/// stdin mode: read all of stdin, parse, render to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut result = build_parser(cli).parse(&input)?;
    report_warnings("<stdin>", &result);
    filter_blocks(&mut result, &cli.filter);

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&result));
    Ok(())
}

/// file mode: process multiple files, write one output file per input.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let block_parser = build_parser(cli);
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let mut result = block_parser
            .parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        report_warnings(&path.display().to_string(), &result);
        filter_blocks(&mut result, &cli.filter);

        // Skip files with no blocks left (e.g. plain sources, filtered out)
        if result.blocks.is_empty() {
            continue;
        }

        let name = derive_output_name(path);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&result))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// File extensions recognized as source files when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "sol"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "src/math.js" → "math", "contracts/Token.sol" → "Token"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Print soft parse diagnostics to stderr. Under --strict the parse itself
/// fails instead, so this only fires in lenient mode.
fn report_warnings(source: &str, result: &ParseResult) {
    for warning in &result.warnings {
        eprintln!("warning: {}: {}", source, warning);
    }
}

/// Filter blocks by tag name.
///
/// Inclusion filters require the named tag to be present; exclusion filters
/// (`!name`) drop blocks carrying it. All filters must agree for a block to
/// be kept.
fn filter_blocks(result: &mut ParseResult, filters: &[String]) {
    if filters.is_empty() {
        return;
    }
    result.blocks.retain(|block| {
        for filter in filters {
            if let Some(excluded) = filter.strip_prefix('!') {
                if block.tags.iter().any(|t| t.name == excluded) {
                    return false;
                }
            } else if !block.tags.iter().any(|t| t.name == filter.as_str()) {
                return false;
            }
        }
        true
    });
}
