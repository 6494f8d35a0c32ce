//! Data model for parsed comment blocks — stage-agnostic.
//!
//! Every value here is produced once during a parse pass and never mutated
//! afterwards; separate parse invocations share no state.

use std::fmt;

/// One physical line of the input, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based position of the line in the original input.
    pub number: usize,
    /// Exact text of the line, terminator excluded. Nothing is trimmed or
    /// normalized; carriage returns and delimiter fragments stay in place.
    pub text: String,
}

/// One `@name value` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Identifier immediately following `@`. Empty for a bare `@`.
    pub name: String,
    /// Remaining text of the tag segment, trimmed.
    pub value: String,
}

/// One parsed `/** … */` region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Verbatim lines from the open-marker line to the close-marker line,
    /// inclusive. Never empty for a recognized block.
    pub lines: Vec<SourceLine>,
    /// Free-text content after marker stripping, trimmed. May be empty.
    pub description: String,
    /// Tag annotations in source order.
    pub tags: Vec<Tag>,
}

/// Top-level parse output: blocks in source order plus soft diagnostics.
///
/// Text outside any block is skipped, not reported. An empty `blocks` with
/// empty `warnings` means the input simply contained no comment blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub blocks: Vec<CommentBlock>,
    pub warnings: Vec<Warning>,
}

/// Non-fatal diagnostics collected under the lenient unterminated policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Open marker at `line` with no close marker before input end; the
    /// partial block was dropped from the result.
    UnterminatedBlock { line: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnterminatedBlock { line } => {
                write!(f, "unterminated comment block starting at line {line}")
            }
        }
    }
}
