//! Comment block parser — three stages wired left to right.
//!
//! Raw text → physical lines ([`lines`]) → delimited blocks with verbatim
//! line records ([`block`]) → classified content ([`content`]). Each stage
//! produces an immutable value consumed by the next.

pub mod block;
pub mod content;
pub mod lines;

use crate::error::ParseError;
use crate::model::{CommentBlock, ParseResult, Warning};

/// Comment grammar markers. Defaults to the JSDoc style.
#[derive(Debug, Clone)]
pub struct Syntax {
    /// Block open marker.
    pub open: String,
    /// Block close marker.
    pub close: String,
    /// Leading marker character on interior lines of a block.
    pub line_marker: char,
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax {
            open: "/**".to_string(),
            close: "*/".to_string(),
            line_marker: '*',
        }
    }
}

/// How to report a block whose close marker never arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedPolicy {
    /// Drop the partial block and record a [`Warning`] (default).
    #[default]
    Warn,
    /// Fail the whole parse with [`ParseError::UnterminatedBlock`].
    Error,
}

/// Configured parser.
///
/// Holds no mutable state: one instance can serve any number of concurrent
/// callers, and parsing the same input twice yields identical results.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    syntax: Syntax,
    unterminated: UnterminatedPolicy,
}

impl Parser {
    /// Parser with the default JSDoc syntax and the lenient policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser over a custom comment grammar.
    pub fn with_syntax(syntax: Syntax) -> Self {
        Parser {
            syntax,
            unterminated: UnterminatedPolicy::default(),
        }
    }

    /// Set the unterminated-block policy.
    pub fn unterminated(mut self, policy: UnterminatedPolicy) -> Self {
        self.unterminated = policy;
        self
    }

    /// Parse `input` into comment blocks, in source order.
    ///
    /// Single synchronous pass over the materialized input. A malformed
    /// block never invalidates blocks parsed before it; under
    /// [`UnterminatedPolicy::Error`] the parse fails instead of returning a
    /// partial-looking success.
    pub fn parse(&self, input: &str) -> Result<ParseResult, ParseError> {
        let lines = lines::split(input);
        let scan = block::extract(&lines, &self.syntax);

        if self.unterminated == UnterminatedPolicy::Error {
            if let Some(Warning::UnterminatedBlock { line }) = scan.warnings.first() {
                return Err(ParseError::UnterminatedBlock { line: *line });
            }
        }

        let blocks = scan
            .blocks
            .into_iter()
            .map(|raw| {
                let (description, tags) = content::classify(&raw.payload);
                CommentBlock {
                    lines: raw.lines,
                    description,
                    tags,
                }
            })
            .collect();

        Ok(ParseResult {
            blocks,
            warnings: scan.warnings,
        })
    }
}

/// Parse with the default JSDoc syntax and the lenient policy.
pub fn parse(input: &str) -> Result<ParseResult, ParseError> {
    Parser::new().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn no_open_marker_yields_nothing() {
        let result = parse("function add(a, b) {\n  return a + b;\n}\n").unwrap();
        assert!(result.blocks.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_single_line_block() {
        let result = parse("/** */").unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "");
        assert!(result.blocks[0].tags.is_empty());
    }

    #[test]
    fn empty_multi_line_block_records_raw_lines() {
        let result = parse("/**\n*\n */").unwrap();
        assert_eq!(result.blocks.len(), 1);
        let block = &result.blocks[0];
        assert_eq!(block.lines.len(), 3);
        assert_eq!(block.lines[0].text, "/**");
        assert_eq!(block.lines[1].text, "*");
        assert_eq!(block.lines[2].text, " */");
        assert_eq!(block.description, "");
    }

    #[test]
    fn single_line_description() {
        let result = parse("/**a*/").unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "a");
    }

    #[test]
    fn interior_asterisks_are_content() {
        let result = parse("/** *a**/").unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "*a*");
    }

    #[test]
    fn tag_with_value() {
        let result = parse("/**@x hello*/").unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "");
        assert_eq!(
            result.blocks[0].tags,
            vec![Tag {
                name: "x".to_string(),
                value: "hello".to_string()
            }]
        );
    }

    #[test]
    fn bare_at_yields_empty_tag() {
        let result = parse("/**@ */").unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "");
        assert_eq!(
            result.blocks[0].tags,
            vec![Tag {
                name: String::new(),
                value: String::new()
            }]
        );
    }

    #[test]
    fn description_and_tags_from_multi_line_block() {
        let input = "/**\n * Add two numbers.\n * @param a first\n * @param b second\n */";
        let result = parse(input).unwrap();
        let block = &result.blocks[0];
        assert_eq!(block.description, "Add two numbers.");
        assert_eq!(block.tags.len(), 2);
        assert_eq!(block.tags[0].name, "param");
        assert_eq!(block.tags[0].value, "a first");
        assert_eq!(block.tags[1].value, "b second");
    }

    #[test]
    fn multiple_blocks_in_source_order() {
        let result = parse("/**a*/\ncode();\n/**b*/").unwrap();
        assert_eq!(result.blocks.len(), 2);
        assert_eq!(result.blocks[0].description, "a");
        assert_eq!(result.blocks[1].description, "b");
    }

    #[test]
    fn lines_span_matches_physical_lines() {
        let input = "before\n/**\n * x\n */\nafter";
        let result = parse(input).unwrap();
        let block = &result.blocks[0];
        assert_eq!(block.lines.len(), 3);
        assert_eq!(block.lines[0].number, 2);
        assert_eq!(block.lines[2].number, 4);
    }

    #[test]
    fn raw_lines_round_trip_to_original_substring() {
        let input = "before\n/**\n * x\n */\nafter";
        let result = parse(input).unwrap();
        let joined = result.blocks[0]
            .lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(input.contains(&joined));
        assert_eq!(joined, "/**\n * x\n */");
    }

    #[test]
    fn reparsing_is_deterministic() {
        let input = "/**\n * desc\n * @a 1\n */";
        assert_eq!(parse(input).unwrap(), parse(input).unwrap());
    }

    #[test]
    fn unterminated_block_warns_by_default() {
        let result = parse("x\n/** open").unwrap();
        assert!(result.blocks.is_empty());
        assert_eq!(result.warnings, vec![Warning::UnterminatedBlock { line: 2 }]);
    }

    #[test]
    fn unterminated_block_keeps_earlier_blocks() {
        let result = parse("/**a*/\n/** open").unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "a");
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn unterminated_block_fails_under_strict_policy() {
        let err = Parser::new()
            .unterminated(UnterminatedPolicy::Error)
            .parse("x\n/** open")
            .unwrap_err();
        assert_eq!(err, ParseError::UnterminatedBlock { line: 2 });
    }

    #[test]
    fn custom_syntax() {
        let syntax = Syntax {
            open: "<!--".to_string(),
            close: "-->".to_string(),
            line_marker: '-',
        };
        let result = Parser::with_syntax(syntax)
            .parse("<!-- hi @a b -->")
            .unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].description, "hi");
        assert_eq!(result.blocks[0].tags[0].name, "a");
        assert_eq!(result.blocks[0].tags[0].value, "b");
    }

    #[test]
    fn crlf_input_keeps_carriage_returns_in_raw_lines() {
        let result = parse("/**\r\n * a\r\n */").unwrap();
        let block = &result.blocks[0];
        assert_eq!(block.lines[0].text, "/**\r");
        assert_eq!(block.lines[1].text, " * a\r");
        assert_eq!(block.description, "a");
    }
}
