//! Block extractor — stage two.
//!
//! Scans the line sequence for marker-delimited regions, records the
//! verbatim lines each block spans, and derives the joined payload handed to
//! the content classifier. Leading-marker detection runs as a small
//! per-line state machine rather than ad hoc scanning.

use super::Syntax;
use crate::model::{SourceLine, Warning};

/// One extracted block before content classification.
#[derive(Debug)]
pub struct RawBlock {
    /// Verbatim lines spanned by the block, open to close inclusive.
    pub lines: Vec<SourceLine>,
    /// Per-line payloads joined with a single space.
    pub payload: String,
}

/// Extraction output: blocks in source order plus unterminated diagnostics.
#[derive(Debug, Default)]
pub struct Scan {
    pub blocks: Vec<RawBlock>,
    pub warnings: Vec<Warning>,
}

/// Scan `lines` for comment blocks.
///
/// A block opens at the first occurrence of the open marker on a line and
/// closes on the first subsequent occurrence of the close marker (on the
/// same line or a later one). Text before the open marker and after the
/// close marker is ignored for content, but the full raw lines are still
/// recorded. Scanning resumes on the line after a closed block, so blocks
/// never nest or overlap; an open marker inside an already-open block is
/// ordinary text.
pub fn extract(lines: &[SourceLine], syntax: &Syntax) -> Scan {
    let mut scan = Scan::default();
    let mut i = 0;

    while i < lines.len() {
        let Some(open_at) = lines[i].text.find(&syntax.open) else {
            i += 1;
            continue;
        };
        let start = i;
        let head = &lines[i].text[open_at + syntax.open.len()..];

        // Close marker after the open on the same line: single-line block.
        if let Some(close_at) = head.find(&syntax.close) {
            scan.blocks.push(RawBlock {
                lines: vec![lines[i].clone()],
                payload: head[..close_at].to_string(),
            });
            i += 1;
            continue;
        }

        // First-line payload is everything after the open marker, verbatim;
        // the leading-marker rule applies only to subsequent lines.
        let mut payloads = vec![head.to_string()];
        let mut j = i + 1;
        let mut closed = false;
        while j < lines.len() {
            let text = &lines[j].text;
            if let Some(close_at) = text.find(&syntax.close) {
                payloads.push(strip_line_marker(&text[..close_at], syntax.line_marker).to_string());
                closed = true;
                break;
            }
            payloads.push(strip_line_marker(text, syntax.line_marker).to_string());
            j += 1;
        }

        if closed {
            scan.blocks.push(RawBlock {
                lines: lines[start..=j].to_vec(),
                payload: payloads.join(" "),
            });
            i = j + 1;
        } else {
            // No close before input end: drop the partial block. A close
            // position is never fabricated.
            scan.warnings.push(Warning::UnterminatedBlock {
                line: lines[start].number,
            });
            break;
        }
    }

    scan
}

/// Per-line marker scan state.
#[derive(Clone, Copy)]
enum LineState {
    BeforeMarker,
    InPayload,
}

/// Derive an interior line's payload.
///
/// Whitespace is consumed in `BeforeMarker`. The first non-whitespace
/// character either is the marker, in which case the payload is everything
/// after it, or is ordinary content, in which case the whole line is the
/// payload. A marker that is not the first non-whitespace character is
/// content, not a marker.
fn strip_line_marker(line: &str, marker: char) -> &str {
    let mut state = LineState::BeforeMarker;
    for (at, ch) in line.char_indices() {
        match state {
            LineState::BeforeMarker => {
                if ch == marker {
                    return &line[at + ch.len_utf8()..];
                }
                if !ch.is_whitespace() {
                    state = LineState::InPayload;
                }
            }
            LineState::InPayload => return line,
        }
    }
    // Blank line, or a lone marker consumed above.
    line
}
