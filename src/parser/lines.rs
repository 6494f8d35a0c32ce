//! Line splitter — stage one.
//!
//! Splits strictly on `\n` and keeps every other character of each line,
//! carriage returns included. `str::lines` is not used: it strips `\r` and
//! drops a trailing empty line, both of which would break the verbatim
//! line records later stages depend on.

use crate::model::SourceLine;

/// Split `input` into verbatim physical lines.
///
/// Empty input yields one empty line; input without a terminator yields
/// exactly one line. Never fails.
pub fn split(input: &str) -> Vec<SourceLine> {
    input
        .split('\n')
        .enumerate()
        .map(|(i, text)| SourceLine {
            number: i + 1,
            text: text.to_string(),
        })
        .collect()
}
