//! Content classifier — stage three.
//!
//! Splits a block's joined payload into the free-text description and its
//! `@tag` annotations.

use crate::model::Tag;
use regex::Regex;
use std::sync::LazyLock;

// A tag segment starts at `@` when it opens the trimmed payload or follows
// whitespace. `@` embedded in a word is ordinary content.
static RE_TAG_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:^|\s)@").unwrap());

/// Classify a joined payload into `(description, tags)`.
///
/// Deterministic: the same payload always yields the same output. Interior
/// marker characters that were not stripped as line markers are ordinary
/// content and survive into the description.
pub fn classify(payload: &str) -> (String, Vec<Tag>) {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return (String::new(), Vec::new());
    }

    // Byte offsets of each tag-starting `@` in the trimmed payload.
    let starts: Vec<usize> = RE_TAG_START
        .find_iter(trimmed)
        .map(|m| m.end() - 1)
        .collect();

    let description = match starts.first() {
        Some(&first) => trimmed[..first].trim().to_string(),
        None => trimmed.to_string(),
    };

    let mut tags = Vec::with_capacity(starts.len());
    for (k, &at) in starts.iter().enumerate() {
        let end = starts.get(k + 1).copied().unwrap_or(trimmed.len());
        let segment = &trimmed[at + 1..end];
        let name_len = segment.find(char::is_whitespace).unwrap_or(segment.len());
        let (name, rest) = segment.split_at(name_len);
        tags.push(Tag {
            name: name.to_string(),
            value: rest.trim().to_string(),
        });
    }

    (description, tags)
}
