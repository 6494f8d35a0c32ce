//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the ParseResult directly: each block carries its description,
//! tags, and raw line records.

use crate::model::{CommentBlock, ParseResult};
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, result: &ParseResult) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("  \"blocks\": [\n");
        for (i, block) in result.blocks.iter().enumerate() {
            out.push_str(&render_block(block));
            if i + 1 < result.blocks.len() {
                out.push_str(",\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str("  ]\n");
        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_block(block: &CommentBlock) -> String {
    let mut out = String::new();
    out.push_str("    {\n");

    out.push_str(&format!(
        "      \"description\": \"{}\",\n",
        json_escape(&block.description)
    ));

    out.push_str("      \"tags\": [");
    if block.tags.is_empty() {
        out.push_str("],\n");
    } else {
        out.push('\n');
        for (i, tag) in block.tags.iter().enumerate() {
            let comma = if i + 1 < block.tags.len() { "," } else { "" };
            out.push_str(&format!(
                "        {{ \"name\": \"{}\", \"value\": \"{}\" }}{}\n",
                json_escape(&tag.name),
                json_escape(&tag.value),
                comma
            ));
        }
        out.push_str("      ],\n");
    }

    out.push_str("      \"lines\": [");
    if block.lines.is_empty() {
        out.push_str("]\n");
    } else {
        out.push('\n');
        for (i, line) in block.lines.iter().enumerate() {
            let comma = if i + 1 < block.lines.len() { "," } else { "" };
            out.push_str(&format!(
                "        {{ \"number\": {}, \"text\": \"{}\" }}{}\n",
                line.number,
                json_escape(&line.text),
                comma
            ));
        }
        out.push_str("      ]\n");
    }

    out.push_str("    }");
    out
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
