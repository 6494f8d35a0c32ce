//! Markdown renderer — human-readable listing of parsed blocks.

use crate::model::ParseResult;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, result: &ParseResult) -> String {
        let mut out = String::new();
        for (i, block) in result.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("## Comment {}\n", i + 1));
            if !block.description.is_empty() {
                out.push('\n');
                out.push_str(&block.description);
                out.push('\n');
            }
            if !block.tags.is_empty() {
                out.push('\n');
                for tag in &block.tags {
                    if tag.value.is_empty() {
                        out.push_str(&format!("* `@{}`\n", tag.name));
                    } else {
                        out.push_str(&format!("* `@{}` {}\n", tag.name, tag.value));
                    }
                }
            }
        }
        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
