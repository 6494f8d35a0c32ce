//! docblock — parse JSDoc-style `/** … */` comment blocks into structured data.
//!
//! The parser is a pure function over an input string: it splits the input
//! into physical lines, extracts marker-delimited comment blocks together
//! with the verbatim lines they span, and classifies each block's content
//! into a free-text description plus `@tag` annotations.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use error::ParseError;
pub use model::{CommentBlock, ParseResult, SourceLine, Tag, Warning};
pub use parser::{parse, Parser, Syntax, UnterminatedPolicy};
