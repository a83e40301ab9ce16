//! # Inline Tokenizing
//!
//! Cursor-based tokenizing of a single logical line into [`InlineSpan`]s.
//!
//! Block parsing hands over one line at a time (paragraph lines are joined
//! with a single space first). The tokenizer never produces an empty span;
//! blank input yields no spans at all, which callers use to drop empty
//! paragraphs.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline constructs with owned delimiters (WikiLink, Link, Strong, Emphasis, CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` entry point with `try_parse_*` helpers
//!
//! [`InlineSpan`]: crate::models::InlineSpan

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::tokenize;
