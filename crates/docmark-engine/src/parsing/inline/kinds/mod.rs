//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The tokenizer calls
//! these constants; it never hardcodes `[[`, `**` or `` ` ``.
//!
//! - **`WikiLink`**: `[[target]]` / `[[target#anchor]]`, plus the display-text transform
//! - **`Link`**: `[text](href)`
//! - **`Strong`** / **`Emphasis`**: `**bold**` / `*italic*`
//! - **`CodeSpan`**: `` `code` `` - raw zone, nothing is parsed inside

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
pub use wikilink::WikiLink;
