//! # Block Parsing
//!
//! Single forward scan over lines with fixed-precedence dispatch.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (marker tags, quote prefix, heading,
//!    fence, list marker, pipe row)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` walks the lines,
//!    lets the first matching rule consume one or more of them, and recurses
//!    into container bodies (manual markers, callouts, blockquotes)
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` and the shared `ParseState`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Containers are never empty; an empty body parses to one empty paragraph
//! - A manual marker never directly contains another manual marker, and a
//!   callout never directly contains another callout
//! - Containers nest at most `MAX_NESTING_DEPTH` deep; past that, `>` lines
//!   are paragraph text

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::{BlockBuilder, MAX_NESTING_DEPTH, ParseState};
pub use classify::{LineClass, MarkdownLineClassifier};
