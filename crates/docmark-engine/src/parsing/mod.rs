pub mod blocks;
pub mod diagnostics;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::models::Document;

use blocks::{BlockBuilder, ParseState};
pub use diagnostics::ParseDiagnostic;

/// A parsed document together with the problems recovered from on the way.
#[derive(Debug)]
pub struct ParsedDoc {
    pub document: Document,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parses markup into a document tree. Total over any input.
pub fn parse(markup: &str) -> Document {
    parse_with_diagnostics(markup).document
}

/// Like [`parse`], but also reports recovered problems such as unclosed
/// manual markers.
pub fn parse_with_diagnostics(markup: &str) -> ParsedDoc {
    let lines: Vec<&str> = markup.lines().collect();
    let line_count = lines.len();
    let mut state = ParseState::default();
    let blocks = BlockBuilder::new(lines, &mut state).build();

    log::debug!(
        "Parsed {} lines into {} top-level blocks ({} diagnostics)",
        line_count,
        blocks.len(),
        state.diagnostics.len()
    );

    ParsedDoc {
        document: Document::new(blocks),
        diagnostics: state.diagnostics,
    }
}
