use crate::models::{InlineSpan, Mark};
use crate::parsing::inline::kinds::{CodeSpan, Emphasis, Strong, WikiLink};

/// Renders spans back to markup, wrapping each span's text in its marks in
/// order (first mark innermost).
///
/// A wikilink mark replaces the text with `[[target]]` / `[[target#anchor]]`;
/// display text is always derived from the target, so it is not written out.
pub fn serialize_inline(spans: &[InlineSpan]) -> String {
    spans.iter().map(serialize_span).collect()
}

fn serialize_span(span: &InlineSpan) -> String {
    span.marks
        .iter()
        .fold(span.content.clone(), |text, mark| apply_mark(text, mark))
}

fn apply_mark(text: String, mark: &Mark) -> String {
    match mark {
        Mark::Bold => format!("{d}{text}{d}", d = Strong::DELIM),
        Mark::Italic => format!("{d}{text}{d}", d = Emphasis::DELIM as char),
        Mark::Code => format!("{d}{text}{d}", d = CodeSpan::TICK as char),
        Mark::Link { href } => format!("[{text}]({href})"),
        Mark::Wikilink { target, anchor } => match anchor {
            Some(anchor) => format!(
                "{}{target}{}{anchor}{}",
                WikiLink::OPEN,
                WikiLink::ANCHOR,
                WikiLink::CLOSE
            ),
            None => format!("{}{target}{}", WikiLink::OPEN, WikiLink::CLOSE),
        },
    }
}
