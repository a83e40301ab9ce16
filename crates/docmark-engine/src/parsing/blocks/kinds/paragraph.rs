/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other rule matches. Their lines are joined with a single space before
/// inline tokenizing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn join_lines(lines: &[&str]) -> String {
        lines
            .iter()
            .map(|l| l.trim())
            .collect::<Vec<_>>()
            .join(Self::LINE_JOIN)
    }
}
