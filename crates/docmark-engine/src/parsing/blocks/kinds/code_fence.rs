/// Fenced code block delimited by ```` ``` ```` lines.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Parses an opening fence, returning the info-string language if any.
    pub fn open(line: &str) -> Option<Option<&str>> {
        let info = line.strip_prefix(Self::BACKTICKS)?.trim();
        Some((!info.is_empty()).then_some(info))
    }

    pub fn closes(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    pub fn render(language: Option<&str>, raw_text: &str) -> String {
        format!(
            "{fence}{}\n{raw_text}\n{fence}",
            language.unwrap_or_default(),
            fence = Self::BACKTICKS
        )
    }
}
