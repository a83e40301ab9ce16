use regex::Regex;
use std::sync::LazyLock;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading regex"));

/// ATX heading `# Title` .. `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns the level and the heading text (trailing whitespace removed).
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = HEADING_REGEX.captures(line)?;
        let text = caps.get(2)?.as_str().trim();
        if text.is_empty() {
            return None;
        }
        let level = u8::try_from(caps[1].len()).ok()?;
        Some((level, text))
    }

    pub fn render_marker(level: u8) -> String {
        Self::MARKER.to_string().repeat(usize::from(level.clamp(1, 6)))
    }
}
