use regex::Regex;
use std::sync::LazyLock;

static BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
        .expect("thematic break regex")
});

/// Horizontal rule: three or more `-`, `*` or `_`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static str = "---";

    pub fn is_match(line: &str) -> bool {
        BREAK_REGEX.is_match(line)
    }
}
