use regex::Regex;
use std::sync::LazyLock;

static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").expect("bullet regex"));

static ORDERED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").expect("ordered regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

/// List item markers. One item per line; items never span lines.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "- ";
    /// Indentation for continuation lines of a multi-block item.
    pub const CONTINUATION: &'static str = "  ";

    /// Text of a `-`, `*` or `+` item.
    pub fn bullet_item(line: &str) -> Option<&str> {
        Some(BULLET_REGEX.captures(line)?.get(1)?.as_str())
    }

    /// Text of a `1.` style item.
    pub fn ordered_item(line: &str) -> Option<&str> {
        Some(ORDERED_REGEX.captures(line)?.get(1)?.as_str())
    }

    /// Marker for the item at zero-based `index`.
    pub fn render(kind: ListKind, index: usize) -> String {
        match kind {
            ListKind::Bullet => Self::BULLET.to_string(),
            ListKind::Ordered => format!("{}. ", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", Some("item"))]
    #[case("* star", Some("star"))]
    #[case("+ plus", Some("plus"))]
    #[case("  - indented", Some("indented"))]
    #[case("- ", Some(""))]
    #[case("-nospace", None)]
    #[case("**bold** text", None)]
    fn bullet(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListMarker::bullet_item(line), expected);
    }

    #[rstest]
    #[case("1. first", Some("first"))]
    #[case("10. tenth", Some("tenth"))]
    #[case("1.nospace", None)]
    #[case("1) paren", None)]
    fn ordered(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ListMarker::ordered_item(line), expected);
    }

    #[test]
    fn render_markers() {
        assert_eq!(ListMarker::render(ListKind::Bullet, 4), "- ");
        assert_eq!(ListMarker::render(ListKind::Ordered, 0), "1. ");
        assert_eq!(ListMarker::render(ListKind::Ordered, 2), "3. ");
    }
}
