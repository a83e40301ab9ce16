use regex::Regex;
use std::sync::LazyLock;

use crate::models::CalloutKind;

static OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>\s*\[!(\w+)\][ \t]*(.*)$").expect("callout regex"));

/// Admonition block opened by `> [!kind]`; the body is the following `>` lines.
pub struct Callout;

impl Callout {
    /// Parses a callout opener, returning its kind and any text after the
    /// `[!kind]` marker on the same line.
    ///
    /// Unknown kinds are not callouts; such lines fall through to blockquote.
    pub fn parse_open(line: &str) -> Option<(CalloutKind, &str)> {
        let caps = OPEN_REGEX.captures(line)?;
        let kind = caps.get(1)?.as_str().parse().ok()?;
        let rest = caps.get(2).map_or("", |m| m.as_str());
        Some((kind, rest))
    }

    pub fn render_open(kind: CalloutKind) -> String {
        format!("> [!{kind}]")
    }
}
