use regex::Regex;
use std::sync::LazyLock;

use super::BlockQuote;

// Author may not contain `:`; kind may not contain `:` or whitespace; the
// timestamp takes everything in between, so ISO 8601 times keep their colons.
// An open tag may end a line of other text, and a close tag may start one.
static OPEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)<!--\s*MANUAL:START:([^:]+):(.+):([^:\s]+)\s*-->\s*$")
        .expect("marker open regex")
});

static CLOSE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<!--\s*MANUAL:END(?::[^\s>]*)?\s*-->(.*)$").expect("marker close regex")
});

/// Metadata carried by a manual marker open tag.
///
/// `<!-- MANUAL:START:{author}:{timestamp}:{kind} -->`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualMarkerTag {
    pub author: String,
    pub timestamp: String,
    pub kind: String,
}

impl ManualMarkerTag {
    pub const CLOSE: &'static str = "<!-- MANUAL:END -->";

    pub fn new(
        author: impl Into<String>,
        timestamp: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            timestamp: timestamp.into(),
            kind: kind.into(),
        }
    }

    /// Parses an open tag at the end of a line, returning the text before it
    /// (the lead) and the tag.
    ///
    /// A lead starting with `>` belongs to a quote line, so the tag is left
    /// for the quote's own body to parse.
    pub fn parse_open(line: &str) -> Option<(&str, Self)> {
        let caps = OPEN_REGEX.captures(line)?;
        let lead = caps.get(1)?.as_str();
        if lead.starts_with(BlockQuote::PREFIX) {
            return None;
        }
        Some((lead, Self::new(&caps[2], &caps[3], &caps[4])))
    }

    /// Parses a close tag at the start of a line, returning the text after
    /// it (the trail). `<!-- MANUAL:END:NOTE -->` is accepted too.
    pub fn parse_close(line: &str) -> Option<&str> {
        Some(CLOSE_REGEX.captures(line)?.get(1)?.as_str())
    }

    /// The open tag exactly as persisted.
    pub fn render_open(&self) -> String {
        format!(
            "<!-- MANUAL:START:{}:{}:{} -->",
            self.author, self.timestamp, self.kind
        )
    }
}
