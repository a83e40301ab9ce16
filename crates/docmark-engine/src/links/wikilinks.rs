use regex::Regex;
use std::sync::LazyLock;

// Brackets are excluded inside the link, matching the inline tokenizer, so
// `[[[x]]]` links to `x` here exactly as it does in a parsed document.
static WIKILINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\[\]#]+)(#[^\[\]]+)?\]\]").expect("wikilink regex")
});

/// A wikilink occurrence found in raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiLinkRef {
    /// Target document id, e.g. `order-validation-tips`.
    pub target: String,
    /// Sub-document anchor after `#`, e.g. `section-4-1`.
    pub anchor: Option<String>,
    /// The full `[[...]]` text.
    pub raw: String,
    /// Byte offset of `raw` in the scanned text.
    pub offset: usize,
}

/// Extracts every `[[target]]` / `[[target#anchor]]` from `markup`.
pub fn parse_wikilinks(markup: &str) -> Vec<WikiLinkRef> {
    WIKILINK_REGEX
        .captures_iter(markup)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let target = caps.get(1)?.as_str().trim();
            if target.is_empty() {
                return None;
            }
            Some(WikiLinkRef {
                target: target.to_string(),
                anchor: caps
                    .get(2)
                    .map(|m| m.as_str().trim_start_matches('#').trim().to_string())
                    .filter(|a| !a.is_empty()),
                raw: full.as_str().to_string(),
                offset: full.start(),
            })
        })
        .collect()
}

/// Whether `line` contains at least one wikilink to `target`, anchor ignored.
pub fn links_to(line: &str, target: &str) -> bool {
    WIKILINK_REGEX
        .captures_iter(line)
        .any(|caps| caps.get(1).is_some_and(|m| m.as_str().trim() == target))
}
