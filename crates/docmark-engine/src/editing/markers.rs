use regex::Regex;
use std::sync::LazyLock;

use crate::parsing::blocks::kinds::ManualMarkerTag;

static MARKER_REGION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<!--\s*MANUAL:START:([^:\n]+):([^\n]+?):([^:\s]+)\s*-->(.*?)<!--\s*MANUAL:END(?::[^\s>]*)?\s*-->",
    )
    .expect("marker region regex")
});

/// A manual annotation on its way into persisted markup.
///
/// Created transiently for a manual save and rendered straight into the
/// text; once re-parsed it becomes a [`Block::ManualMarker`].
///
/// [`Block::ManualMarker`]: crate::models::Block::ManualMarker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualMarkerRecord {
    pub author: String,
    pub timestamp: String,
    pub kind: String,
    pub content_text: String,
}

impl ManualMarkerRecord {
    pub fn new(
        author: impl Into<String>,
        timestamp: impl Into<String>,
        kind: impl Into<String>,
        content_text: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            timestamp: timestamp.into(),
            kind: kind.into(),
            content_text: content_text.into(),
        }
    }

    pub fn tag(&self) -> ManualMarkerTag {
        ManualMarkerTag::new(&self.author, &self.timestamp, &self.kind)
    }

    /// Persisted form: open tag, content, close tag, one per line.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.tag().render_open(),
            self.content_text,
            ManualMarkerTag::CLOSE
        )
    }
}

/// Every well-formed marker region in `markup`, in document order, with the
/// content trimmed. Unclosed markers are not reported.
pub fn extract_manual_markers(markup: &str) -> Vec<ManualMarkerRecord> {
    MARKER_REGION_REGEX
        .captures_iter(markup)
        .map(|caps| ManualMarkerRecord::new(&caps[1], &caps[2], &caps[3], caps[4].trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_is_three_lines() {
        let record = ManualMarkerRecord::new("alice", "2024-01-01T00:00:00Z", "note", "hello");
        assert_eq!(
            record.render(),
            "<!-- MANUAL:START:alice:2024-01-01T00:00:00Z:note -->\nhello\n<!-- MANUAL:END -->"
        );
    }

    #[test]
    fn extract_in_document_order() {
        let markup = "intro\n\n\
            <!-- MANUAL:START:alice:2024-01-01T00:00:00Z:note -->\nfirst\n<!-- MANUAL:END -->\n\n\
            middle\n\n\
            <!-- MANUAL:START:bob:2024-02-02T12:30:00Z:warning -->\n\n  second  \n\n<!-- MANUAL:END:WARNING -->\n";

        assert_eq!(
            extract_manual_markers(markup),
            vec![
                ManualMarkerRecord::new("alice", "2024-01-01T00:00:00Z", "note", "first"),
                ManualMarkerRecord::new("bob", "2024-02-02T12:30:00Z", "warning", "second"),
            ]
        );
    }

    #[test]
    fn extract_skips_unclosed_marker() {
        let markup = "<!-- MANUAL:START:alice:t:note -->\nnever closed";
        assert!(extract_manual_markers(markup).is_empty());
    }

    #[test]
    fn extract_round_trips_rendered_record() {
        let record = ManualMarkerRecord::new("carol", "2025-03-04T05:06:07Z", "tip", "body text");
        assert_eq!(extract_manual_markers(&record.render()), vec![record]);
    }
}
