use super::markers::ManualMarkerRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotateError {
    /// The edit is identical to, or a pure deletion from, the original.
    #[error("Nothing to annotate: the edit adds no text")]
    NothingToAnnotate,
}

/// The split of an edited text around its single changed region.
///
/// `edited == prefix + added + suffix`; the matching middle of the original
/// (the excised text) is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedRegion<'a> {
    pub prefix: &'a str,
    pub added: &'a str,
    pub suffix: &'a str,
}

/// Longest common prefix, then longest common suffix of what remains, over
/// characters. Prefix and suffix never overlap in either string.
///
/// This isolates one contiguous insertion exactly. Several separate edits
/// collapse into one region spanning from the first to the last, including
/// any unchanged text between them.
pub fn changed_region<'a>(original: &str, edited: &'a str) -> ChangedRegion<'a> {
    let prefix_len: usize = original
        .chars()
        .zip(edited.chars())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();

    let suffix_len: usize = original[prefix_len..]
        .chars()
        .rev()
        .zip(edited[prefix_len..].chars().rev())
        .take_while(|(a, b)| a == b)
        .map(|(c, _)| c.len_utf8())
        .sum();

    let added_end = edited.len() - suffix_len;
    ChangedRegion {
        prefix: &edited[..prefix_len],
        added: &edited[prefix_len..added_end],
        suffix: &edited[added_end..],
    }
}

/// Wraps the text added between `original` and `edited` in a manual marker.
///
/// The rendered marker is spliced directly between the unchanged prefix and
/// suffix. The parser accepts an open tag at the end of a line and a close
/// tag at the start of one, so the result re-parses to a manual marker block.
///
/// # Errors
/// [`AnnotateError::NothingToAnnotate`] when the edit adds no text.
pub fn try_annotate(
    original: &str,
    edited: &str,
    author: &str,
    timestamp: &str,
    kind: &str,
) -> Result<String, AnnotateError> {
    let region = changed_region(original, edited);
    if region.added.is_empty() {
        return Err(AnnotateError::NothingToAnnotate);
    }

    let record = ManualMarkerRecord::new(author, timestamp, kind, region.added);
    log::debug!(
        "Annotating {} added bytes by {} as {}",
        record.content_text.len(),
        record.author,
        record.kind
    );

    Ok(format!("{}{}{}", region.prefix, record.render(), region.suffix))
}

/// [`try_annotate`], returning `edited` unchanged when there is nothing to annotate.
pub fn annotate(original: &str, edited: &str, author: &str, timestamp: &str, kind: &str) -> String {
    match try_annotate(original, edited, author, timestamp, kind) {
        Ok(annotated) => annotated,
        Err(AnnotateError::NothingToAnnotate) => edited.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, InlineSpan};
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn region_for_single_insertion() {
        assert_eq!(
            changed_region("A C", "A B C"),
            ChangedRegion {
                prefix: "A ",
                added: "B ",
                suffix: "C",
            }
        );
    }

    #[test]
    fn region_for_pure_deletion_has_nothing_added() {
        let region = changed_region("one two three", "one three");
        assert_eq!(region.added, "");
        assert_eq!(format!("{}{}", region.prefix, region.suffix), "one three");
    }

    #[test]
    fn region_never_overlaps() {
        // Repeated characters tempt the suffix scan back into the prefix.
        let region = changed_region("aa", "aaa");
        assert_eq!(region.prefix, "aa");
        assert_eq!(region.added, "a");
        assert_eq!(region.suffix, "");
    }

    #[test]
    fn region_is_char_aware() {
        let region = changed_region("café", "café au lait");
        assert_eq!(region.prefix, "café");
        assert_eq!(region.added, " au lait");
    }

    #[test]
    fn no_change_is_no_op() {
        assert_eq!(
            try_annotate("same text", "same text", "bob", "t", "note"),
            Err(AnnotateError::NothingToAnnotate)
        );
        assert_eq!(annotate("same text", "same text", "bob", "t", "note"), "same text");
    }

    #[test]
    fn deletion_is_no_op() {
        assert_eq!(annotate("A B C", "A C", "bob", "t", "note"), "A C");
    }

    #[test]
    fn single_insertion_is_wrapped() {
        assert_eq!(
            annotate("A C", "A B C", "bob", "t", "note"),
            "A <!-- MANUAL:START:bob:t:note -->\nB \n<!-- MANUAL:END -->C"
        );
    }

    #[test]
    fn inline_insertion_reparses_as_marker() {
        let doc = parse(&annotate("A C", "A B C", "bob", "t", "note"));
        assert_eq!(
            doc.blocks,
            vec![
                Block::paragraph(vec![InlineSpan::plain("A")]),
                Block::ManualMarker {
                    author: "bob".to_string(),
                    timestamp: "t".to_string(),
                    kind: "note".to_string(),
                    id: "marker-0".to_string(),
                    children: vec![Block::paragraph(vec![InlineSpan::plain("B")])],
                },
                Block::paragraph(vec![InlineSpan::plain("C")]),
            ]
        );
    }

    #[test]
    fn insertion_of_whole_lines() {
        let original = "# Title\n\nEnd.\n";
        let edited = "# Title\n\nMy note.\n\nEnd.\n";
        assert_eq!(
            annotate(original, edited, "ann", "2024-01-01T00:00:00Z", "tip"),
            "# Title\n\n<!-- MANUAL:START:ann:2024-01-01T00:00:00Z:tip -->\nMy note.\n\n\n<!-- MANUAL:END -->End.\n"
        );
    }

    #[test]
    fn append_to_empty_original() {
        assert_eq!(
            annotate("", "fresh", "a", "t", "note"),
            "<!-- MANUAL:START:a:t:note -->\nfresh\n<!-- MANUAL:END -->"
        );
    }
}
