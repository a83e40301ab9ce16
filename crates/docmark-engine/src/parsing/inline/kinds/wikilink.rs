pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ANCHOR: char = '#';

    /// Splits the inside of `[[...]]` into target and optional anchor.
    ///
    /// Returns `None` when the target is empty or the inner text contains
    /// stray brackets, in which case the run stays plain text.
    pub fn split(inner: &str) -> Option<(&str, Option<&str>)> {
        if inner.contains(['[', ']']) {
            return None;
        }
        let (target, anchor) = match inner.split_once(Self::ANCHOR) {
            Some((target, anchor)) => (target.trim(), Some(anchor.trim())),
            None => (inner.trim(), None),
        };
        if target.is_empty() {
            return None;
        }
        Some((target, anchor.filter(|a| !a.is_empty())))
    }

    /// Human-readable text for a target: hyphens become spaces and every
    /// word starts with a capital. `order-validation` -> `Order Validation`.
    pub fn display_text(target: &str) -> String {
        let mut out = String::with_capacity(target.len());
        let mut prev_word = false;
        for c in target.chars() {
            let c = if c == '-' { ' ' } else { c };
            let is_word = c.is_alphanumeric() || c == '_';
            if is_word && !prev_word {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            prev_word = is_word;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("order-validation", "Order Validation")]
    #[case("chapter-04-order-entry", "Chapter 04 Order Entry")]
    #[case("already Spaced", "Already Spaced")]
    #[case("v6.1-notes", "V6.1 Notes")]
    fn display_text_capitalizes_words(#[case] target: &str, #[case] expected: &str) {
        assert_eq!(WikiLink::display_text(target), expected);
    }

    #[test]
    fn split_plain_target() {
        assert_eq!(WikiLink::split("notes"), Some(("notes", None)));
    }

    #[test]
    fn split_target_with_anchor() {
        assert_eq!(
            WikiLink::split("order-tips#section-4-1"),
            Some(("order-tips", Some("section-4-1")))
        );
    }

    #[test]
    fn split_rejects_empty_target() {
        assert_eq!(WikiLink::split("#anchor"), None);
        assert_eq!(WikiLink::split("  "), None);
    }

    #[test]
    fn split_drops_empty_anchor() {
        assert_eq!(WikiLink::split("page#"), Some(("page", None)));
    }
}
