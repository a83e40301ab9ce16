use crate::models::CalloutKind;

use super::kinds::{
    BlockQuote, Callout, CodeFence, Heading, ListMarker, ManualMarkerTag, Table, ThematicBreak,
};

/// Classification of a single line containing only local facts.
///
/// Variants are listed in dispatch precedence: the first rule that matches a
/// line decides its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'s> {
    /// Whitespace only.
    Blank,
    /// `<!-- MANUAL:START:author:timestamp:kind -->` at the end of the line,
    /// after `lead`.
    MarkerOpen { lead: &'s str, tag: ManualMarkerTag },
    /// `<!-- MANUAL:END -->` at the start of the line, before `trail`.
    MarkerClose { trail: &'s str },
    /// `> [!kind]`, with any text after the marker.
    CalloutOpen { kind: CalloutKind, title: &'s str },
    /// Any other line starting with `>`.
    Quote,
    Heading { level: u8, text: &'s str },
    FenceOpen { language: Option<&'s str> },
    /// A list marker wins over a rule, so `- - -` is an item.
    BulletItem { text: &'s str },
    OrderedItem { text: &'s str },
    ThematicBreak,
    /// Starts and ends with `|`. Only a table if the next line is one too.
    TableRow,
    /// Paragraph text.
    Text,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownLineClassifier {
    /// Whether `> [!kind]` opens a callout. Disabled inside callout bodies.
    pub callouts: bool,
    /// Whether `>` opens a quote or callout at all. Disabled once nesting is
    /// too deep, so further `>` lines read as paragraph text.
    pub quotes: bool,
}

impl Default for MarkdownLineClassifier {
    fn default() -> Self {
        Self {
            callouts: true,
            quotes: true,
        }
    }
}

impl MarkdownLineClassifier {
    /// A classifier for callout bodies, where callouts don't nest.
    pub fn in_callout() -> Self {
        Self {
            callouts: false,
            ..Self::default()
        }
    }

    /// A classifier with every `>` container disabled.
    pub fn flat() -> Self {
        Self {
            callouts: false,
            quotes: false,
        }
    }

    pub fn classify<'s>(&self, line: &'s str) -> LineClass<'s> {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((lead, tag)) = ManualMarkerTag::parse_open(line) {
            return LineClass::MarkerOpen { lead, tag };
        }
        if let Some(trail) = ManualMarkerTag::parse_close(line) {
            return LineClass::MarkerClose { trail };
        }
        if self.quotes
            && self.callouts
            && let Some((kind, title)) = Callout::parse_open(line)
        {
            return LineClass::CalloutOpen { kind, title };
        }
        if self.quotes && BlockQuote::is_quote_line(line) {
            return LineClass::Quote;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some(language) = CodeFence::open(line) {
            return LineClass::FenceOpen { language };
        }
        if let Some(text) = ListMarker::bullet_item(line) {
            return LineClass::BulletItem { text };
        }
        if let Some(text) = ListMarker::ordered_item(line) {
            return LineClass::OrderedItem { text };
        }
        if ThematicBreak::is_match(line) {
            return LineClass::ThematicBreak;
        }
        if Table::is_row(line) {
            return LineClass::TableRow;
        }
        LineClass::Text
    }
}
