use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Errors raised when reading a document tree from its JSON interchange form.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Invalid document tree: {0}")]
    Json(#[from] serde_json::Error),
}

/// The root of a parsed document: an ordered sequence of blocks.
///
/// A document is never block-less once produced by the parser; the empty
/// document is represented as a single empty paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The canonical empty document.
    pub fn empty() -> Self {
        Self {
            blocks: vec![Block::empty_paragraph()],
        }
    }

    /// Returns true if this is the canonical empty document.
    pub fn is_empty(&self) -> bool {
        matches!(self.blocks.as_slice(), [Block::Paragraph { inline }] if inline.is_empty())
    }

    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a tree from JSON, accepting block types this version does not know.
    ///
    /// Unknown block objects are rewritten into [`Block::Extension`] wrappers that
    /// keep their `children`, so the serializer can emit their content transparently.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let mut value: Value = serde_json::from_str(json)?;
        if let Some(blocks) = value.get_mut("blocks") {
            wrap_unknown_blocks(blocks);
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Block `type` tags understood by [`Block`]'s serde representation.
const KNOWN_BLOCK_TYPES: &[&str] = &[
    "heading",
    "paragraph",
    "code_block",
    "bullet_list",
    "ordered_list",
    "blockquote",
    "callout",
    "manual_marker",
    "table",
    "horizontal_rule",
    "extension",
];

fn wrap_unknown_blocks(blocks: &mut Value) {
    let Some(blocks) = blocks.as_array_mut() else {
        return;
    };

    for block in blocks.iter_mut() {
        let Some(obj) = block.as_object_mut() else {
            continue;
        };

        let name = obj
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if !KNOWN_BLOCK_TYPES.contains(&name.as_str()) {
            log::debug!("Wrapping unknown block type {name:?} as extension");
            let children = obj
                .remove("children")
                .filter(Value::is_array)
                .unwrap_or_else(|| Value::Array(vec![]));
            *block = serde_json::json!({
                "type": "extension",
                "name": name,
                "children": children,
            });
        }

        if let Some(children) = block.get_mut("children") {
            wrap_unknown_blocks(children);
        }
        if let Some(items) = block.get_mut("items").and_then(Value::as_array_mut) {
            for item in items {
                if let Some(item_blocks) = item.get_mut("blocks") {
                    wrap_unknown_blocks(item_blocks);
                }
            }
        }
    }
}

/// A structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        /// 1..=6
        level: u8,
        inline: Vec<InlineSpan>,
    },
    Paragraph {
        inline: Vec<InlineSpan>,
    },
    /// Fenced code. The raw text is never inline-parsed.
    CodeBlock {
        language: Option<String>,
        raw_text: String,
    },
    BulletList {
        items: Vec<ListItem>,
    },
    OrderedList {
        items: Vec<ListItem>,
    },
    Blockquote {
        children: Vec<Block>,
    },
    /// An admonition (`> [!kind]`). Never directly contains another callout.
    Callout {
        kind: CalloutKind,
        children: Vec<Block>,
    },
    /// A human-authored region that survives automated re-processing.
    /// Never directly contains another manual marker.
    ManualMarker {
        author: String,
        timestamp: String,
        kind: String,
        id: String,
        children: Vec<Block>,
    },
    Table {
        rows: Vec<TableRow>,
    },
    HorizontalRule,
    /// A node produced by a newer producer that this version does not model.
    /// Serialized as its children in sequence.
    Extension {
        name: String,
        children: Vec<Block>,
    },
}

impl Block {
    pub fn empty_paragraph() -> Self {
        Block::Paragraph { inline: vec![] }
    }

    pub fn paragraph(inline: Vec<InlineSpan>) -> Self {
        Block::Paragraph { inline }
    }
}

/// One entry of a bullet or ordered list; canonically a single paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub blocks: Vec<Block>,
}

impl ListItem {
    pub fn paragraph(inline: Vec<InlineSpan>) -> Self {
        Self {
            blocks: vec![Block::Paragraph { inline }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub header: bool,
    pub inline: Vec<InlineSpan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    Info,
    Important,
    Warning,
    Tip,
    Note,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 5] = [
        CalloutKind::Info,
        CalloutKind::Important,
        CalloutKind::Warning,
        CalloutKind::Tip,
        CalloutKind::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutKind::Info => "info",
            CalloutKind::Important => "important",
            CalloutKind::Warning => "warning",
            CalloutKind::Tip => "tip",
            CalloutKind::Note => "note",
        }
    }
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown callout kind: {0}")]
pub struct UnknownCalloutKind(pub String);

impl FromStr for CalloutKind {
    type Err = UnknownCalloutKind;

    /// Case-insensitive: `[!WARNING]` and `[!warning]` are the same kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalloutKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCalloutKind(s.to_string()))
    }
}

/// A run of text with the character-level marks applied to it.
///
/// `content` is never empty for spans produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub content: String,
    /// Innermost mark first.
    pub marks: Vec<Mark>,
}

impl InlineSpan {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            marks: vec![],
        }
    }

    pub fn marked(content: impl Into<String>, mark: Mark) -> Self {
        Self {
            content: content.into(),
            marks: vec![mark],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Link {
        href: String,
    },
    Wikilink {
        target: String,
        anchor: Option<String>,
    },
}
