//! # Serializing
//!
//! The inverse of parsing: walks a [`Document`] and emits canonical markup.
//! Top-level blocks (and the children of every container) are separated by
//! a blank line; list items are separated by a single newline.

pub mod inline;

use crate::models::{Block, Document, ListItem, TableRow};
use crate::parsing::blocks::kinds::{
    BlockQuote, Callout, CodeFence, Heading, ListKind, ListMarker, ManualMarkerTag, Table,
    ThematicBreak,
};

pub use inline::serialize_inline;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Serializes a document tree to markup text.
pub fn serialize(doc: &Document) -> String {
    serialize_blocks(&doc.blocks)
}

fn serialize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(serialize_block)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn serialize_block(block: &Block) -> String {
    match block {
        Block::Heading { level, inline } => {
            format!("{} {}", Heading::render_marker(*level), serialize_inline(inline))
        }
        Block::Paragraph { inline } => serialize_inline(inline),
        Block::CodeBlock { language, raw_text } => CodeFence::render(language.as_deref(), raw_text),
        Block::BulletList { items } => serialize_list(ListKind::Bullet, items),
        Block::OrderedList { items } => serialize_list(ListKind::Ordered, items),
        Block::Blockquote { children } => {
            let body = BlockQuote::prefix_lines(&serialize_blocks(children));
            if body.is_empty() {
                BlockQuote::PREFIX.to_string()
            } else {
                body
            }
        }
        Block::Callout { kind, children } => {
            let body = BlockQuote::prefix_lines(&serialize_blocks(children));
            let open = Callout::render_open(*kind);
            if body.is_empty() {
                open
            } else {
                format!("{open}\n{body}")
            }
        }
        Block::ManualMarker {
            author,
            timestamp,
            kind,
            children,
            ..
        } => {
            let open = ManualMarkerTag::new(author, timestamp, kind).render_open();
            format!(
                "{open}\n{}\n{}",
                serialize_blocks(children),
                ManualMarkerTag::CLOSE
            )
        }
        Block::Table { rows } => serialize_table(rows),
        Block::HorizontalRule => ThematicBreak::MARKER.to_string(),
        Block::Extension { name, children } => {
            log::debug!("Serializing unknown block {name:?} as its children");
            serialize_blocks(children)
        }
    }
}

/// One line per item. Extra lines of a multi-block item are indented.
fn serialize_list(kind: ListKind, items: &[ListItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = ListMarker::render(kind, index);
            let body = item
                .blocks
                .iter()
                .map(serialize_block)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            let mut lines = body.lines();
            let mut out = format!("{marker}{}", lines.next().unwrap_or_default());
            for line in lines {
                out.push('\n');
                out.push_str(ListMarker::CONTINUATION);
                out.push_str(line);
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header row, a `---` separator per column, then body rows.
fn serialize_table(rows: &[TableRow]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let render = |row: &TableRow| {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| serialize_inline(&cell.inline))
            .collect();
        Table::render_row(&cells)
    };

    let mut lines = vec![render(header), Table::render_separator(header.cells.len())];
    lines.extend(body.iter().map(render));
    lines.join("\n")
}
