use crate::models::{Block, CalloutKind, ListItem, TableCell, TableRow};
use crate::parsing::{diagnostics::ParseDiagnostic, inline::tokenize};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, ListKind, ManualMarkerTag, Paragraph, Table},
};

/// State shared by a builder and every nested builder it spawns.
#[derive(Debug, Default)]
pub struct ParseState {
    next_marker: usize,
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseState {
    /// Marker ids are ordinal in document order, so reparsing the same text
    /// always yields the same ids.
    fn next_marker_id(&mut self) -> String {
        let id = format!("marker-{}", self.next_marker);
        self.next_marker += 1;
        id
    }
}

/// Deepest container nesting the builder will open.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Forward, single-pass block construction over a run of lines.
///
/// At each line the classifier picks exactly one rule, which consumes one or
/// more lines and advances the cursor. Container rules (manual marker,
/// callout, blockquote) hand their body lines to a nested builder.
pub struct BlockBuilder<'a, 's> {
    /// Owned so a line can be cut down to the text after a close tag.
    lines: Vec<&'s str>,
    /// 1-indexed line number of `lines[0]` in the whole input.
    first_line: usize,
    depth: usize,
    classifier: MarkdownLineClassifier,
    state: &'a mut ParseState,
    cursor: usize,
    out: Vec<Block>,
}

impl<'a, 's> BlockBuilder<'a, 's> {
    pub fn new(lines: Vec<&'s str>, state: &'a mut ParseState) -> Self {
        Self::nested_in(lines, 1, 0, MarkdownLineClassifier::default(), state)
    }

    fn nested_in(
        lines: Vec<&'s str>,
        first_line: usize,
        depth: usize,
        classifier: MarkdownLineClassifier,
        state: &'a mut ParseState,
    ) -> Self {
        let classifier = if depth >= MAX_NESTING_DEPTH {
            MarkdownLineClassifier::flat()
        } else {
            classifier
        };
        Self {
            lines,
            first_line,
            depth,
            classifier,
            state,
            cursor: 0,
            out: vec![],
        }
    }

    /// Consumes every line. Never returns an empty block list: a run with no
    /// blocks becomes a single empty paragraph.
    pub fn build(mut self) -> Vec<Block> {
        while self.cursor < self.lines.len() {
            self.step();
        }
        if self.out.is_empty() {
            self.out.push(Block::empty_paragraph());
        }
        self.out
    }

    fn line_number(&self, index: usize) -> usize {
        self.first_line + index
    }

    fn classify(&self, index: usize) -> LineClass<'s> {
        self.classifier.classify(self.lines[index])
    }

    fn step(&mut self) {
        match self.classify(self.cursor) {
            LineClass::Blank => self.cursor += 1,
            LineClass::MarkerOpen { lead, tag } => self.consume_marker(lead, tag),
            LineClass::MarkerClose { trail } => {
                let line = self.line_number(self.cursor);
                log::warn!("Dropping manual marker close tag without open tag on line {line}");
                self.state
                    .diagnostics
                    .push(ParseDiagnostic::StrayMarkerClose { line });
                self.resume_after_close(self.cursor, trail);
            }
            LineClass::CalloutOpen { kind, title } => self.consume_callout(kind, title),
            LineClass::Quote => self.consume_blockquote(),
            LineClass::Heading { level, text } => {
                self.out.push(Block::Heading {
                    level,
                    inline: tokenize(text),
                });
                self.cursor += 1;
            }
            LineClass::FenceOpen { language } => self.consume_fence(language),
            LineClass::BulletItem { .. } => self.consume_list(ListKind::Bullet),
            LineClass::OrderedItem { .. } => self.consume_list(ListKind::Ordered),
            LineClass::ThematicBreak => {
                self.out.push(Block::HorizontalRule);
                self.cursor += 1;
            }
            LineClass::TableRow if self.starts_table(self.cursor) => self.consume_table(),
            LineClass::TableRow | LineClass::Text => self.consume_paragraph(),
        }
    }

    /// Parses `body` (lines starting at `start` in this builder's numbering)
    /// as a nested document one level deeper.
    fn parse_nested(
        &mut self,
        body: Vec<&'s str>,
        start: usize,
        classifier: MarkdownLineClassifier,
    ) -> Vec<Block> {
        let first_line = self.line_number(start);
        BlockBuilder::nested_in(body, first_line, self.depth + 1, classifier, self.state).build()
    }

    /// Moves past a close tag on line `index`. Text after the tag stays on
    /// that line and is parsed next.
    fn resume_after_close(&mut self, index: usize, trail: &'s str) {
        if trail.trim().is_empty() {
            self.cursor = index + 1;
        } else {
            self.lines[index] = trail;
            self.cursor = index;
        }
    }

    /// Consumes through the matching close tag. A second open tag or end of
    /// input closes the marker implicitly; markers never nest. Text before
    /// the open tag is parsed as its own blocks first.
    fn consume_marker(&mut self, lead: &'s str, tag: ManualMarkerTag) {
        let open = self.cursor;
        if !lead.trim().is_empty() {
            let classifier = self.classifier;
            let blocks = self.parse_nested(vec![lead], open, classifier);
            self.out.extend(
                blocks
                    .into_iter()
                    .filter(|block| !matches!(block, Block::Paragraph { inline } if inline.is_empty())),
            );
        }
        let id = self.state.next_marker_id();

        let body_start = open + 1;
        let mut end = body_start;
        let mut trail = None;
        while end < self.lines.len() {
            if let Some(rest) = ManualMarkerTag::parse_close(self.lines[end]) {
                trail = Some(rest);
                break;
            }
            if ManualMarkerTag::parse_open(self.lines[end]).is_some() {
                break;
            }
            end += 1;
        }

        if trail.is_none() {
            let line = self.line_number(open);
            log::warn!(
                "Manual marker by {} on line {line} has no close tag; closing implicitly",
                tag.author
            );
            self.state.diagnostics.push(ParseDiagnostic::MalformedMarker {
                line,
                author: tag.author.clone(),
            });
        }

        let body = self.lines[body_start..end].to_vec();
        let children = self.parse_nested(body, body_start, MarkdownLineClassifier::default());
        match trail {
            Some(rest) => self.resume_after_close(end, rest),
            None => self.cursor = end,
        }

        self.out.push(Block::ManualMarker {
            author: tag.author,
            timestamp: tag.timestamp,
            kind: tag.kind,
            id,
            children,
        });
    }

    /// Collects the `>` lines directly after `start`, stripped of one level of quoting.
    fn quoted_run(&self, start: usize) -> (Vec<&'s str>, usize) {
        let mut body = vec![];
        let mut end = start;
        while end < self.lines.len() && BlockQuote::is_quote_line(self.lines[end]) {
            body.push(BlockQuote::strip_prefix(self.lines[end]));
            end += 1;
        }
        (body, end)
    }

    fn consume_callout(&mut self, kind: CalloutKind, title: &'s str) {
        let open = self.cursor;
        let (mut body, end) = self.quoted_run(open + 1);

        // Text after `[!kind]` on the opener is kept as the first body line.
        let body_start = if title.trim().is_empty() {
            open + 1
        } else {
            body.insert(0, title);
            open
        };

        let children = self.parse_nested(body, body_start, MarkdownLineClassifier::in_callout());
        self.cursor = end;
        self.out.push(Block::Callout { kind, children });
    }

    fn consume_blockquote(&mut self) {
        let start = self.cursor;
        let (body, end) = self.quoted_run(start);
        let children = self.parse_nested(body, start, MarkdownLineClassifier::default());
        self.cursor = end;
        self.out.push(Block::Blockquote { children });
    }

    /// Copies lines verbatim up to the closing fence. An unterminated fence
    /// runs to end of input.
    fn consume_fence(&mut self, language: Option<&'s str>) {
        let lines = &self.lines;
        let body_start = self.cursor + 1;
        let mut end = body_start;
        while end < lines.len() && !CodeFence::closes(lines[end]) {
            end += 1;
        }

        self.out.push(Block::CodeBlock {
            language: language.map(str::to_string),
            raw_text: lines[body_start..end].join("\n"),
        });
        self.cursor = (end + 1).min(lines.len());
    }

    fn consume_list(&mut self, kind: ListKind) {
        let mut items = vec![];
        while self.cursor < self.lines.len() {
            let text = match (kind, self.classify(self.cursor)) {
                (ListKind::Bullet, LineClass::BulletItem { text })
                | (ListKind::Ordered, LineClass::OrderedItem { text }) => text,
                _ => break,
            };
            items.push(ListItem::paragraph(tokenize(text)));
            self.cursor += 1;
        }

        self.out.push(match kind {
            ListKind::Bullet => Block::BulletList { items },
            ListKind::Ordered => Block::OrderedList { items },
        });
    }

    /// A pipe row only starts a table when the line after it is one too.
    fn starts_table(&self, index: usize) -> bool {
        Table::is_row(self.lines[index])
            && self
                .lines
                .get(index + 1)
                .is_some_and(|line| Table::is_row(line))
    }

    /// The first retained row is the header; a separator in second position
    /// is dropped.
    fn consume_table(&mut self) {
        let lines = &self.lines;
        let start = self.cursor;
        let mut end = start;
        while end < lines.len() && Table::is_row(lines[end]) {
            end += 1;
        }

        let rows: Vec<TableRow> = lines[start..end]
            .iter()
            .enumerate()
            .filter(|(i, line)| !(*i == 1 && Table::is_separator(line)))
            .enumerate()
            .map(|(row_index, (_, line))| TableRow {
                cells: Table::split_cells(line)
                    .into_iter()
                    .map(|cell| TableCell {
                        header: row_index == 0,
                        inline: tokenize(cell),
                    })
                    .collect(),
            })
            .collect();

        self.cursor = end;
        if !rows.is_empty() {
            self.out.push(Block::Table { rows });
        }
    }

    /// Absorbs following lines until a blank line or a line that opens any
    /// other block. Rules and pipe rows that don't start a table can't
    /// interrupt a paragraph. A paragraph that tokenizes to nothing is dropped.
    fn consume_paragraph(&mut self) {
        let start = self.cursor;
        let mut end = start + 1;
        while end < self.lines.len() && self.continues_paragraph(end) {
            end += 1;
        }
        self.cursor = end;

        let inline = tokenize(&Paragraph::join_lines(&self.lines[start..end]));
        if !inline.is_empty() {
            self.out.push(Block::Paragraph { inline });
        }
    }

    fn continues_paragraph(&self, index: usize) -> bool {
        match self.classify(index) {
            LineClass::Text | LineClass::ThematicBreak => true,
            LineClass::TableRow => !self.starts_table(index),
            _ => false,
        }
    }
}
