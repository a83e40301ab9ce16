//! Whole-document parser tests. Per-construct tests live next to each kind.


use super::*;
use crate::models::{Block, CalloutKind, InlineSpan, ListItem, Mark, TableCell, TableRow};
use crate::parsing::blocks::MAX_NESTING_DEPTH;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn para(text: &str) -> Block {
    Block::paragraph(vec![InlineSpan::plain(text)])
}

fn marker(author: &str, id: &str, children: Vec<Block>) -> Block {
    Block::ManualMarker {
        author: author.to_string(),
        timestamp: "2024-01-01T10:00:00Z".to_string(),
        kind: "note".to_string(),
        id: id.to_string(),
        children,
    }
}

const OPEN_ALICE: &str = "<!-- MANUAL:START:alice:2024-01-01T10:00:00Z:note -->";
const OPEN_BOB: &str = "<!-- MANUAL:START:bob:2024-01-01T10:00:00Z:note -->";
const CLOSE: &str = "<!-- MANUAL:END -->";

#[rstest]
#[case("")]
#[case("   \n\n\t\n")]
fn empty_input_is_the_empty_document(#[case] input: &str) {
    let doc = parse(input);
    assert!(doc.is_empty());
    assert_eq!(doc, Document::empty());
}

#[test]
fn headings_and_paragraphs() {
    let doc = parse("# Title\n\nline one\nline two\n\n## Sub\n#NoSpace");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Heading {
                level: 1,
                inline: vec![InlineSpan::plain("Title")],
            },
            para("line one line two"),
            Block::Heading {
                level: 2,
                inline: vec![InlineSpan::plain("Sub")],
            },
            para("#NoSpace"),
        ]
    );
}

#[test]
fn paragraph_stops_at_block_openers() {
    let doc = parse("text\n- item\ntext\n## Head\ntext\n> quote");
    assert_eq!(
        doc.blocks,
        vec![
            para("text"),
            Block::BulletList {
                items: vec![ListItem::paragraph(vec![InlineSpan::plain("item")])],
            },
            para("text"),
            Block::Heading {
                level: 2,
                inline: vec![InlineSpan::plain("Head")],
            },
            para("text"),
            Block::Blockquote {
                children: vec![para("quote")],
            },
        ]
    );
}

#[rstest]
#[case("text\n---", "text ---")]
#[case("text\n***\nmore", "text *** more")]
#[case("text\n| a |", "text | a |")]
fn paragraph_absorbs_lines_that_cannot_interrupt_it(#[case] input: &str, #[case] text: &str) {
    assert_eq!(parse(input).blocks, vec![para(text)]);
}

#[test]
fn paragraph_stops_at_a_table() {
    let doc = parse("text\n| a |\n| b |");
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0], para("text"));
    assert!(matches!(doc.blocks[1], Block::Table { .. }));
}

#[test]
fn rule_after_blank_line_is_a_rule() {
    let doc = parse("text\n\n---");
    assert_eq!(doc.blocks, vec![para("text"), Block::HorizontalRule]);
}

#[test]
fn list_marker_wins_over_rule() {
    let doc = parse("- ---\n- - -");
    assert_eq!(
        doc.blocks,
        vec![Block::BulletList {
            items: vec![
                ListItem::paragraph(vec![InlineSpan::plain("---")]),
                ListItem::paragraph(vec![InlineSpan::plain("- -")]),
            ],
        }]
    );
}

#[test]
fn bullet_then_ordered_list() {
    let doc = parse("- a\n* **b**\n1. one\n2. two");
    assert_eq!(
        doc.blocks,
        vec![
            Block::BulletList {
                items: vec![
                    ListItem::paragraph(vec![InlineSpan::plain("a")]),
                    ListItem::paragraph(vec![InlineSpan::marked("b", Mark::Bold)]),
                ],
            },
            Block::OrderedList {
                items: vec![
                    ListItem::paragraph(vec![InlineSpan::plain("one")]),
                    ListItem::paragraph(vec![InlineSpan::plain("two")]),
                ],
            },
        ]
    );
}

#[test]
fn code_fence_is_raw() {
    let doc = parse("```rust\nfn a() {}\n**x** [[y]]\n```\nafter");
    assert_eq!(
        doc.blocks,
        vec![
            Block::CodeBlock {
                language: Some("rust".to_string()),
                raw_text: "fn a() {}\n**x** [[y]]".to_string(),
            },
            para("after"),
        ]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    let doc = parse("```\n# not a heading\n- not a list");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: None,
            raw_text: "# not a heading\n- not a list".to_string(),
        }]
    );
}

#[test]
fn table_drops_separator_row() {
    let doc = parse("| A | B |\n| --- | :-: |\n| 1 | **2** |");
    assert_eq!(
        doc.blocks,
        vec![Block::Table {
            rows: vec![
                TableRow {
                    cells: vec![
                        TableCell {
                            header: true,
                            inline: vec![InlineSpan::plain("A")],
                        },
                        TableCell {
                            header: true,
                            inline: vec![InlineSpan::plain("B")],
                        },
                    ],
                },
                TableRow {
                    cells: vec![
                        TableCell {
                            header: false,
                            inline: vec![InlineSpan::plain("1")],
                        },
                        TableCell {
                            header: false,
                            inline: vec![InlineSpan::marked("2", Mark::Bold)],
                        },
                    ],
                },
            ],
        }]
    );
}

#[test]
fn single_pipe_line_is_a_paragraph() {
    let doc = parse("| lonely |");
    assert_eq!(doc.blocks, vec![para("| lonely |")]);
}

#[test]
fn callout_with_body() {
    let doc = parse("> [!WARNING]\n> Check **twice**");
    assert_eq!(
        doc.blocks,
        vec![Block::Callout {
            kind: CalloutKind::Warning,
            children: vec![Block::paragraph(vec![
                InlineSpan::plain("Check "),
                InlineSpan::marked("twice", Mark::Bold),
            ])],
        }]
    );
}

#[test]
fn callout_title_is_first_body_line() {
    let doc = parse("> [!tip] Shortcut\n>\n> Press it.");
    assert_eq!(
        doc.blocks,
        vec![Block::Callout {
            kind: CalloutKind::Tip,
            children: vec![para("Shortcut"), para("Press it.")],
        }]
    );
}

#[test]
fn callout_inside_callout_is_a_blockquote() {
    let doc = parse("> [!note]\n> > [!tip]\n> > inner");
    assert_eq!(
        doc.blocks,
        vec![Block::Callout {
            kind: CalloutKind::Note,
            children: vec![Block::Blockquote {
                children: vec![para("[!tip] inner")],
            }],
        }]
    );
}

#[test]
fn unknown_callout_kind_is_a_blockquote() {
    let doc = parse("> [!danger] Hot");
    assert_eq!(
        doc.blocks,
        vec![Block::Blockquote {
            children: vec![para("[!danger] Hot")],
        }]
    );
}

#[test]
fn empty_blockquote_holds_an_empty_paragraph() {
    let doc = parse(">");
    assert_eq!(
        doc.blocks,
        vec![Block::Blockquote {
            children: vec![Block::empty_paragraph()],
        }]
    );
}

#[test]
fn manual_marker_region() {
    let input = format!("{OPEN_ALICE}\nHello **world**\n{CLOSE}");
    let parsed = parse_with_diagnostics(&input);

    assert!(parsed.diagnostics.is_empty());
    assert_eq!(
        parsed.document.blocks,
        vec![marker(
            "alice",
            "marker-0",
            vec![Block::paragraph(vec![
                InlineSpan::plain("Hello "),
                InlineSpan::marked("world", Mark::Bold),
            ])],
        )]
    );
}

#[test]
fn manual_marker_can_hold_any_block() {
    let input = format!("{OPEN_ALICE}\n# Kept\n\n- one\n\n> [!info]\n> fyi\n{CLOSE}");
    let doc = parse(&input);

    let [Block::ManualMarker { children, .. }] = doc.blocks.as_slice() else {
        panic!("expected a single manual marker, got {:?}", doc.blocks);
    };
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0], Block::Heading { level: 1, .. }));
    assert!(matches!(children[1], Block::BulletList { .. }));
    assert!(matches!(
        children[2],
        Block::Callout {
            kind: CalloutKind::Info,
            ..
        }
    ));
}

#[test]
fn unclosed_marker_runs_to_end_with_diagnostic() {
    let input = format!("intro\n\n{OPEN_BOB}\nText\n\nMore");
    let parsed = parse_with_diagnostics(&input);

    assert_eq!(
        parsed.document.blocks,
        vec![
            para("intro"),
            marker("bob", "marker-0", vec![para("Text"), para("More")]),
        ]
    );
    assert_eq!(
        parsed.diagnostics,
        vec![ParseDiagnostic::MalformedMarker {
            line: 3,
            author: "bob".to_string(),
        }]
    );
}

#[test]
fn second_open_tag_closes_the_first_marker() {
    let input = format!("{OPEN_ALICE}\na\n{OPEN_BOB}\nb\n{CLOSE}");
    let parsed = parse_with_diagnostics(&input);

    assert_eq!(
        parsed.document.blocks,
        vec![
            marker("alice", "marker-0", vec![para("a")]),
            marker("bob", "marker-1", vec![para("b")]),
        ]
    );
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line(), 1);
}

#[test]
fn stray_close_tag_is_dropped() {
    let input = format!("a\n{CLOSE}\nb");
    let parsed = parse_with_diagnostics(&input);

    assert_eq!(parsed.document.blocks, vec![para("a"), para("b")]);
    assert_eq!(
        parsed.diagnostics,
        vec![ParseDiagnostic::StrayMarkerClose { line: 2 }]
    );
}

#[test]
fn stray_close_tag_keeps_trailing_text() {
    let input = format!("a\n\n{CLOSE}b");
    let parsed = parse_with_diagnostics(&input);

    assert_eq!(parsed.document.blocks, vec![para("a"), para("b")]);
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test]
fn marker_tags_inside_lines() {
    let input = format!("A {OPEN_ALICE}\nB \n{CLOSE}C");
    let parsed = parse_with_diagnostics(&input);

    assert!(parsed.diagnostics.is_empty());
    assert_eq!(
        parsed.document.blocks,
        vec![
            para("A"),
            marker("alice", "marker-0", vec![para("B")]),
            para("C"),
        ]
    );
}

#[test]
fn open_tag_after_quote_prefix_stays_in_the_quote() {
    let input = format!("> {OPEN_ALICE}\n> inside\n> {CLOSE}");
    let doc = parse(&input);

    assert_eq!(
        doc.blocks,
        vec![Block::Blockquote {
            children: vec![marker("alice", "marker-0", vec![para("inside")])],
        }]
    );
}

#[test]
fn deep_quote_nesting_is_capped() {
    let levels = 5_000;
    let input = format!("{} x", ">".repeat(levels));
    let doc = parse(&input);

    let mut depth = 0;
    let mut blocks = doc.blocks.as_slice();
    while let [Block::Blockquote { children }] = blocks {
        depth += 1;
        blocks = children.as_slice();
    }
    assert_eq!(depth, MAX_NESTING_DEPTH);
    assert_eq!(
        blocks,
        [para(&format!("{} x", ">".repeat(levels - MAX_NESTING_DEPTH)))]
    );
}

#[test]
fn marker_inside_blockquote_reports_absolute_line() {
    let input = format!("first\n\n> quoted\n> {OPEN_BOB}\n> never closed");
    let parsed = parse_with_diagnostics(&input);

    assert_eq!(parsed.diagnostics[0].line(), 4);
}

#[test]
fn marker_ids_are_stable_across_parses() {
    let input = format!("{OPEN_ALICE}\na\n{CLOSE}\n\n{OPEN_BOB}\nb\n{CLOSE}");
    let ids = |doc: Document| -> Vec<String> {
        doc.blocks
            .into_iter()
            .filter_map(|block| match block {
                Block::ManualMarker { id, .. } => Some(id),
                _ => None,
            })
            .collect()
    };

    assert_eq!(ids(parse(&input)), vec!["marker-0", "marker-1"]);
    assert_eq!(ids(parse(&input)), ids(parse(&input)));
}
