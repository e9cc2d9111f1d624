//! The document parser: one pass over the input lines, producing an ordered
//! block list.
//!
//! Phase 1 classifies each line locally ([`classify`]); this module owns the
//! multi-line behavior — table capture with paragraph fallback, verbatim
//! fence bodies, quote and paragraph merging. The parser is total: every
//! line lands in some block, blank lines are skipped, and nothing here
//! returns an error.

pub mod classify;
pub mod cursor;

use crate::inline;
use crate::models::{Block, BlockKind};
use crate::table;

use classify::{LineStart, classify};
use cursor::LineCursor;

/// Parses a markdown buffer into an ordered, flat block list.
pub fn parse_document(text: &str) -> Vec<Block> {
    let mut cur = LineCursor::new(text);
    let mut out = Vec::new();

    while let Some(line) = cur.next_line() {
        if line.trim().is_empty() {
            continue;
        }
        match classify(line) {
            Some(LineStart::TableRow) => parse_table(line, &mut cur, &mut out),
            Some(LineStart::CodeFence { language }) => out.push(parse_fence(language, &mut cur)),
            Some(LineStart::Divider) => out.push(Block::new(BlockKind::Divider)),
            Some(LineStart::Heading { level, text }) => {
                out.push(Block::heading(level, inline::parse_runs(&text)));
            }
            Some(LineStart::ToDo { checked, text }) => {
                out.push(Block::new(BlockKind::ToDo {
                    checked,
                    rich_text: inline::parse_runs(&text),
                }));
            }
            Some(LineStart::BulletedItem { text }) => {
                out.push(Block::new(BlockKind::BulletedItem {
                    rich_text: inline::parse_runs(&text),
                }));
            }
            Some(LineStart::NumberedItem { text }) => {
                out.push(Block::new(BlockKind::NumberedItem {
                    rich_text: inline::parse_runs(&text),
                }));
            }
            Some(LineStart::Quote { text }) => out.push(parse_quote(text, &mut cur)),
            None => out.push(parse_paragraph(line, &mut cur)),
        }
    }

    out
}

/// Collects the consecutive run of table-row lines starting at `first` and
/// hands it to the table codec. A capture that fails validation (too short,
/// bad separator) degrades to one paragraph per captured line.
fn parse_table(first: &str, cur: &mut LineCursor<'_>, out: &mut Vec<Block>) {
    let mut captured = vec![first];
    while let Some(next) = cur.peek() {
        if classify(next) != Some(LineStart::TableRow) {
            break;
        }
        captured.push(next);
        cur.next_line();
    }

    match table::parse_capture(&captured) {
        Some(table) => out.push(table.into_block()),
        None => out.extend(captured.iter().map(|raw| {
            Block::new(BlockKind::Paragraph {
                rich_text: inline::parse_runs(raw),
            })
        })),
    }
}

/// Consumes the fence body verbatim until a bare closing fence, or to end
/// of input when the fence is never closed.
fn parse_fence(language: String, cur: &mut LineCursor<'_>) -> Block {
    let mut body = Vec::new();
    while let Some(line) = cur.next_line() {
        if line == "```" {
            break;
        }
        body.push(line);
    }
    Block::new(BlockKind::Code {
        language,
        body: body.join("\n"),
    })
}

/// Merges the opening quote line with every immediately following quote
/// line, joined by newlines.
fn parse_quote(first: String, cur: &mut LineCursor<'_>) -> Block {
    let mut lines = vec![first];
    while let Some(next) = cur.peek() {
        match classify(next) {
            Some(LineStart::Quote { text }) => {
                lines.push(text);
                cur.next_line();
            }
            _ => break,
        }
    }
    Block::new(BlockKind::Quote {
        rich_text: inline::parse_runs(&lines.join("\n")),
    })
}

/// Extends the opening line with following lines while they are non-blank
/// and start no other construct, joined by single spaces.
fn parse_paragraph(first: &str, cur: &mut LineCursor<'_>) -> Block {
    let mut parts = vec![first];
    while let Some(next) = cur.peek() {
        if next.trim().is_empty() || classify(next).is_some() {
            break;
        }
        parts.push(next);
        cur.next_line();
    }
    Block::new(BlockKind::Paragraph {
        rich_text: inline::parse_runs(&parts.join(" ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TextRun;
    use pretty_assertions::assert_eq;

    fn kinds(blocks: &[Block]) -> Vec<&'static str> {
        blocks
            .iter()
            .map(|b| match b.kind {
                BlockKind::Paragraph { .. } => "paragraph",
                BlockKind::Heading1 { .. } => "heading1",
                BlockKind::Heading2 { .. } => "heading2",
                BlockKind::Heading3 { .. } => "heading3",
                BlockKind::Divider => "divider",
                BlockKind::BulletedItem { .. } => "bulleted",
                BlockKind::NumberedItem { .. } => "numbered",
                BlockKind::ToDo { .. } => "to_do",
                BlockKind::Quote { .. } => "quote",
                BlockKind::Code { .. } => "code",
                BlockKind::Table { .. } => "table",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(parse_document("").is_empty());
        assert!(parse_document("\n\n\n").is_empty());
    }

    #[test]
    fn mixed_document_block_sequence() {
        let md = "# Title\n\nParagraph text.\n\n- Bullet 1\n- Bullet 2\n\n---\n\n> Quote";
        let blocks = parse_document(md);
        assert_eq!(
            kinds(&blocks),
            vec!["heading1", "paragraph", "bulleted", "bulleted", "divider", "quote"]
        );
    }

    #[test]
    fn paragraph_lines_merge_with_spaces() {
        let blocks = parse_document("first line\nsecond line\n\nnext para");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].rich_text().unwrap(),
            &[TextRun::plain("first line second line")]
        );
    }

    #[test]
    fn paragraph_stops_at_construct_start() {
        let blocks = parse_document("some text\n# Heading");
        assert_eq!(kinds(&blocks), vec!["paragraph", "heading1"]);
    }

    #[test]
    fn quote_lines_merge_with_newlines() {
        let blocks = parse_document("> first\n> second\nnot quoted");
        assert_eq!(kinds(&blocks), vec!["quote", "paragraph"]);
        assert_eq!(
            blocks[0].rich_text().unwrap(),
            &[TextRun::plain("first\nsecond")]
        );
    }

    #[test]
    fn code_fence_body_is_verbatim() {
        let md = "```python\ndef hello():\n    print('hi')\n```";
        let blocks = parse_document(md);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Code {
                language: "python".into(),
                body: "def hello():\n    print('hi')".into(),
            }
        );
    }

    #[test]
    fn code_fence_suppresses_inline_and_block_syntax() {
        let md = "```\n# not a heading\n**not bold**\n```";
        let blocks = parse_document(md);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Code {
                language: "plain text".into(),
                body: "# not a heading\n**not bold**".into(),
            }
        );
    }

    #[test]
    fn unterminated_fence_consumes_to_eof() {
        let blocks = parse_document("```rust\nlet x = 1;\nlet y = 2;");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Code {
                language: "rust".into(),
                body: "let x = 1;\nlet y = 2;".into(),
            }
        );
    }

    #[test]
    fn valid_table_capture_becomes_one_table() {
        let md = "| Name | Role |\n| --- | --- |\n| Alice | Engineer |";
        let blocks = parse_document(md);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Table {
                width: 2,
                has_header: true
            }
        );
        assert_eq!(blocks[0].children.len(), 2);
    }

    #[test]
    fn table_without_separator_degrades_to_paragraphs() {
        let md = "| Name | Role |\n| Alice | Engineer |";
        let blocks = parse_document(md);
        assert_eq!(kinds(&blocks), vec!["paragraph", "paragraph"]);
        assert_eq!(
            blocks[0].rich_text().unwrap(),
            &[TextRun::plain("| Name | Role |")]
        );
    }

    #[test]
    fn lone_pipe_line_degrades_to_paragraph() {
        let blocks = parse_document("| just one row |");
        assert_eq!(kinds(&blocks), vec!["paragraph"]);
    }

    #[test]
    fn table_capture_stops_at_non_row_line() {
        let md = "| a | b |\n| --- | --- |\n| 1 | 2 |\nafterword";
        let blocks = parse_document(md);
        assert_eq!(kinds(&blocks), vec!["table", "paragraph"]);
    }

    #[test]
    fn to_do_is_never_a_bullet() {
        let blocks = parse_document("- [ ] open\n- [x] done\n- plain bullet");
        assert_eq!(kinds(&blocks), vec!["to_do", "to_do", "bulleted"]);
        assert_eq!(
            blocks[0].kind,
            BlockKind::ToDo {
                checked: false,
                rich_text: vec![TextRun::plain("open")],
            }
        );
        assert_eq!(
            blocks[1].kind,
            BlockKind::ToDo {
                checked: true,
                rich_text: vec![TextRun::plain("done")],
            }
        );
    }

    #[test]
    fn heading_text_is_verbatim() {
        for (level, kind) in [(1, "heading1"), (2, "heading2"), (3, "heading3")] {
            let md = format!("{} Some title", "#".repeat(level));
            let blocks = parse_document(&md);
            assert_eq!(kinds(&blocks), vec![kind]);
            assert_eq!(
                blocks[0].rich_text().unwrap(),
                &[TextRun::plain("Some title")]
            );
        }
    }

    #[test]
    fn inline_annotations_reach_block_runs() {
        let blocks = parse_document("a **bold** word");
        assert_eq!(
            blocks[0].rich_text().unwrap(),
            &[
                TextRun::plain("a "),
                TextRun::plain("bold").bold(),
                TextRun::plain(" word"),
            ]
        );
    }
}
