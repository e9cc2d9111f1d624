//! The document renderer: walks a block tree and emits markdown.
//!
//! Rendering is total. A block that cannot be rendered faithfully (an image
//! with no resolvable source, a kind this converter does not model) degrades
//! to a visible placeholder instead of failing, and children are never
//! silently dropped.

use crate::inline;
use crate::models::{Block, BlockKind, Table, TableRow, TextRun};
use crate::parsing::classify::DEFAULT_LANGUAGE;
use crate::table;

/// Two literal spaces per nesting level.
const INDENT: &str = "  ";

/// Renders an ordered block list to markdown. Top-level siblings are
/// separated by exactly one blank line; nested children sit directly under
/// their parent's marker line.
pub fn render_document(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| render_block(block, 0))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &Block, depth: usize) -> String {
    let indent = INDENT.repeat(depth);
    match &block.kind {
        BlockKind::Paragraph { rich_text } => {
            format!("{indent}{}", inline::render_runs(rich_text))
        }
        BlockKind::Heading1 { rich_text } => format!("# {}", inline::render_runs(rich_text)),
        BlockKind::Heading2 { rich_text } => format!("## {}", inline::render_runs(rich_text)),
        BlockKind::Heading3 { rich_text } => format!("### {}", inline::render_runs(rich_text)),
        BlockKind::Divider => format!("{indent}---"),
        BlockKind::BulletedItem { rich_text } => {
            render_marker_item(&indent, "- ", rich_text, &block.children, depth)
        }
        BlockKind::NumberedItem { rich_text } => {
            render_marker_item(&indent, "1. ", rich_text, &block.children, depth)
        }
        BlockKind::ToDo {
            checked,
            rich_text,
        } => {
            let marker = if *checked { "- [x] " } else { "- [ ] " };
            render_marker_item(&indent, marker, rich_text, &block.children, depth)
        }
        BlockKind::Toggle { rich_text } => {
            render_marker_item(&indent, "- ", rich_text, &block.children, depth)
        }
        // Callouts have no markdown syntax of their own; the quote form is
        // the closest visible degradation.
        BlockKind::Quote { rich_text } | BlockKind::Callout { rich_text } => {
            render_quote(&indent, rich_text, &block.children)
        }
        BlockKind::Code { language, body } => render_code(&indent, language, body),
        BlockKind::Table { .. } => {
            // from_block only fails for non-table kinds, which this arm
            // already rules out.
            let tbl = Table::from_block(block).unwrap_or_else(|| Table::from_rows(false, vec![]));
            indent_lines(&indent, &table::render(&tbl))
        }
        BlockKind::TableRow { cells } => {
            // A row outside a table still renders as its pipe line.
            format!(
                "{indent}{}",
                table::render_row(&TableRow::new(cells.clone()))
            )
        }
        BlockKind::Image { asset } => match asset.resolved_url() {
            Some(url) => format!("{indent}![]({url})"),
            None => format!("{indent}<!-- image with no resolvable source -->"),
        },
        BlockKind::File { name, asset } => match asset.resolved_url() {
            Some(url) => {
                let label = name.as_deref().unwrap_or("file");
                format!("{indent}[{label}]({url})")
            }
            None => format!("{indent}<!-- file with no resolvable source -->"),
        },
        BlockKind::Unsupported { kind } => {
            let mut out = format!("{indent}<!-- unsupported block type: {kind} -->");
            for child in &block.children {
                out.push('\n');
                out.push_str(&render_block(child, depth));
            }
            out
        }
    }
}

/// One marker line followed by children one level deeper.
fn render_marker_item(
    indent: &str,
    marker: &str,
    rich_text: &[TextRun],
    children: &[Block],
    depth: usize,
) -> String {
    let mut out = format!("{indent}{marker}{}", inline::render_runs(rich_text));
    for child in children {
        out.push('\n');
        out.push_str(&render_block(child, depth + 1));
    }
    out
}

/// `> `-prefixed text; children render at depth zero and every line of
/// their output is re-prefixed, so nested quoting stacks up naturally.
fn render_quote(indent: &str, rich_text: &[TextRun], children: &[Block]) -> String {
    let text = inline::render_runs(rich_text);
    let mut lines: Vec<String> = if text.is_empty() {
        vec![">".to_string()]
    } else {
        text.lines().map(|l| format!("> {l}")).collect()
    };

    for child in children {
        for line in render_block(child, 0).lines() {
            lines.push(format!("> {line}"));
        }
    }

    lines
        .into_iter()
        .map(|l| format!("{indent}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fence, verbatim body, fence, all at the current depth. The default
/// language tag renders as a bare fence: the tag contains a space and would
/// not read back as a fence otherwise.
fn render_code(indent: &str, language: &str, body: &str) -> String {
    let tag = if language == DEFAULT_LANGUAGE {
        ""
    } else {
        language
    };
    let mut lines = vec![format!("{indent}```{tag}")];
    lines.extend(body.lines().map(|l| format!("{indent}{l}")));
    lines.push(format!("{indent}```"));
    lines.join("\n")
}

fn indent_lines(indent: &str, text: &str) -> String {
    if indent.is_empty() {
        return text.to_string();
    }
    text.lines()
        .map(|l| format!("{indent}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
