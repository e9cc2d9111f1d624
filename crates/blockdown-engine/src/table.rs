//! The table codec: pipe-delimited text to and from [`Table`] values.
//!
//! Parsing validates a captured run of pipe lines (header + separator +
//! data rows); rendering is the inverse, with `|` escaped as `\|` inside
//! cells so pipes in cell text survive the round trip.

use std::sync::OnceLock;

use regex::Regex;

use crate::inline;
use crate::models::{Table, TableRow};

/// True when every cell of the line is a dash run (>= 3) with optional
/// leading/trailing alignment colons. Colons are recognized and discarded,
/// not interpreted.
pub fn is_separator_row(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^:?-{3,}:?$").expect("invalid separator regex"));

    let inner = strip_outer_pipes(line);
    inner.split('|').all(|cell| re.is_match(cell.trim()))
}

/// Splits one pipe row into trimmed cell texts. The row's outer pipes are
/// stripped first; cells split on unescaped `|` and `\|` unescapes to `|`.
pub fn split_cells(line: &str) -> Vec<String> {
    let inner = strip_outer_pipes(line);
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                cell.push('|');
            }
            '|' => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(c),
        }
    }
    cells.push(cell);

    cells.iter().map(|c| c.trim().to_string()).collect()
}

/// Validates and extracts a captured run of consecutive pipe lines.
///
/// `None` when the capture is not actually a table: fewer than two lines,
/// or a second line that is not a separator row. On success, line 0 is the
/// header, the separator is discarded, and the remaining lines are data
/// rows; the table's width is the header's cell count.
pub fn parse_capture(lines: &[&str]) -> Option<Table> {
    if lines.len() < 2 || !is_separator_row(lines[1]) {
        return None;
    }

    let mut rows = vec![parse_row(lines[0])];
    rows.extend(lines[2..].iter().map(|line| parse_row(line)));
    Some(Table::from_rows(true, rows))
}

fn parse_row(line: &str) -> TableRow {
    TableRow::new(
        split_cells(line)
            .iter()
            .map(|cell| inline::parse_runs(cell))
            .collect(),
    )
}

/// Renders a table to pipe-delimited markdown.
///
/// The separator row is emitted after the first row regardless of
/// `has_header`; tables have always been written this way and the output
/// format stays stable even for header-less tables fetched from storage.
pub fn render(table: &Table) -> String {
    let mut rows = table.rows().iter();
    let Some(first) = rows.next() else {
        return String::new();
    };

    let mut lines = vec![render_row(first), separator_row(table.width())];
    lines.extend(rows.map(render_row));
    lines.join("\n")
}

/// Renders one row as a pipe line, escaping `|` inside cells.
pub fn render_row(row: &TableRow) -> String {
    let cells: Vec<String> = row
        .cells
        .iter()
        .map(|cell| inline::render_runs(cell).replace('|', "\\|"))
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn separator_row(width: usize) -> String {
    format!("| {} |", vec!["---"; width].join(" | "))
}

fn strip_outer_pipes(line: &str) -> &str {
    let s = line.strip_prefix('|').unwrap_or(line);
    s.strip_suffix('|').unwrap_or(s)
}
