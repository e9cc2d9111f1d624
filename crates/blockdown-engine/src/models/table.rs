use serde::{Deserialize, Serialize};

use super::block::{Block, BlockKind};
use super::text::TextRun;

/// One table row: an ordered list of cells, each a run sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<Vec<TextRun>>,
}

impl TableRow {
    pub fn new(cells: Vec<Vec<TextRun>>) -> Self {
        Self { cells }
    }

    /// Row of plain-text cells, for construction convenience.
    pub fn plain<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: cells
                .into_iter()
                .map(|c| vec![TextRun::plain(c)])
                .collect(),
        }
    }
}

/// A validated table: a column count, a header flag, and rows that all hold
/// exactly `width` cells.
///
/// The width invariant is established at construction and never re-checked:
/// rows are resized to the first row's cell count (short rows gain empty
/// cells, long rows drop the extras), so every constructed `Table` is
/// well-formed by definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    width: usize,
    has_header: bool,
    rows: Vec<TableRow>,
}

impl Table {
    /// Builds a table whose width is the first row's cell count.
    pub fn from_rows(has_header: bool, mut rows: Vec<TableRow>) -> Self {
        let width = rows.first().map(|r| r.cells.len()).unwrap_or(0);
        for row in &mut rows {
            row.cells.resize(width, Vec::new());
        }
        Self {
            width,
            has_header,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Converts into a table block whose children are table-row blocks.
    pub fn into_block(self) -> Block {
        let children = self
            .rows
            .into_iter()
            .map(|row| Block::new(BlockKind::TableRow { cells: row.cells }))
            .collect();
        Block::with_children(
            BlockKind::Table {
                width: self.width,
                has_header: self.has_header,
            },
            children,
        )
    }

    /// Reassembles a table view from a table block and its row children.
    ///
    /// Non-row children are skipped and rows are resized to the recorded
    /// width, so a block with missing or mistyped pieces still yields a
    /// renderable table. Returns `None` for non-table blocks.
    pub fn from_block(block: &Block) -> Option<Self> {
        let BlockKind::Table { width, has_header } = block.kind else {
            return None;
        };
        let mut rows: Vec<TableRow> = block
            .children
            .iter()
            .filter_map(|child| match &child.kind {
                BlockKind::TableRow { cells } => Some(TableRow::new(cells.clone())),
                _ => None,
            })
            .collect();
        for row in &mut rows {
            row.cells.resize(width, Vec::new());
        }
        Some(Self {
            width,
            has_header,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_comes_from_first_row() {
        let table = Table::from_rows(
            true,
            vec![TableRow::plain(["a", "b", "c"]), TableRow::plain(["d"])],
        );
        assert_eq!(table.width(), 3);
        assert_eq!(table.rows()[1].cells.len(), 3);
    }

    #[test]
    fn long_rows_are_truncated() {
        let table = Table::from_rows(
            false,
            vec![TableRow::plain(["a"]), TableRow::plain(["b", "extra"])],
        );
        assert_eq!(table.rows()[1].cells.len(), 1);
        assert_eq!(table.rows()[1].cells[0][0].text, "b");
    }

    #[test]
    fn empty_table_has_zero_width() {
        let table = Table::from_rows(false, vec![]);
        assert_eq!(table.width(), 0);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn round_trips_through_block() {
        let table = Table::from_rows(
            true,
            vec![
                TableRow::plain(["Name", "Role"]),
                TableRow::plain(["Alice", "Engineer"]),
            ],
        );
        let block = table.clone().into_block();
        assert!(matches!(
            block.kind,
            BlockKind::Table {
                width: 2,
                has_header: true
            }
        ));
        assert_eq!(block.children.len(), 2);
        assert_eq!(Table::from_block(&block), Some(table));
    }

    #[test]
    fn from_block_skips_mistyped_children() {
        let mut block = Table::from_rows(true, vec![TableRow::plain(["only"])]).into_block();
        block.children.push(Block::new(BlockKind::Divider));
        let table = Table::from_block(&block).unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn from_block_rejects_other_kinds() {
        assert_eq!(Table::from_block(&Block::new(BlockKind::Divider)), None);
    }
}
