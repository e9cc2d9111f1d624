mod block;
mod table;
mod text;

pub use block::{Asset, Block, BlockKind};
pub use table::{Table, TableRow};
pub use text::{Annotations, TextRun};
