//! Bidirectional converter between flat markdown text and a hierarchical
//! model of typed content blocks.
//!
//! [`parse_document`] turns a markdown buffer into an ordered block list;
//! [`render_document`] walks a block tree back to markdown. Both are pure,
//! synchronous functions with no shared mutable state — the only process-wide
//! data is the classifier's immutable pattern table — so calls may run
//! concurrently without coordination.

pub mod error;
pub mod inline;
pub mod interchange;
pub mod models;
pub mod parsing;
pub mod render;
pub mod table;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use models::{Annotations, Asset, Block, BlockKind, Table, TableRow, TextRun};
pub use parsing::parse_document;
pub use render::render_document;
