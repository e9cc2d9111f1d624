//! The annotation codec: inline-formatted text to and from [`TextRun`]
//! sequences.
//!
//! [`parse_runs`] and [`render_runs`] are exact inverses for any single,
//! non-overlapping combination of annotations on a run. The one deliberate
//! asymmetry is code spans: their content is never re-scanned, so a link
//! rendered inside backticks comes back as literal code text.
//!
//! [`TextRun`]: crate::models::TextRun

mod parser;
mod render;

pub use parser::parse_runs;
pub use render::{render_run, render_runs};
