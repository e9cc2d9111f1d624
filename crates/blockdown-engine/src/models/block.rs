use serde::{Deserialize, Serialize};

use super::text::TextRun;

/// Where an image or file block's content lives.
///
/// `file_url` points at an embedded upload, `external_url` at a plain web
/// address. Both may be absent on blocks fetched from storage; resolution
/// prefers the embedded upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
}

impl Asset {
    pub fn uploaded(url: impl Into<String>) -> Self {
        Self {
            file_url: Some(url.into()),
            external_url: None,
        }
    }

    pub fn external(url: impl Into<String>) -> Self {
        Self {
            file_url: None,
            external_url: Some(url.into()),
        }
    }

    /// The URL to render, preferring the embedded upload over the external
    /// address. `None` when neither is present.
    pub fn resolved_url(&self) -> Option<&str> {
        self.file_url.as_deref().or(self.external_url.as_deref())
    }
}

/// The kind of a block, one variant per supported node type.
///
/// Each variant carries only the fields that kind actually has, so an
/// invalid shape (a divider with text, a to-do without a checked state)
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph { rich_text: Vec<TextRun> },
    Heading1 { rich_text: Vec<TextRun> },
    Heading2 { rich_text: Vec<TextRun> },
    Heading3 { rich_text: Vec<TextRun> },
    Divider,
    BulletedItem { rich_text: Vec<TextRun> },
    NumberedItem { rich_text: Vec<TextRun> },
    ToDo { checked: bool, rich_text: Vec<TextRun> },
    Quote { rich_text: Vec<TextRun> },
    Code { language: String, body: String },
    Table { width: usize, has_header: bool },
    TableRow { cells: Vec<Vec<TextRun>> },
    Image { asset: Asset },
    File { name: Option<String>, asset: Asset },
    Callout { rich_text: Vec<TextRun> },
    Toggle { rich_text: Vec<TextRun> },
    /// A node type this converter does not model. The original kind name is
    /// kept so rendering can name it in a placeholder.
    Unsupported { kind: String },
}

/// A typed node in the document tree.
///
/// A block owns its children exclusively; there is no sharing and no cycles.
/// Children are legal only on nesting kinds (list items, to-do, toggle,
/// quote, callout, and table, whose children are table rows); other kinds
/// ignore them when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(flatten)]
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: BlockKind, children: Vec<Block>) -> Self {
        Self { kind, children }
    }

    /// The block's displayable run sequence, for kinds that have one.
    pub fn rich_text(&self) -> Option<&[TextRun]> {
        match &self.kind {
            BlockKind::Paragraph { rich_text }
            | BlockKind::Heading1 { rich_text }
            | BlockKind::Heading2 { rich_text }
            | BlockKind::Heading3 { rich_text }
            | BlockKind::BulletedItem { rich_text }
            | BlockKind::NumberedItem { rich_text }
            | BlockKind::ToDo { rich_text, .. }
            | BlockKind::Quote { rich_text }
            | BlockKind::Callout { rich_text }
            | BlockKind::Toggle { rich_text } => Some(rich_text),
            _ => None,
        }
    }

    /// Heading constructor from a numeric level (clamped to 1..=3).
    pub fn heading(level: u8, rich_text: Vec<TextRun>) -> Self {
        let kind = match level {
            0 | 1 => BlockKind::Heading1 { rich_text },
            2 => BlockKind::Heading2 { rich_text },
            _ => BlockKind::Heading3 { rich_text },
        };
        Self::new(kind)
    }
}
