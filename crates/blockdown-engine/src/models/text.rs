use serde::{Deserialize, Serialize};

/// The combinable formatting flags carried by a [`TextRun`].
///
/// A link target is not an annotation flag; it lives on the run itself so a
/// single run can be, say, bold *and* a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub strikethrough: bool,
}

/// A span of literal text with an annotation set and optional link target.
///
/// Runs are immutable values: build them with the constructors below and
/// treat the fields as read-only afterwards. A block's displayable text is an
/// ordered sequence of runs; insertion order is rendering order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub link: Option<String>,
}

impl TextRun {
    /// A run with no annotations and no link.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.annotations.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.annotations.italic = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.annotations.code = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.annotations.strikethrough = true;
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}
