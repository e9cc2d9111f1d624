use std::string::FromUtf8Error;

/// The failures the engine surfaces to callers.
///
/// Conversion itself is total: parsing always produces blocks and rendering
/// always produces text. What can fail is the boundary — bytes that are not
/// UTF-8, or a block list that does not deserialize.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("malformed block JSON: {0}")]
    MalformedBlocks(#[from] serde_json::Error),
}
