//! The transport-facing boundary: UTF-8 validation of raw input and JSON
//! framing of block lists.
//!
//! The converter itself never touches bytes or wire formats; callers decode
//! here first and hand the engine owned strings and block values.

use crate::error::ConvertError;
use crate::models::Block;

/// Validates raw input bytes as UTF-8. Rejection happens here, before any
/// parsing; the parser itself never sees invalid text.
pub fn decode_input(bytes: Vec<u8>) -> Result<String, ConvertError> {
    Ok(String::from_utf8(bytes)?)
}

/// Serializes an ordered block list for submission to a transport layer.
/// The list is flat and unbatched; batching is the transport's concern.
pub fn blocks_to_json(blocks: &[Block]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Deserializes a block tree previously produced by [`blocks_to_json`] or
/// assembled by a transport layer.
pub fn blocks_from_json(json: &str) -> Result<Vec<Block>, ConvertError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockKind, TextRun};

    #[test]
    fn utf8_input_decodes() {
        assert_eq!(decode_input(b"# hi".to_vec()).unwrap(), "# hi");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let result = decode_input(vec![0xff, 0xfe, 0x23]);
        assert!(matches!(result, Err(ConvertError::InvalidUtf8(_))));
    }

    #[test]
    fn block_lists_round_trip_through_json() {
        let blocks = vec![
            Block::new(BlockKind::Heading1 {
                rich_text: vec![TextRun::plain("Title")],
            }),
            Block::new(BlockKind::Divider),
        ];
        let json = blocks_to_json(&blocks).unwrap();
        assert_eq!(blocks_from_json(&json).unwrap(), blocks);
    }

    #[test]
    fn garbage_json_is_rejected() {
        let result = blocks_from_json("{not json");
        assert!(matches!(result, Err(ConvertError::MalformedBlocks(_))));
    }
}
