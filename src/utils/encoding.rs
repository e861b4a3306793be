//! Content decoding helpers

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode base64 content as delivered by the contents API
///
/// The upstream wraps base64 bodies with embedded line breaks; strip all
/// whitespace before decoding.
pub fn decode_base64(raw: &str) -> Result<Vec<u8>> {
    let compact: String = raw.split_whitespace().collect();
    STANDARD
        .decode(compact.as_bytes())
        .context("Failed to decode base64 content")
}

/// Decode base64 content into UTF-8 text
pub fn decode_base64_text(raw: &str) -> Result<String> {
    let bytes = decode_base64(raw)?;
    String::from_utf8(bytes).context("Decoded content is not valid UTF-8")
}
