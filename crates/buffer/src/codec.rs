// Chunk: docs/chunks/text_codec - Binary to decimal-text codec

//! Conversion between a byte buffer and its decimal-text rendering.
//!
//! Both directions are pure functions parameterized by [`ElementWidth`].
//! Encoding walks the buffer in whole-element strides and silently drops a
//! trailing partial element. Decoding tolerates malformed tokens
//! element-by-element: a token that fails to parse leaves its slot zeroed
//! rather than aborting the whole conversion.
//!
//! The two are exact inverses only for well-formed, in-range text and for
//! buffers whose length is a multiple of the element width. Callers that
//! need stricter validation wrap the codec with their own token checks.

use crate::element::ElementWidth;

/// Renders `bytes` as decimal text, one element per line.
///
/// Elements are decoded as signed little-endian integers of the configured
/// width, starting at offset 0. Trailing bytes that do not fill a whole
/// element are omitted from the output; this truncation is defined behavior,
/// not an error.
pub fn encode_to_text(bytes: &[u8], width: ElementWidth) -> String {
    let mut text = String::new();
    for chunk in bytes.chunks_exact(width.bytes()) {
        text.push_str(&width.read_element(chunk).to_string());
        text.push('\n');
    }
    text
}

/// Decodes whitespace-delimited decimal text into a byte buffer.
///
/// The text is split on runs of whitespace (spaces, tabs, and newlines are
/// equivalent) and each non-empty token becomes one element slot. Tokens
/// that do not parse as an in-range signed integer of the configured width
/// leave their slot as zero bytes and decoding continues. The output length
/// is always exactly `width * token_count`.
pub fn decode_from_text(text: &str, width: ElementWidth) -> Vec<u8> {
    let elem = width.bytes();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut data = vec![0u8; elem * tokens.len()];

    for (i, token) in tokens.iter().enumerate() {
        if let Some(value) = width.parse_element(token) {
            width.write_element(value, &mut data[i * elem..(i + 1) * elem]);
        }
    }

    data
}
