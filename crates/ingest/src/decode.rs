//! Byte-to-text decoding.
//!
//! Uploads arrive without a trustworthy charset. We try strict UTF-8 first and
//! fall back to Latin-1, which maps every byte to the code point of the same
//! value. The fallback cannot fail, so [`decode_bytes`] is total.
//!
//! Latin-1 misrenders multi-byte text in other legacy encodings (Shift-JIS,
//! Windows-1251, ...). That approximation is accepted: two byte-identical
//! files still decode to identical text, which is all grouping needs.

use crate::types::{DecodedText, TextEncoding};

/// Decode raw upload bytes into text. Never fails.
///
/// ```rust
/// use ingest::{decode_bytes, TextEncoding};
///
/// let utf8 = decode_bytes("caf\u{e9}".as_bytes());
/// assert_eq!(utf8.encoding, TextEncoding::Utf8);
/// assert_eq!(utf8.text, "caf\u{e9}");
///
/// let latin1 = decode_bytes(&[0x63, 0x61, 0x66, 0xE9]);
/// assert_eq!(latin1.encoding, TextEncoding::Latin1);
/// assert_eq!(latin1.text, "caf\u{e9}");
/// ```
pub fn decode_bytes(bytes: &[u8]) -> DecodedText {
    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text: text.to_owned(),
            encoding: TextEncoding::Utf8,
        },
        Err(_) => DecodedText {
            text: decode_latin1(bytes),
            encoding: TextEncoding::Latin1,
        },
    }
}

/// ISO-8859-1: byte `b` becomes `char::from(b)`.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
