//! Line-ending and whitespace handling.
//!
//! Canonical comparison ignores layout completely, so whitespace is removed
//! rather than collapsed. Line endings are unified first so the two steps
//! compose the same way regardless of which platform wrote the file.
//!
//! # Whitespace Definition
//!
//! The ECMAScript `\s` class: tab, VT, FF, space, NBSP, U+FEFF, the `Zs`
//! space separators, LF, CR, LINE SEPARATOR and PARAGRAPH SEPARATOR.
//!
//! This is not [`char::is_whitespace`]. U+0085 (NEL) has the Unicode
//! `White_Space` property but is kept here; it is what a Windows-1252 `…`
//! turns into after a Latin-1 decode. U+FEFF is a format character, not
//! `White_Space`, but is discarded.
//!
//! ```rust
//! use canonical::{normalize_line_endings, strip_whitespace};
//!
//! assert_eq!(normalize_line_endings("a\r\nb\rc"), "a\nb\nc");
//! assert_eq!(strip_whitespace(" a \t b\n c "), "abc");
//! ```

use std::borrow::Cow;

/// True for chars the canonical form discards.
#[inline]
pub fn is_canonical_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Rewrites CRLF to LF, then any remaining lone CR to LF.
///
/// Borrows when the text contains no CR at all.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Removes every whitespace char. Nothing is inserted in its place.
pub fn strip_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().filter(|&ch| !is_canonical_whitespace(ch)));
    out
}
