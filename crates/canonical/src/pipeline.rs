use crate::document::CanonicalizedDocument;
use crate::hash::fingerprint;
use crate::whitespace::{normalize_line_endings, strip_whitespace};

const BOM: char = '\u{FEFF}';

/// Reduce decoded text to its comparison-only form.
///
/// Steps, in order:
/// 1. CRLF -> LF, then CR -> LF.
/// 2. Drop every whitespace char.
/// 3. Lowercase.
/// 4. Drop a leading byte-order mark.
///
/// ```rust
/// use canonical::canonicalize;
///
/// assert_eq!(canonicalize("Hello World\n"), "helloworld");
/// assert_eq!(canonicalize("hello   world"), "helloworld");
/// ```
pub fn canonicalize(text: &str) -> String {
    let unified = normalize_line_endings(text);
    let stripped = strip_whitespace(&unified);
    let lowered = stripped.to_lowercase();
    match lowered.strip_prefix(BOM) {
        Some(rest) => rest.to_owned(),
        None => lowered,
    }
}

/// Canonicalize and fingerprint in one call.
pub fn canonicalize_document(text: &str) -> CanonicalizedDocument {
    let canonical_text = canonicalize(text);
    let sha256_hex = fingerprint(&canonical_text);
    CanonicalizedDocument {
        canonical_text,
        sha256_hex,
    }
}
