//! dupetext canonical text layer.
//!
//! Turns decoded text into the form used to decide whether two files are
//! duplicates, and fingerprints that form.
//!
//! ## What we do
//!
//! - Line-ending unification (CRLF and CR become LF)
//! - Whitespace removal (all of it, not collapsing)
//! - Lowercasing (Unicode default mapping, locale-free)
//! - Leading byte-order-mark removal
//! - SHA-256 fingerprint of the result
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text in, same
//! canonical string and fingerprint out, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `canonicalize` is idempotent
//! - Files that differ only in layout or letter case canonicalize equally;
//!   that is the point of the tool, not a false positive
//! - Fingerprint = SHA-256(canonical_text), hex

mod document;
mod hash;
mod pipeline;
mod whitespace;

pub use crate::document::CanonicalizedDocument;
pub use crate::hash::{fingerprint, FINGERPRINT_HEX_LEN};
pub use crate::pipeline::{canonicalize, canonicalize_document};
pub use crate::whitespace::{is_canonical_whitespace, normalize_line_endings, strip_whitespace};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_and_case_are_ignored() {
        let a = canonicalize("Hello World\n");
        let b = canonicalize("hello   world");
        assert_eq!(a, "helloworld");
        assert_eq!(a, b);
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn mixed_line_endings_match() {
        let unix = canonicalize("fn main() {\n    println!(\"hi\");\n}\n");
        let windows = canonicalize("fn main() {\r\n    println!(\"hi\");\r\n}\r\n");
        let classic_mac = canonicalize("fn main() {\r    println!(\"hi\");\r}\r");
        assert_eq!(unix, windows);
        assert_eq!(unix, classic_mac);
    }

    #[test]
    fn leading_bom_is_dropped() {
        assert_eq!(canonicalize("\u{FEFF}Title"), "title");
        assert_eq!(canonicalize("\u{FEFF}Title"), canonicalize("Title"));
    }

    #[test]
    fn punctuation_is_significant() {
        assert_ne!(canonicalize("a, b"), canonicalize("a b"));
    }

    #[test]
    fn non_ascii_lowercase() {
        assert_eq!(canonicalize("\u{00C9}T\u{00C9}"), "\u{00E9}t\u{00E9}");
        assert_eq!(canonicalize("\u{0394}\u{0395}\u{039B}\u{03A4}\u{0391}"), "\u{03B4}\u{03B5}\u{03BB}\u{03C4}\u{03B1}");
    }

    #[test]
    fn idempotent_on_examples() {
        for text in ["", "  ", "A b\r\nC", "\u{FEFF}\u{FEFF}x", "\u{0130}stanbul", "Stra\u{00DF}e"] {
            let once = canonicalize(text);
            assert_eq!(canonicalize(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn document_matches_parts() {
        let doc = canonicalize_document("  Some\tText ");
        assert_eq!(doc.canonical_text, "sometext");
        assert_eq!(doc.sha256_hex, fingerprint("sometext"));
        assert!(!doc.is_empty());
        assert!(canonicalize_document(" \n ").is_empty());
    }
}
