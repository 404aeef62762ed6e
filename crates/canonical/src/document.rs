//! Output type of the canonical stage.
//!
//! ```rust
//! use canonical::canonicalize_document;
//!
//! let doc = canonicalize_document("Hello\r\n  World");
//! assert_eq!(doc.canonical_text, "helloworld");
//! assert_eq!(doc.sha256_hex.len(), 64);
//! ```

use serde::{Deserialize, Serialize};

/// Canonical text together with its fingerprint.
///
/// Two documents are duplicates iff their `canonical_text` values are
/// byte-for-byte equal, which (collisions aside) is iff their `sha256_hex`
/// values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalizedDocument {
    /// Whitespace-free, lowercased, BOM-free text. Never shown to users.
    pub canonical_text: String,
    /// Hex SHA-256 of `canonical_text`.
    pub sha256_hex: String,
}

impl CanonicalizedDocument {
    pub fn is_empty(&self) -> bool {
        self.canonical_text.is_empty()
    }
}
