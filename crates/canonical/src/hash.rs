//! Fingerprinting for canonical text.
//!
//! ```text
//! SHA-256(canonical_text_bytes) -> lowercase hex (64 chars)
//! ```
//!
//! No version prefix or discriminator byte is mixed in: the fingerprint of a
//! canonical string equals a plain `sha256sum` of its UTF-8 bytes, which lets
//! external tools reproduce grouping keys.
//!
//! ```rust
//! use canonical::fingerprint;
//!
//! let digest = fingerprint("helloworld");
//! assert_eq!(digest.len(), 64);
//! assert_eq!(digest, fingerprint("helloworld"));
//! assert_ne!(digest, fingerprint("helloworld!"));
//! ```

use sha2::{Digest, Sha256};

/// Length of a hex-encoded fingerprint.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// SHA-256 of `canonical`'s UTF-8 bytes, hex encoded.
pub fn fingerprint(canonical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
