//! dupetext ingest layer
//!
//! This is where uploaded files enter the pipeline. We take one
//! [`InputFile`], apply the admission policy, and hand back decoded text that
//! the canonical stage can work with.
//!
//! ## What we do here
//!
//! - **Enforce size ceilings** - declared byte size before decoding, decoded
//!   character count after.
//! - **Decode** - strict UTF-8, Latin-1 fallback. Never fails.
//! - **Classify** - known text extension, or mostly printable content.
//! - **Log everything** - structured logs via tracing, one event per file.
//!
//! ## Main entry point
//!
//! Call [`ingest`] with an [`InputFile`] and [`IngestConfig`]. An `Err` is a
//! skip reason, not a failure: callers drop the file and move on.
//!
//! ## Example
//!
//! ```
//! use ingest::{ingest, IngestConfig, IngestError, InputFile, TextEncoding};
//!
//! let config = IngestConfig::default();
//!
//! let notes = InputFile::new("notes.md", "# Title\r\nBody");
//! let decoded = ingest(&notes, &config).unwrap();
//! assert_eq!(decoded.encoding, TextEncoding::Utf8);
//!
//! let blob = InputFile::new("data.bin", vec![0u8; 64]);
//! assert!(matches!(ingest(&blob, &config), Err(IngestError::NotText { .. })));
//! ```
use std::time::Instant;

use tracing::{debug, Level};

mod classify;
mod config;
mod decode;
mod error;
mod types;

pub use crate::classify::{
    has_text_extension, is_non_printable, is_text_file, non_printable_ratio, non_text_ratio,
    DEFAULT_MAX_NON_PRINTABLE_RATIO, DEFAULT_TEXT_EXTENSIONS,
};
pub use crate::config::{ConfigError, IngestConfig, DEFAULT_MAX_FILE_BYTES};
pub use crate::decode::decode_bytes;
pub use crate::error::IngestError;
pub use crate::types::{DecodedText, InputFile, TextEncoding};

/// Admit one uploaded file: size check, decode, classify, length check.
pub fn ingest(file: &InputFile, cfg: &IngestConfig) -> Result<DecodedText, IngestError> {
    let start = Instant::now();
    let span = tracing::span!(Level::DEBUG, "ingest.file", file = %file.declared_path());
    let _guard = span.enter();

    match ingest_inner(file, cfg) {
        Ok(decoded) => {
            debug!(
                encoding = %decoded.encoding,
                size = file.size,
                elapsed_micros = start.elapsed().as_micros(),
                "ingest_accepted"
            );
            Ok(decoded)
        }
        Err(err) => {
            debug!(
                reason = err.reason(),
                error = %err,
                size = file.size,
                elapsed_micros = start.elapsed().as_micros(),
                "ingest_skipped"
            );
            Err(err)
        }
    }
}

fn ingest_inner(file: &InputFile, cfg: &IngestConfig) -> Result<DecodedText, IngestError> {
    // Cheapest check first, before touching the bytes.
    if file.size > cfg.max_file_bytes {
        return Err(IngestError::FileTooLarge {
            size: file.size,
            limit: cfg.max_file_bytes,
        });
    }

    let decoded = decode_bytes(&file.content);

    if let Some(ratio) = non_text_ratio(
        &file.name,
        &decoded.text,
        &cfg.text_extensions,
        cfg.max_non_printable_ratio,
    ) {
        return Err(IngestError::NotText { ratio });
    }

    let chars = decoded.char_len();
    if chars > cfg.max_content_chars {
        return Err(IngestError::ContentTooLarge {
            chars,
            limit: cfg.max_content_chars,
        });
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_by_extension() {
        let file = InputFile::new("main.rs", "fn main() {}");
        let decoded = ingest(&file, &IngestConfig::default()).expect("text file admitted");
        assert_eq!(decoded.text, "fn main() {}");
    }

    #[test]
    fn accepts_extensionless_printable_text() {
        let file = InputFile::new("LICENSE", "Permission is hereby granted");
        assert!(ingest(&file, &IngestConfig::default()).is_ok());
    }

    #[test]
    fn rejects_half_null_blob() {
        let mut bytes = Vec::new();
        for _ in 0..32 {
            bytes.extend_from_slice(&[0u8, b'x']);
        }
        let file = InputFile::new("data.bin", bytes);
        match ingest(&file, &IngestConfig::default()) {
            Err(IngestError::NotText { ratio }) => assert!((ratio - 0.5).abs() < 1e-9),
            other => panic!("expected NotText, got {other:?}"),
        }
    }

    #[test]
    fn rejects_oversized_declared_size_without_decoding() {
        let file = InputFile::new("big.txt", "tiny").with_declared_size(6 * 1024 * 1024);
        assert_eq!(
            ingest(&file, &IngestConfig::default()),
            Err(IngestError::FileTooLarge {
                size: 6 * 1024 * 1024,
                limit: 5 * 1024 * 1024,
            })
        );
    }

    #[test]
    fn size_limit_is_inclusive() {
        let cfg = IngestConfig {
            max_file_bytes: 4,
            ..Default::default()
        };
        assert!(ingest(&InputFile::new("a.txt", "abcd"), &cfg).is_ok());
        assert!(ingest(&InputFile::new("a.txt", "abcde"), &cfg).is_err());
    }

    #[test]
    fn rejects_long_decoded_content_independently() {
        // Declared size lies below the byte limit, content is over the char limit.
        let cfg = IngestConfig {
            max_content_chars: 8,
            ..Default::default()
        };
        let file = InputFile::new("a.txt", "0123456789").with_declared_size(1);
        assert_eq!(
            ingest(&file, &cfg),
            Err(IngestError::ContentTooLarge {
                chars: 10,
                limit: 8,
            })
        );
    }

    #[test]
    fn content_limit_counts_chars_not_bytes() {
        let cfg = IngestConfig {
            max_content_chars: 3,
            ..Default::default()
        };
        // Three chars, nine bytes.
        let file = InputFile::new("cjk.txt", "\u{4e16}\u{754c}\u{4eba}");
        assert!(ingest(&file, &cfg).is_ok());
    }

    #[test]
    fn latin1_fallback_for_known_extension() {
        let file = InputFile::new("legacy.txt", vec![b'c', b'a', b'f', 0xE9]);
        let decoded = ingest(&file, &IngestConfig::default()).expect("admitted by extension");
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
        assert_eq!(decoded.text, "caf\u{e9}");
    }

    #[test]
    fn custom_extension_list_is_honoured() {
        let cfg = IngestConfig {
            text_extensions: vec![".dat".into()],
            ..Default::default()
        };
        let file = InputFile::new("x.DAT", vec![0u8; 16]);
        assert!(ingest(&file, &cfg).is_ok());
        let file = InputFile::new("x.txt", vec![0u8; 16]);
        assert!(matches!(ingest(&file, &cfg), Err(IngestError::NotText { .. })));
    }
}
