//! Reasons a file is refused by the ingest stage.
//!
//! None of these reach the HTTP caller. The orchestrator logs them and drops
//! the file, so a refused file simply does not appear in the result and does
//! not count toward `totalFiles`.
//!
//! | Error | Stage | Meaning |
//! |-------|-------|---------|
//! | [`FileTooLarge`](IngestError::FileTooLarge) | before decode | declared size over the byte ceiling |
//! | [`NotText`](IngestError::NotText) | after decode | no text extension and too many non-printable chars |
//! | [`ContentTooLarge`](IngestError::ContentTooLarge) | after classify | decoded text over the character ceiling |
use thiserror::Error;

/// Why a file was skipped.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum IngestError {
    #[error("declared size {size} bytes exceeds limit of {limit}")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("not a text file ({pct:.1}% non-printable)", pct = .ratio * 100.0)]
    NotText { ratio: f64 },

    #[error("decoded content of {chars} chars exceeds limit of {limit}")]
    ContentTooLarge { chars: usize, limit: usize },
}

impl IngestError {
    /// Short, stable label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            IngestError::FileTooLarge { .. } => "file_too_large",
            IngestError::NotText { .. } => "not_text",
            IngestError::ContentTooLarge { .. } => "content_too_large",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_numbers() {
        let err = IngestError::FileTooLarge {
            size: 10,
            limit: 5,
        };
        assert_eq!(err.to_string(), "declared size 10 bytes exceeds limit of 5");
        assert_eq!(err.reason(), "file_too_large");

        let err = IngestError::NotText { ratio: 0.5 };
        assert_eq!(err.to_string(), "not a text file (50.0% non-printable)");
        assert_eq!(err.reason(), "not_text");
    }
}
