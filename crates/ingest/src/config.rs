//! Configuration types for the ingest stage.
//!
//! [`IngestConfig`] controls the admission policy applied to every uploaded
//! file: size ceilings, the text-extension allow-list, and the printable
//! heuristic threshold. It is cheap to clone and deserializes from any serde
//! format, so it can be nested inside a service configuration.
//!
//! # Quick Start
//!
//! ```rust
//! use ingest::IngestConfig;
//!
//! let config = IngestConfig::default();
//! config.validate().expect("defaults are valid");
//! assert_eq!(config.max_file_bytes, 5 * 1024 * 1024);
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{DEFAULT_MAX_NON_PRINTABLE_RATIO, DEFAULT_TEXT_EXTENSIONS};

/// 5 MiB, the default ceiling for both declared size and decoded length.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Runtime configuration for file admission.
///
/// # Serialization
///
/// ```json
/// {
///   "max_file_bytes": 5242880,
///   "max_content_chars": 5242880,
///   "max_non_printable_ratio": 0.1,
///   "text_extensions": [".txt", ".md"]
/// }
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Files whose declared size exceeds this many bytes are dropped before
    /// decoding.
    ///
    /// Default: 5 MiB
    pub max_file_bytes: u64,

    /// Files whose decoded text exceeds this many characters are dropped.
    /// Checked independently of `max_file_bytes`, after decoding.
    ///
    /// Default: 5 Mi characters
    pub max_content_chars: usize,

    /// Files without a known text extension are accepted only when the share
    /// of non-printable characters is strictly below this value.
    ///
    /// Default: `0.1`
    pub max_non_printable_ratio: f64,

    /// Lowercase extensions (with the leading dot) that are always text.
    ///
    /// Default: the 29 source, markup, data and config extensions in
    /// [`DEFAULT_TEXT_EXTENSIONS`].
    pub text_extensions: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_content_chars: DEFAULT_MAX_FILE_BYTES as usize,
            max_non_printable_ratio: DEFAULT_MAX_NON_PRINTABLE_RATIO,
            text_extensions: DEFAULT_TEXT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}

/// Errors that can occur when validating an [`IngestConfig`].
///
/// These are start-up problems; surface them before serving traffic.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max_file_bytes must be greater than zero")]
    ZeroFileLimit,

    #[error("max_content_chars must be greater than zero")]
    ZeroContentLimit,

    #[error("max_non_printable_ratio must be in (0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error("text extension {0:?} must start with '.'")]
    InvalidExtension(String),
}

impl IngestConfig {
    /// Validates internal consistency of this configuration.
    ///
    /// ```rust
    /// use ingest::{ConfigError, IngestConfig};
    ///
    /// let bad = IngestConfig {
    ///     max_non_printable_ratio: 1.5,
    ///     ..Default::default()
    /// };
    /// assert_eq!(bad.validate(), Err(ConfigError::RatioOutOfRange(1.5)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_bytes == 0 {
            return Err(ConfigError::ZeroFileLimit);
        }
        if self.max_content_chars == 0 {
            return Err(ConfigError::ZeroContentLimit);
        }
        let ratio = self.max_non_printable_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::RatioOutOfRange(ratio));
        }
        if let Some(bad) = self.text_extensions.iter().find(|ext| !ext.starts_with('.')) {
            return Err(ConfigError::InvalidExtension(bad.clone()));
        }
        Ok(())
    }
}
