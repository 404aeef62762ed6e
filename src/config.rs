//! Pipeline configuration.
//!
//! [`PipelineConfig`] bundles the batching policy with the ingest admission
//! policy. It deserializes with defaults for every missing field so a service
//! can nest it under its own configuration and override single values from
//! the environment.
//!
//! ```rust
//! use dupetext::PipelineConfig;
//!
//! let cfg = PipelineConfig::default();
//! assert_eq!(cfg.batch_size, 50);
//! assert!(cfg.validate().is_ok());
//! ```

use ingest::IngestConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Files processed concurrently before the next join barrier.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Orchestrator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of files fanned out per batch. Bounds peak memory and the
    /// number of concurrent blocking workers a single request can occupy.
    pub batch_size: usize,

    /// Per-file admission policy.
    pub ingest: IngestConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            ingest: IngestConfig::default(),
        }
    }
}

/// Invalid [`PipelineConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("batch_size must be at least 1")]
    ZeroBatchSize,

    #[error("invalid ingest configuration: {0}")]
    Ingest(#[from] ingest::ConfigError),
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        self.ingest.validate()?;
        Ok(())
    }
}
