use thiserror::Error;

use crate::config::ConfigError;

/// Request-level failures of [`process_batch`](crate::process_batch).
///
/// Per-file problems never appear here: oversized, binary and unreadable
/// files are dropped inside the orchestrator.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PipelineError {
    /// The caller supplied no files at all.
    #[error("no files provided")]
    EmptyBatch,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl PipelineError {
    /// Whether the caller, not the service, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::EmptyBatch)
    }
}
