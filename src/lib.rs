//! Workspace umbrella crate for dupetext.
//!
//! This crate stitches the ingest and canonical stages into a batch
//! orchestrator: hand it every file of one upload, get back duplicate groups
//! and unique files.
//!
//! ```text
//! InputFile ─► size check ─► decode ─► classify ─► length check
//!           ─► canonicalize ─► fingerprint ─► group by fingerprint ─► ProcessingResult
//! ```
//!
//! Files that are oversized or not text are dropped without an error. Only
//! an empty upload (or an invalid configuration) fails the whole call.
//!
//! ```rust
//! use dupetext::{process_batch, InputFile, PipelineConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let files = vec![
//!     InputFile::new("a.txt", "Hello World\n"),
//!     InputFile::new("b.txt", "hello   world"),
//!     InputFile::new("c.txt", "something else"),
//! ];
//! let result = process_batch(files, &PipelineConfig::default()).await.unwrap();
//! assert_eq!(result.duplicate_groups.len(), 1);
//! assert_eq!(result.duplicate_groups[0].count, 2);
//! assert_eq!(result.unique_files.len(), 1);
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tokio::task;
use tracing::{debug, info, warn, Instrument};

mod config;
mod error;
mod grouping;
mod types;

pub use canonical::{canonicalize, canonicalize_document, fingerprint, CanonicalizedDocument};
pub use ingest::{
    decode_bytes, ingest, DecodedText, IngestConfig, IngestError, InputFile, TextEncoding,
};

pub use crate::config::{ConfigError, PipelineConfig, DEFAULT_BATCH_SIZE};
pub use crate::error::PipelineError;
pub use crate::grouping::group_by_fingerprint;
pub use crate::types::{DuplicateGroup, ProcessedFile, ProcessingResult};

/// Run one file through every per-file stage.
///
/// An `Err` is the reason the file is skipped.
pub fn process_file(file: &InputFile, cfg: &IngestConfig) -> Result<ProcessedFile, IngestError> {
    let decoded = ingest(file, cfg)?;
    let doc = canonicalize_document(&decoded.text);
    Ok(ProcessedFile::new(file, decoded.text, doc))
}

/// Process a whole upload and group the accepted files by fingerprint.
///
/// Files are handled `cfg.batch_size` at a time. Each file of a batch runs on
/// tokio's blocking pool; the batch is joined before the next one starts.
/// Skipped files and failed workers are logged and left out of the result.
///
/// Must be called from within a tokio runtime.
pub async fn process_batch(
    files: Vec<InputFile>,
    cfg: &PipelineConfig,
) -> Result<ProcessingResult, PipelineError> {
    if files.is_empty() {
        return Err(PipelineError::EmptyBatch);
    }
    cfg.validate()?;

    let received = files.len();
    let span = tracing::info_span!("pipeline.process_batch", files = received);
    async move {
        let start = Instant::now();
        let accepted = run_batches(files, cfg, process_file).await;
        let accepted_count = accepted.len();
        let result = group_by_fingerprint(accepted);

        info!(
            received,
            accepted = accepted_count,
            dropped = received - accepted_count,
            duplicate_groups = result.duplicate_groups.len(),
            unique_files = result.unique_files.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "batch_analysis_complete"
        );
        Ok(result)
    }
    .instrument(span)
    .await
}

/// Like [`process_batch`], with declared relative paths supplied as a list
/// parallel to `files`.
///
/// A missing or empty entry leaves the file's own `relative_path` untouched.
pub async fn process_batch_with_paths(
    mut files: Vec<InputFile>,
    paths: Vec<String>,
    cfg: &PipelineConfig,
) -> Result<ProcessingResult, PipelineError> {
    for (file, path) in files.iter_mut().zip(paths) {
        if !path.is_empty() {
            file.relative_path = Some(path);
        }
    }
    process_batch(files, cfg).await
}

/// Per-file stage run on the blocking pool.
type FileWorker = fn(&InputFile, &IngestConfig) -> Result<ProcessedFile, IngestError>;

async fn run_batches(
    files: Vec<InputFile>,
    cfg: &PipelineConfig,
    worker: FileWorker,
) -> Vec<ProcessedFile> {
    let total = files.len();
    let batch_size = cfg.batch_size;
    let batch_count = total.div_ceil(batch_size);
    let ingest_cfg = Arc::new(cfg.ingest.clone());

    let mut accepted = Vec::with_capacity(total);
    let mut pending = files.into_iter();
    for batch_index in 0..batch_count {
        let batch: Vec<InputFile> = pending.by_ref().take(batch_size).collect();
        debug!(
            batch = batch_index + 1,
            batches = batch_count,
            files = batch.len(),
            "batch_started"
        );

        let (names, workers): (Vec<String>, Vec<_>) = batch
            .into_iter()
            .map(|file| {
                let name = file.declared_path().to_owned();
                let cfg = Arc::clone(&ingest_cfg);
                let handle = task::spawn_blocking(move || worker(&file, &cfg));
                (name, handle)
            })
            .unzip();

        // Join barrier: every worker of this batch finishes before the next
        // batch is spawned.
        for (name, joined) in names.into_iter().zip(join_all(workers).await) {
            match joined {
                Ok(Ok(file)) => accepted.push(file),
                // Already logged by the ingest stage.
                Ok(Err(_skip)) => {}
                Err(err) => warn!(file = %name, error = %err, "file_worker_failed"),
            }
        }
    }
    accepted
}
