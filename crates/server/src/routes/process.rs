//! `POST /api/process-files`
//!
//! Multipart parts:
//!
//! - `files` (repeated): file content, name from the part's filename, media
//!   type from its `Content-Type`
//! - `paths` (repeated, optional): relative paths parallel to `files`
//! - `lastModified` (repeated, optional): millisecond timestamps parallel to
//!   `files`
//!
//! Any other part is ignored.

use crate::error::{ServerError, ServerResult, NO_FILES_MESSAGE};
use crate::state::ServerState;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use dupetext::{process_batch_with_paths, InputFile, ProcessingResult};
use std::sync::Arc;
use std::time::Instant;

pub const FILES_FIELD: &str = "files";
pub const PATHS_FIELD: &str = "paths";
pub const LAST_MODIFIED_FIELD: &str = "lastModified";

/// Parts of one upload, in the order the client sent them.
#[derive(Debug, Default)]
struct Upload {
    files: Vec<InputFile>,
    paths: Vec<String>,
    last_modified: Vec<String>,
}

impl Upload {
    /// Attach the parallel `lastModified` entries. Missing or unparsable
    /// entries fall back to `received_at`.
    fn into_parts(self, received_at: i64) -> (Vec<InputFile>, Vec<String>) {
        let Upload {
            mut files,
            paths,
            last_modified,
        } = self;

        for (i, file) in files.iter_mut().enumerate() {
            let millis = last_modified
                .get(i)
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .unwrap_or(received_at);
            file.last_modified = millis;
        }
        (files, paths)
    }
}

/// Analyze an upload for duplicate files
///
/// # Response
///
/// ```json
/// {
///   "duplicateGroups": [{ "hash": "...", "files": [...], "count": 2 }],
///   "uniqueFiles": [...],
///   "totalFiles": 3,
///   "duplicateCount": 2
/// }
/// ```
pub async fn process_files(
    State(state): State<Arc<ServerState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<ProcessingResult>> {
    let start = Instant::now();
    let received_at = Utc::now().timestamp_millis();

    // Not a multipart body at all: nothing was uploaded.
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "multipart_rejected");
        ServerError::BadRequest(NO_FILES_MESSAGE.to_string())
    })?;

    let upload = read_upload(&mut multipart)
        .await
        .map_err(|err| multipart_error(err, state.config.max_body_size_mb))?;
    let (files, paths) = upload.into_parts(received_at);
    let received = files.len();

    let result = process_batch_with_paths(files, paths, &state.config.pipeline).await?;

    let elapsed = start.elapsed();
    metrics::counter!("dupetext_files_received_total").increment(received as u64);
    metrics::counter!("dupetext_files_accepted_total").increment(result.total_files as u64);
    metrics::counter!("dupetext_duplicate_files_total").increment(result.duplicate_count as u64);
    metrics::histogram!("dupetext_process_duration_seconds").record(elapsed.as_secs_f64());

    tracing::info!(
        files_received = received,
        total_files = result.total_files,
        duplicate_count = result.duplicate_count,
        duplicate_groups = result.duplicate_groups.len(),
        duration_ms = elapsed.as_millis() as u64,
        "upload_processed"
    );

    Ok(Json(result))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, MultipartError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            FILES_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let media_type = field.content_type().unwrap_or_default().to_owned();
                let content = field.bytes().await?;
                upload
                    .files
                    .push(InputFile::new(file_name, content).with_media_type(media_type));
            }
            PATHS_FIELD => upload.paths.push(field.text().await?),
            LAST_MODIFIED_FIELD => upload.last_modified.push(field.text().await?),
            _ => {
                tracing::debug!(field = %name, "multipart_field_ignored");
            }
        }
    }

    Ok(upload)
}

fn multipart_error(err: MultipartError, max_body_size_mb: usize) -> ServerError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(max_body_size_mb)
    } else {
        ServerError::Internal(format!("multipart stream: {}", err.body_text()))
    }
}
