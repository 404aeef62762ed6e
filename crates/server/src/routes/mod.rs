//! API route handlers
//!
//! - `health`: Health checks, readiness, and metrics
//! - `process`: Duplicate analysis of a multipart upload

pub mod health;
pub mod process;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "dupetext",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "dupetext",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/process-files",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
