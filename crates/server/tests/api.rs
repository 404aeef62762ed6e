//! Router-level tests for the HTTP API.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

const BOUNDARY: &str = "dupetext-test-boundary";

fn test_router() -> Router {
    let state = ServerState::new(ServerConfig::default(), None);
    build_router(Arc::new(state))
}

/// Hand-rolled multipart body builder.
#[derive(Default)]
struct Form {
    body: Vec<u8>,
}

impl Form {
    fn file(mut self, filename: &str, content_type: &str, content: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
                 filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(content);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    fn into_request(mut self) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/api/process-files")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_duplicates_are_grouped() {
    let request = Form::default()
        .file("a.txt", "text/plain", b"Hello World\n")
        .file("b.txt", "text/plain", b"hello   world")
        .file("c.txt", "text/plain", b"something else")
        .into_request();
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalFiles"], 3);
    assert_eq!(body["duplicateCount"], 2);

    let groups = body["duplicateGroups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["count"], 2);
    assert_eq!(groups[0]["files"][0]["name"], "a.txt");
    assert_eq!(groups[0]["files"][0]["type"], "text/plain");
    assert_eq!(groups[0]["files"][0]["content"], "Hello World\n");
    assert_eq!(groups[0]["files"][1]["normalizedContent"], "helloworld");
    assert_eq!(body["uniqueFiles"][0]["name"], "c.txt");
}

#[tokio::test]
async fn test_paths_and_last_modified_are_applied() {
    let request = Form::default()
        .file("a.txt", "text/plain", b"same")
        .file("a.txt", "text/plain", b"SAME")
        .text("paths", "proj/a.txt")
        .text("paths", "proj/old/a.txt")
        .text("lastModified", "1700000000000")
        .text("lastModified", "not a number")
        .text("unrelated", "ignored")
        .into_request();
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    let files = &body["duplicateGroups"][0]["files"];
    assert_eq!(files[0]["path"], "proj/a.txt");
    assert_eq!(files[0]["isFromFolder"], true);
    assert_eq!(files[0]["lastModified"], 1_700_000_000_000i64);
    assert_eq!(files[1]["path"], "proj/old/a.txt");
    // Unparsable timestamp falls back to receive time.
    assert!(files[1]["lastModified"].as_i64().unwrap() > 1_700_000_000_000);
}

#[tokio::test]
async fn test_binary_files_are_dropped() {
    let mut blob = Vec::new();
    for _ in 0..50 {
        blob.extend_from_slice(&[0, b'x']);
    }
    let request = Form::default()
        .file("data.bin", "application/octet-stream", &blob)
        .file("notes.md", "text/markdown", b"# notes")
        .into_request();
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalFiles"], 1);
    assert_eq!(body["uniqueFiles"][0]["name"], "notes.md");
}

#[tokio::test]
async fn test_empty_upload_is_bad_request() {
    let request = Form::default().text("paths", "x.txt").into_request();
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["message"], "No files provided");
    assert!(body.get("duplicateGroups").is_none());
}

#[tokio::test]
async fn test_non_multipart_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/process-files")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No files provided");
}

#[tokio::test]
async fn test_truncated_multipart_is_internal_error() {
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
         filename=\"a.txt\"\r\n\r\nunterminated"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/process-files")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(test_router(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_health_and_ready() {
    let health = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(test_router(), health).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let ready = Request::builder().uri("/ready").body(Body::empty()).unwrap();
    let (status, body) = send(test_router(), ready).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["batch_size"], 50);
}

#[tokio::test]
async fn test_api_info_lists_upload_endpoint() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "/api/process-files"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_metrics_without_recorder_is_not_found() {
    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let (status, _) = send(test_router(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}
