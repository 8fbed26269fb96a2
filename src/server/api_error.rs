use super::metrics::record_error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// 500 carrying the error message as `{"error": ...}`.
pub fn internal_error(endpoint: &str, err: anyhow::Error) -> Response {
    error!("Failed to serve {}: {:#}", endpoint, err);
    record_error("internal", endpoint);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

pub fn not_found(what: &str, id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{} not found: {}", what, id) })),
    )
        .into_response()
}
