//! Audit endpoint handler.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{info, warn};

use super::types::{AuditRequest, ErrorResponse, ServerState};
use crate::error_handling::AuditError;

/// `POST /audit` with `{"url": "..."}`.
///
/// - 200 with the audit report
/// - 400 for empty or invalid URLs
/// - 500 when the page cannot be fetched
/// - 504 when the whole audit exceeds the configured timeout
pub async fn audit_handler(State(state): State<ServerState>, body: Bytes) -> Response {
    let request: AuditRequest = serde_json::from_slice(&body).unwrap_or_default();
    let raw_url = request.url.unwrap_or_default();
    info!("POST /audit for '{}'", raw_url.trim());

    match tokio::time::timeout(state.audit_timeout, state.auditor.audit(&raw_url)).await {
        Ok(Ok(report)) => (StatusCode::OK, Json(report)).into_response(),
        Ok(Err(e)) => error_response(&e),
        Err(_) => {
            warn!(
                "Audit of '{}' exceeded {}s",
                raw_url.trim(),
                state.audit_timeout.as_secs()
            );
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(ErrorResponse::new("Audit timed out.")),
            )
                .into_response()
        }
    }
}

fn error_response(error: &AuditError) -> Response {
    let status = if error.is_input_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    warn!("Audit failed ({status}): {error}");
    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}
