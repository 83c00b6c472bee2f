//! HTTP shim exposing the audit engine.
//!
//! Provides one endpoint:
//! - `POST /audit` - audits the URL in the JSON body and returns the report

mod handlers;
mod types;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::post;
use axum::Router;

use crate::audit::Auditor;
use handlers::audit_handler;
pub use types::{AuditRequest, ErrorResponse, ServerState};

/// Builds the router without binding a socket.
pub fn router(auditor: Arc<Auditor>, audit_timeout: Duration) -> Router {
    Router::new()
        .route("/audit", post(audit_handler))
        .with_state(ServerState {
            auditor,
            audit_timeout,
        })
}

/// Serves the audit endpoint until the process is stopped.
pub async fn start_server(
    bind: &str,
    port: u16,
    auditor: Arc<Auditor>,
    audit_timeout: Duration,
) -> Result<(), anyhow::Error> {
    let app = router(auditor, audit_timeout);

    let listener = tokio::net::TcpListener::bind((bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind audit server to {bind}:{port}: {e}"))?;

    log::info!("Audit server listening on http://{bind}:{port}/");
    log::info!("  - Audit: POST http://{bind}:{port}/audit");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Audit server error: {e}"))?;

    Ok(())
}
