//! HTTP shim data structures.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audit::Auditor;

/// Shared state for the audit server
#[derive(Clone, Debug)]
pub struct ServerState {
    pub auditor: Arc<Auditor>,
    /// Upper bound on one whole audit, network phase included
    pub audit_timeout: Duration,
}

/// Body of `POST /audit`. Unparseable bodies are treated as an empty request.
#[derive(Debug, Default, Deserialize)]
pub struct AuditRequest {
    pub url: Option<String>,
}

/// JSON error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
