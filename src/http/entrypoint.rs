//! Per-request entrypoint.
//!
//! # Responsibilities
//! - Tag each request with a request ID for logging
//! - Run one resolution through the router
//! - Map the outcome to a status and a body
//!
//! # Design Decisions
//! - Not-found gets the configured generic rejection; the body never says
//!   whether the verb or the path missed
//! - Every other failure gets a diagnostic dump (or a generic body when disabled)

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::config::EntrypointConfig;
use crate::routing::{Router, RouterError};

/// Status codes the entrypoint produces.
pub const STATUS_OK: u16 = 200;
pub const STATUS_REJECTED: u16 = 403;
pub const STATUS_ERROR: u16 = 500;

/// Response produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrypointResponse {
    pub request_id: Uuid,
    pub status: u16,
    pub body: String,
}

impl EntrypointResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

#[derive(Debug, Serialize)]
struct Diagnostic<'a> {
    request_id: Uuid,
    kind: &'static str,
    error: String,
    chain: Vec<String>,
    method: &'a str,
    uri: &'a str,
}

/// Resolve one request and build its response.
pub fn handle_request(
    router: &Router,
    config: &EntrypointConfig,
    method: &str,
    uri: &str,
) -> EntrypointResponse {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("request", request_id = %request_id, method, uri);
    let _enter = span.enter();

    match router.resolve(method, uri) {
        Ok(value) => {
            tracing::debug!("Request handled");
            EntrypointResponse {
                request_id,
                status: STATUS_OK,
                body: render(&value),
            }
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(error = %e, "Rejected request with no matching route");
            EntrypointResponse {
                request_id,
                status: STATUS_REJECTED,
                body: config.rejection_body.clone(),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "Request failed");
            let body = if config.diagnostics {
                diagnostic_dump(request_id, &e, method, uri)
            } else {
                "Internal Server Error".to_string()
            };
            EntrypointResponse {
                request_id,
                status: STATUS_ERROR,
                body,
            }
        }
    }
}

/// Render a handler value as a response body. Strings are emitted raw.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn diagnostic_dump(request_id: Uuid, error: &RouterError, method: &str, uri: &str) -> String {
    let mut chain = Vec::new();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }

    let diagnostic = Diagnostic {
        request_id,
        kind: error.kind(),
        error: error.to_string(),
        chain,
        method,
        uri,
    };
    serde_json::to_string_pretty(&diagnostic).unwrap_or_else(|_| error.to_string())
}
