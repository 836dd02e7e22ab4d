//! Request-id correlated wire logging.
//!
//! Every outgoing request is assigned a monotonically increasing id so that
//! its response status and body can be correlated in debug logs when several
//! calls interleave. Output goes through the `log` facade at debug level;
//! binary bodies are logged by size only.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Request ID counter for correlating requests with responses
static REQUEST_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Get the next request ID for correlation.
#[must_use]
pub fn next_request_id() -> usize {
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Logs an outgoing request.
pub fn log_request(request_id: usize, method: &str, url: &str, body: Option<&str>) {
    match body {
        Some(body) => log::debug!(">>> [{request_id}] {method} {url} body={body}"),
        None => log::debug!(">>> [{request_id}] {method} {url}"),
    }
}

/// Logs an outgoing request carrying a binary body.
pub fn log_upload(request_id: usize, method: &str, url: &str, field: &str, size: usize) {
    log::debug!(">>> [{request_id}] {method} {url} multipart field={field} ({size} bytes)");
}

/// Logs a response status for a previously logged request.
pub fn log_response_status(request_id: usize, status: u16) {
    log::debug!("<<< [{request_id}] HTTP {status}");
}

/// Logs a textual response body for a previously logged request.
pub fn log_response_body(request_id: usize, body: &str) {
    log::debug!("<<< [{request_id}] body={body}");
}
