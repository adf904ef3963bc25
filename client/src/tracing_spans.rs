//! Pre-built [`tracing::Span`] constructors for backend operations.

use tracing::{info_span, Span};

use bkyc_types::HttpMethod;

/// Span covering one HTTP round trip to the backend.
pub fn backend_request_span(method: HttpMethod, path: &str) -> Span {
    info_span!("backend_request", method = %method, path = %path)
}

/// Span covering a full result poll, across all attempts.
pub fn result_poll_span() -> Span {
    info_span!("result_poll")
}

/// Span covering one verification flow.
pub fn verification_span(document: &str, mode: &str) -> Span {
    info_span!("verification", document = %document, mode = %mode)
}
