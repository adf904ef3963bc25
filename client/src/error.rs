use bkyc_types::{TransportError, VerificationFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("API key is not configured")]
    Configuration,

    #[error("invalid URL: {0}")]
    InvalidEndpoint(String),

    #[error("failed to build HTTP client: {0}")]
    ClientSetup(#[source] TransportError),

    #[error("network error: {0}")]
    Network(#[from] TransportError),

    #[error("server returned no data")]
    EmptyResponse,

    #[error("failed to parse server response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("unexpected response shape: expected a JSON object, found {found}")]
    UnexpectedShape { found: &'static str },
}

impl BackendError {
    /// Stable machine-readable kind, independent of the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::InvalidEndpoint(_) => "invalid_endpoint",
            Self::ClientSetup(_) => "client_setup",
            Self::Network(_) => "network",
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse(_) => "malformed_response",
            Self::UnexpectedShape { .. } => "unexpected_shape",
        }
    }
}

/// Failure of a complete verification flow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Verification(#[from] VerificationFailure),
}
