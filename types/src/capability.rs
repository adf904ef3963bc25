//! The external verification capability.
//!
//! Document capture and analysis are owned by a third-party SDK. This module
//! only describes the two entry points the demo consumes.

use async_trait::async_trait;

use crate::{DocumentType, SessionToken};

/// How the capability reports its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationMode {
    /// The capability runs the whole verification and reports done/failed.
    Sync,
    /// The capability captures against a backend session; results are
    /// fetched from the backend afterwards.
    Async,
}

impl VerificationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

/// Terminal failure reported by the capability.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("verification failed: {description}")]
pub struct VerificationFailure {
    pub description: String,
}

impl VerificationFailure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A component that captures and verifies an identity document.
///
/// Implementations may publish intermediate captures to a
/// [`CaptureEvents`](crate::CaptureEvents) handle they were built with.
#[async_trait]
pub trait VerificationCapability: Send + Sync {
    /// Run a verification without a prior session; the capability opens its
    /// own session and returns the token it used.
    async fn start(&self, document: DocumentType) -> Result<SessionToken, VerificationFailure>;

    /// Run a verification against a session created by the caller.
    async fn start_with_session(
        &self,
        document: DocumentType,
        token: &SessionToken,
    ) -> Result<(), VerificationFailure>;
}
