//! Nullable verification capability: scripted outcomes, recorded calls.

use std::sync::Mutex;

use async_trait::async_trait;
use bkyc_types::{
    CaptureEvent, CaptureEvents, DocumentType, SessionToken, VerificationCapability,
    VerificationFailure,
};

/// One call received by [`NullCapability`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CapabilityCall {
    Start { document: DocumentType },
    StartWithSession {
        document: DocumentType,
        token: SessionToken,
    },
}

/// A verification capability that never opens a camera.
///
/// Every call publishes the configured captures (if any) and then succeeds,
/// or fails with the configured failure.
pub struct NullCapability {
    token: SessionToken,
    failure: Option<VerificationFailure>,
    captures: Vec<Vec<u8>>,
    events: CaptureEvents,
    calls: Mutex<Vec<CapabilityCall>>,
}

impl NullCapability {
    /// A capability that succeeds, reporting `token` from [`start`](VerificationCapability::start).
    pub fn succeeding(token: impl Into<SessionToken>) -> Self {
        Self {
            token: token.into(),
            failure: None,
            captures: Vec::new(),
            events: CaptureEvents::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A capability that fails every call with `description`.
    pub fn failing(description: impl Into<String>) -> Self {
        Self {
            failure: Some(VerificationFailure::new(description)),
            ..Self::succeeding("")
        }
    }

    /// Publish a capture of `bytes` on every call.
    pub fn with_capture(mut self, bytes: Vec<u8>) -> Self {
        self.captures.push(bytes);
        self
    }

    /// Publish captures to `events` instead of a private channel.
    pub fn with_events(mut self, events: CaptureEvents) -> Self {
        self.events = events;
        self
    }

    pub fn events(&self) -> &CaptureEvents {
        &self.events
    }

    /// All calls received so far (for assertions).
    pub fn calls(&self) -> Vec<CapabilityCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, call: CapabilityCall, document: DocumentType) -> Result<(), VerificationFailure> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
        for payload in &self.captures {
            self.events.publish(CaptureEvent {
                document,
                payload: payload.clone(),
            });
        }
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VerificationCapability for NullCapability {
    async fn start(&self, document: DocumentType) -> Result<SessionToken, VerificationFailure> {
        self.record(CapabilityCall::Start { document }, document)?;
        Ok(self.token.clone())
    }

    async fn start_with_session(
        &self,
        document: DocumentType,
        token: &SessionToken,
    ) -> Result<(), VerificationFailure> {
        self.record(
            CapabilityCall::StartWithSession {
                document,
                token: token.clone(),
            },
            document,
        )
    }
}
