//! End-to-end verification flows.
//!
//! Sync: the capability runs the whole verification and opens its own
//! session. Async: the backend session is created here, handed to the
//! capability, and the full results are polled from the backend afterwards.

use bkyc_rows::{build_rows, DisplayRow};
use bkyc_types::{DocumentType, SessionToken, VerificationCapability, VerificationMode};
use serde_json::{Map, Value};
use tracing::{info, warn, Instrument};

use crate::backend::BackendClient;
use crate::error::FlowError;
use crate::tracing_spans::verification_span;

/// Final results of an async verification, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationReport {
    pub token: SessionToken,
    pub document: Map<String, Value>,
    pub rows: Vec<DisplayRow>,
}

/// Outcome of [`Verifier::run`].
#[derive(Clone, Debug, PartialEq)]
pub enum FlowOutcome {
    /// The capability finished on its own.
    Done { token: SessionToken },
    /// The backend produced a full result document.
    Report(VerificationReport),
}

/// Drives a verification capability against the backend.
pub struct Verifier<C> {
    backend: BackendClient,
    capability: C,
}

impl<C: VerificationCapability> Verifier<C> {
    pub fn new(backend: BackendClient, capability: C) -> Self {
        Self {
            backend,
            capability,
        }
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub async fn run(
        &self,
        document: DocumentType,
        mode: VerificationMode,
    ) -> Result<FlowOutcome, FlowError> {
        match mode {
            VerificationMode::Sync => Ok(FlowOutcome::Done {
                token: self.run_sync(document).await?,
            }),
            VerificationMode::Async => Ok(FlowOutcome::Report(self.run_async(document).await?)),
        }
    }

    /// Let the capability verify `document` without a prior session.
    pub async fn run_sync(&self, document: DocumentType) -> Result<SessionToken, FlowError> {
        async {
            match self.capability.start(document).await {
                Ok(token) => {
                    info!("verification done");
                    Ok::<_, FlowError>(token)
                }
                Err(failure) => {
                    warn!(reason = %failure.description, "verification failed");
                    Err(failure.into())
                }
            }
        }
        .instrument(verification_span(document.as_str(), VerificationMode::Sync.as_str()))
        .await
    }

    /// Create a session, run the capability against it, then poll the
    /// backend for the full results and flatten them.
    pub async fn run_async(&self, document: DocumentType) -> Result<VerificationReport, FlowError> {
        async {
            let token = self.backend.create_session().await?;
            info!("session created");

            if let Err(failure) = self.capability.start_with_session(document, &token).await {
                warn!(reason = %failure.description, "verification failed");
                return Err(failure.into());
            }
            info!("capture finished, fetching results");

            let result = self.backend.get_full_results(&token).await?;
            let rows = build_rows(&result);
            info!(rows = rows.len(), "results ready");

            Ok::<_, FlowError>(VerificationReport {
                token,
                document: result,
                rows,
            })
        }
        .instrument(verification_span(document.as_str(), VerificationMode::Async.as_str()))
        .await
    }
}
