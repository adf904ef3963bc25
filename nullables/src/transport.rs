//! Nullable transport: scripted responses, recorded requests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bkyc_types::{HttpRequest, HttpResponse, Transport, TransportError};
use tokio::time::Instant;

/// A request as seen by [`NullTransport`], with the (tokio) time it arrived.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub request: HttpRequest,
    pub at: Instant,
}

/// A transport that answers from a script instead of the network.
///
/// Responses are consumed in the order they were queued. A request arriving
/// after the script is exhausted fails with a transport error.
#[derive(Default)]
pub struct NullTransport {
    script: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn respond(&self, response: HttpResponse) {
        self.push(Ok(response));
    }

    /// Queue a response whose body is `body` serialized as JSON.
    pub fn respond_json(&self, status: u16, body: &serde_json::Value) {
        self.respond(HttpResponse::new(status, body.to_string()));
    }

    /// Queue a transport failure.
    pub fn fail(&self, message: impl Into<String>) {
        self.push(Err(message.into()));
    }

    /// All requests received so far (for assertions).
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Number of queued responses not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.script).len()
    }

    fn push(&self, entry: Result<HttpResponse, String>) {
        lock(&self.script).push_back(entry);
    }
}

#[async_trait]
impl Transport for NullTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(RecordedRequest {
            request,
            at: Instant::now(),
        });
        match lock(&self.script).pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::new(message)),
            None => Err(TransportError::new("no scripted response left")),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
