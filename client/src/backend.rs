//! Session creation and result polling against the verification backend.

use std::sync::Arc;

use bkyc_types::{HttpMethod, HttpRequest, HttpResponse, SessionToken, Transport};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, Instrument};

use crate::config::ClientConfig;
use crate::error::BackendError;
use crate::http::HttpTransport;
use crate::json::decode_json;
use crate::progress::contains_in_progress;
use crate::tracing_spans::{backend_request_span, result_poll_span};

pub const CREATE_SESSION_PATH: &str = "/sessions/create";
pub const FULL_RESULTS_PATH: &str = "/async_sdk/full_results";

const API_KEY_HEADER: &str = "x-api-key";
const SESSION_TOKEN_HEADER: &str = "x-session-token";

#[derive(Debug, Deserialize)]
struct SessionTokenResponse {
    #[serde(rename = "x-session-token")]
    session_token: String,
}

/// Client for the two backend endpoints.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct BackendClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl BackendClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Client backed by a real HTTP transport built from `config`.
    pub fn with_http(config: ClientConfig) -> Result<Self, BackendError> {
        let transport = HttpTransport::new(&config).map_err(BackendError::ClientSetup)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Open a verification session and return its token.
    ///
    /// Fails with [`BackendError::Configuration`] before touching the network
    /// when no API key is configured.
    pub async fn create_session(&self) -> Result<SessionToken, BackendError> {
        let api_key = self.config.api_key().ok_or(BackendError::Configuration)?;
        let request = HttpRequest::new(HttpMethod::Post, self.endpoint(CREATE_SESSION_PATH)?)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, api_key);

        let response = self.send(request, CREATE_SESSION_PATH).await?;
        let body = non_empty_body(&response)?;
        let parsed: SessionTokenResponse =
            decode_json(body).map_err(BackendError::MalformedResponse)?;

        debug!(token = %parsed.session_token, "session token received");
        Ok(SessionToken::new(parsed.session_token))
    }

    /// Fetch the full results for `token`, polling until final.
    ///
    /// While the document contains `"in_progress"` anywhere, waits the
    /// configured poll interval and asks again. There is no attempt limit and
    /// no overall timeout; drop the future to stop polling. The first
    /// transport or decode failure ends the poll.
    pub async fn get_full_results(
        &self,
        token: &SessionToken,
    ) -> Result<Map<String, Value>, BackendError> {
        let url = self.endpoint(FULL_RESULTS_PATH)?;
        let interval = self.config.poll_interval();

        async {
            let mut attempt: u64 = 1;
            loop {
                let value = self.fetch_results_once(&url, token).await?;

                if contains_in_progress(&value) {
                    info!(
                        attempt,
                        retry_in_secs = interval.as_secs(),
                        "results still in progress, retrying"
                    );
                    tokio::time::sleep(interval).await;
                    attempt += 1;
                    continue;
                }

                info!(attempt, "final results received");
                return result_document(value);
            }
        }
        .instrument(result_poll_span())
        .await
    }

    async fn fetch_results_once(
        &self,
        url: &str,
        token: &SessionToken,
    ) -> Result<Value, BackendError> {
        let request = HttpRequest::new(HttpMethod::Get, url)
            .header("Content-Type", "application/json")
            .header(SESSION_TOKEN_HEADER, token.as_str());

        let response = self.send(request, FULL_RESULTS_PATH).await?;
        let body = non_empty_body(&response)?;
        decode_json(body).map_err(BackendError::MalformedResponse)
    }

    /// Send one request, logging it before and its outcome after.
    async fn send(&self, request: HttpRequest, path: &str) -> Result<HttpResponse, BackendError> {
        let span = backend_request_span(request.method, path);
        async {
            debug!(method = %request.method, url = %request.url, "sending request");
            let response = self.transport.send(request).await?;
            debug!(status = response.status, body = %response.body_text(), "received response");
            Ok::<_, BackendError>(response)
        }
        .instrument(span)
        .await
    }

    fn endpoint(&self, path: &str) -> Result<String, BackendError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&url)
            .map(String::from)
            .map_err(|e| BackendError::InvalidEndpoint(format!("{url}: {e}")))
    }
}

fn non_empty_body(response: &HttpResponse) -> Result<&[u8], BackendError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(BackendError::EmptyResponse);
    }
    Ok(response.body.as_slice())
}

/// Accept a final result value as a document; only objects qualify.
pub fn result_document(value: Value) -> Result<Map<String, Value>, BackendError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(BackendError::UnexpectedShape {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
