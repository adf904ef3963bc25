//! `reqwest`-backed [`Transport`].

use async_trait::async_trait;
use bkyc_types::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

use crate::config::ClientConfig;

/// HTTP transport used against the real backend.
///
/// Wraps a `reqwest::Client` configured with the request and connect
/// timeouts from [`ClientConfig`].
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(TransportError::new)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await.map_err(TransportError::new)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(TransportError::new)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
