//! reqwest-backed HTTP transport.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use slike_types::{HttpRequest, HttpResponse, HttpTransport, TransportError, CONTENT_TYPE_JSON};

/// Default total timeout for a publish request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends requests over HTTPS with reqwest. Certificates are always verified.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with the default timeouts.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom total timeout.
    ///
    /// The connect timeout is capped at the total timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
            .build()
            .map_err(|e| TransportError::other(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http_client,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .http_client
            .post(&request.url)
            .header(AUTHORIZATION, request.authorization())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(request.body.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        Ok(HttpResponse { status, body })
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::connect(e.to_string())
    } else {
        TransportError::other(e.to_string())
    }
}
