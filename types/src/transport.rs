//! The seam between request construction and the network.

use std::fmt;
use std::future::Future;

use slike_utils::redact_token;

use crate::error::TransportError;

/// `Content-Type` of every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A fully-resolved POST: target, credential and serialized JSON body.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub bearer_token: String,
    pub body: String,
}

impl HttpRequest {
    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRequest")
            .field("url", &self.url)
            .field("bearer_token", &redact_token(&self.bearer_token))
            .field("body", &self.body)
            .finish()
    }
}

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and reports what came back.
///
/// Implementations perform exactly one attempt; they must not retry.
pub trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
