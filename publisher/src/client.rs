//! Publishing client for the Slike JSON-RPC endpoint.

use std::time::Instant;

use serde_json::Value;
use slike_types::{publish_envelope, HttpRequest, HttpTransport, PublishRequest};
use slike_utils::{format_elapsed, redact_token};
use tracing::{debug, info, warn};

use crate::error::{PublishError, SlikeApiError};
use crate::response::interpret;
use crate::transport::ReqwestTransport;
use crate::validate::validate;

/// Publishes media metadata through an [`HttpTransport`].
///
/// Holds no per-call state; a single client may serve concurrent calls.
#[derive(Clone)]
pub struct SlikeClient<T = ReqwestTransport> {
    transport: T,
}

impl SlikeClient<ReqwestTransport> {
    /// Client backed by reqwest with the default timeouts.
    pub fn new() -> Result<Self, PublishError> {
        let transport = ReqwestTransport::new().map_err(SlikeApiError::from)?;
        Ok(Self { transport })
    }
}

impl<T: HttpTransport> SlikeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate, build the `media.publish` call, send it once and return
    /// the `result` member of the reply.
    ///
    /// Nothing is sent when validation fails.
    pub async fn publish_media(&self, req: &PublishRequest) -> Result<Value, PublishError> {
        let request = prepare(req)?;
        info!(url = %request.url, "publishing media on Slike");

        let started = Instant::now();
        let response = match self.transport.post_json(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %request.url, error = %e, "Slike request failed");
                return Err(SlikeApiError::from(e).into());
            }
        };
        debug!(
            status = response.status,
            elapsed = %format_elapsed(started.elapsed()),
            "Slike responded"
        );

        match interpret(response) {
            Ok(result) => {
                info!("media published");
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "Slike rejected publish request");
                Err(e.into())
            }
        }
    }
}

/// Validate a request and render the exact HTTP request that would be sent.
pub fn prepare(req: &PublishRequest) -> Result<HttpRequest, PublishError> {
    let endpoint = validate(req)?;
    let envelope = publish_envelope(req);
    let body = serde_json::to_string(&envelope).map_err(SlikeApiError::from)?;
    debug!(
        environment = %endpoint.environment,
        token = %redact_token(&endpoint.token),
        payload = %body,
        "built media.publish request"
    );
    Ok(HttpRequest {
        url: endpoint.url.to_string(),
        bearer_token: endpoint.token,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{DEVELOPMENT_URL, PRODUCTION_URL};

    #[test]
    fn prepare_targets_production_by_default() {
        let req = PublishRequest::new("https://drive.google.com/x", "T", "D", "gdrive", "tok");
        let http = prepare(&req).unwrap();
        assert_eq!(http.url, PRODUCTION_URL);
        assert_eq!(http.authorization(), "Bearer tok");
        let body: Value = serde_json::from_str(&http.body).unwrap();
        assert_eq!(body["method"], "media.publish");
        assert_eq!(body["params"]["type"], "gdrive");
    }

    #[test]
    fn prepare_targets_development() {
        let req = PublishRequest::new("u", "T", "D", "gdrive", "tok")
            .with_environment("Dev")
            .with_token_dev("dtok");
        let http = prepare(&req).unwrap();
        assert_eq!(http.url, DEVELOPMENT_URL);
        assert_eq!(http.bearer_token, "dtok");
    }

    #[test]
    fn prepare_rejects_invalid_input() {
        let req = PublishRequest::new("", "T", "D", "gdrive", "tok");
        assert!(prepare(&req).unwrap_err().is_validation());
    }

    #[test]
    fn default_client_builds() {
        let client = SlikeClient::new().unwrap();
        assert_eq!(client.transport().timeout(), crate::transport::DEFAULT_TIMEOUT);
    }
}
