//! Nullable transport — record requests without sending them.

use std::collections::VecDeque;
use std::sync::Mutex;

use slike_types::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Reply used when nothing has been scripted.
pub const DEFAULT_REPLY: &str = r#"{"jsonrpc":"2.0","result":{},"id":17}"#;

/// A test transport that records requests instead of sending them.
///
/// Replies are consumed in FIFO order; once the script runs out every
/// request gets `200` with [`DEFAULT_REPLY`].
pub struct NullTransport {
    sent: Mutex<Vec<HttpRequest>>,
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a `200` reply with the given JSON.
    pub fn respond_json(&self, body: serde_json::Value) -> &Self {
        self.push(Ok(HttpResponse::new(200, body.to_string())))
    }

    /// Queue a reply with an arbitrary status and raw body.
    pub fn respond_raw(&self, status: u16, body: impl Into<String>) -> &Self {
        self.push(Ok(HttpResponse::new(status, body)))
    }

    /// Queue a bare status reply with an empty body.
    pub fn respond_status(&self, status: u16) -> &Self {
        self.respond_raw(status, "")
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: TransportError) -> &Self {
        self.push(Err(error))
    }

    /// All requests "sent" so far (for assertions).
    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// The most recent request, if any.
    pub fn last(&self) -> Option<HttpRequest> {
        self.sent().pop()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Clear recorded requests and the reply script.
    pub fn reset(&self) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.clear();
        }
        if let Ok(mut script) = self.script.lock() {
            script.clear();
        }
    }

    fn push(&self, reply: Result<HttpResponse, TransportError>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(reply);
        }
        self
    }

    fn next_reply(&self) -> Result<HttpResponse, TransportError> {
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Ok(HttpResponse::new(200, DEFAULT_REPLY)))
    }
}

impl Default for NullTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for NullTransport {
    async fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(request.clone());
        }
        self.next_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> HttpRequest {
        HttpRequest {
            url: "https://b2b.sli.ke/rpc".into(),
            bearer_token: "tok".into(),
            body: "{}".into(),
        }
    }

    #[tokio::test]
    async fn records_and_replays_in_order() {
        let transport = NullTransport::new();
        transport
            .respond_json(json!({"result": 1}))
            .respond_status(503)
            .fail(TransportError::connect("refused"));

        let first = transport.post_json(&request()).await.unwrap();
        assert_eq!(first.status, 200);
        assert_eq!(first.body, r#"{"result":1}"#);
        assert_eq!(transport.post_json(&request()).await.unwrap().status, 503);
        assert!(transport.post_json(&request()).await.unwrap_err().is_connect());

        assert_eq!(transport.sent_count(), 3);
        assert_eq!(transport.last(), Some(request()));
    }

    #[tokio::test]
    async fn default_reply_when_unscripted() {
        let transport = NullTransport::new();
        let reply = transport.post_json(&request()).await.unwrap();
        assert_eq!(reply, HttpResponse::new(200, DEFAULT_REPLY));
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let transport = NullTransport::new();
        transport.respond_status(500);
        transport.post_json(&request()).await.unwrap();
        transport.respond_status(500);
        transport.reset();
        assert_eq!(transport.sent_count(), 0);
        assert_eq!(transport.post_json(&request()).await.unwrap().status, 200);
    }
}
