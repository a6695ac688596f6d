use serde_json::Value;
use slike_types::{ParseEnvironmentError, TransportError};
use thiserror::Error;

/// Either a local validation failure or a failure reported by (or on the way
/// to) the platform.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] SlikeApiError),
}

impl PublishError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn as_api(&self) -> Option<&SlikeApiError> {
        match self {
            Self::Api(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

/// Rejected before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} parameter is required and must be a non-empty string")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidEnvironment(#[from] ParseEnvironmentError),

    #[error("token_dev is required when environment is development")]
    MissingDevToken,
}

/// Failure talking to the Slike JSON-RPC endpoint.
#[derive(Debug, Error)]
pub enum SlikeApiError {
    #[error("HTTP {status}: {}", http_detail(.body))]
    Http { status: u16, body: String },

    #[error("JSON-RPC error: {message}{}", rpc_suffix(.code, .data))]
    Rpc {
        code: Option<i64>,
        message: String,
        data: Option<Value>,
    },

    #[error("invalid JSON-RPC response: {reason}")]
    InvalidResponse { reason: String, body: String },

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to publish media on Slike: {0}")]
    Transport(#[from] TransportError),
}

impl SlikeApiError {
    /// HTTP status for non-2xx responses.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// JSON-RPC error code, when the server supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => *code,
            _ => None,
        }
    }

    /// Best human-readable description of what went wrong.
    pub fn message(&self) -> String {
        match self {
            Self::Http { body, .. } => http_detail(body),
            Self::Rpc { message, .. } => message.clone(),
            Self::InvalidResponse { reason, .. } => reason.clone(),
            Self::Encode(e) => e.to_string(),
            Self::Transport(e) => e.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Pull `message` (top-level or under `error`) out of a JSON error body,
/// falling back to the raw text.
fn http_detail(body: &str) -> String {
    let extracted = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("message")
            .or_else(|| v.get("error").and_then(|e| e.get("message")))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| v.get("error").and_then(Value::as_str).map(str::to_string))
    });
    extracted.unwrap_or_else(|| body.to_string())
}

fn rpc_suffix(code: &Option<i64>, data: &Option<Value>) -> String {
    let mut out = String::new();
    if let Some(code) = code {
        out.push_str(&format!(" (code: {code})"));
    }
    match data {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if s.is_empty() => {}
        Some(Value::String(s)) => out.push_str(&format!(" - {s}")),
        Some(other) => out.push_str(&format!(" - {other}")),
    }
    out
}
