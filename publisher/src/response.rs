//! Turning an HTTP response into a publish result.

use serde_json::Value;
use slike_types::{HttpResponse, JsonRpcErrorObject};

use crate::error::SlikeApiError;

const UNKNOWN_RPC_ERROR: &str = "Unknown JSON-RPC error";

/// Interpret a raw response from the JSON-RPC endpoint.
///
/// On success the `result` member is handed back untouched.
pub fn interpret(response: HttpResponse) -> Result<Value, SlikeApiError> {
    let HttpResponse { status, body } = response;

    if !(200..300).contains(&status) {
        return Err(SlikeApiError::Http { status, body });
    }

    let parsed: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            return Err(SlikeApiError::InvalidResponse {
                reason: format!("unparseable response body: {e}"),
                body,
            })
        }
    };

    let Value::Object(mut envelope) = parsed else {
        return Err(SlikeApiError::InvalidResponse {
            reason: "expected a JSON object".into(),
            body,
        });
    };

    if let Some(error) = envelope.remove("error") {
        if let Some(err) = rpc_error(error) {
            return Err(err);
        }
    }

    match envelope.remove("result") {
        Some(result) => Ok(result),
        None => Err(SlikeApiError::InvalidResponse {
            reason: "response contains neither result nor error".into(),
            body,
        }),
    }
}

/// Map an `error` member to an error, treating empty values as absent.
fn rpc_error(error: Value) -> Option<SlikeApiError> {
    match error {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Object(map) => {
            let obj: JsonRpcErrorObject = match serde_json::from_value(Value::Object(map.clone())) {
                Ok(obj) => obj,
                Err(_) => {
                    return Some(SlikeApiError::Rpc {
                        code: None,
                        message: Value::Object(map).to_string(),
                        data: None,
                    })
                }
            };
            Some(SlikeApiError::Rpc {
                code: obj.code,
                message: obj.message.unwrap_or_else(|| UNKNOWN_RPC_ERROR.to_string()),
                data: obj.data,
            })
        }
        Value::String(s) => Some(SlikeApiError::Rpc {
            code: None,
            message: s,
            data: None,
        }),
        other => Some(SlikeApiError::Rpc {
            code: None,
            message: other.to_string(),
            data: None,
        }),
    }
}
