//! JSON-RPC 2.0 wire shapes used by the publish call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::request::PublishRequest;

/// Protocol version tag carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Remote method that registers a media item.
pub const PUBLISH_METHOD: &str = "media.publish";

/// Request id sent with every publish call. The platform does not correlate
/// ids, so a constant is used.
pub const PUBLISH_REQUEST_ID: u64 = 17;

/// Outgoing JSON-RPC request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JsonRpcRequest<P> {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: P,
    pub id: u64,
}

impl<P> JsonRpcRequest<P> {
    pub fn new(method: &'static str, params: P, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
        }
    }
}

/// The `params` object of a `media.publish` call.
///
/// Optional members are skipped entirely when the caller did not supply
/// them; `auto_publish` is always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaParams {
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_meta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    pub auto_publish: bool,
}

impl From<&PublishRequest> for MediaParams {
    fn from(req: &PublishRequest) -> Self {
        Self {
            url: req.url.clone(),
            title: req.title.clone(),
            description: req.description.clone(),
            media_type: req.media_type.clone(),
            tags: req.tags.clone(),
            preset_meta: req.preset_meta.clone(),
            asset_type: req.asset_type.clone(),
            auto_publish: req.auto_publish(),
        }
    }
}

/// Build the complete `media.publish` envelope for a request.
pub fn publish_envelope(req: &PublishRequest) -> JsonRpcRequest<MediaParams> {
    JsonRpcRequest::new(PUBLISH_METHOD, MediaParams::from(req), PUBLISH_REQUEST_ID)
}

/// A JSON-RPC error object.
///
/// Members are defaulted so that servers which omit `code` or `message`
/// still produce a usable error.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JsonRpcErrorObject {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}
