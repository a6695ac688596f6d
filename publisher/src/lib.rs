//! Slike media publisher — registers media with the Slike platform over JSON-RPC.
//!
//! A publish call is a single round trip:
//! - validate the caller's [`PublishRequest`] (no I/O on failure)
//! - pick the production or development endpoint and matching bearer token
//! - POST a `media.publish` JSON-RPC 2.0 envelope
//! - hand back the `result` member, or a typed [`PublishError`]
//!
//! Nothing is retried and no state is kept between calls.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;
pub mod transport;
pub mod validate;

pub use client::{prepare, SlikeClient};
pub use endpoint::{ResolvedEndpoint, DEVELOPMENT_URL, PRODUCTION_URL};
pub use error::{PublishError, SlikeApiError, ValidationError};
pub use slike_types::{Environment, PublishRequest};
pub use transport::ReqwestTransport;

/// Result of a successful publish: the `result` member of the JSON-RPC reply.
pub type PublishResult = serde_json::Value;

/// Publish one media item using a default reqwest-backed client.
pub async fn publish_media(req: &PublishRequest) -> Result<PublishResult, PublishError> {
    validate::validate(req)?;
    SlikeClient::new()?.publish_media(req).await
}
