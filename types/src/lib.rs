//! Shared types for the Slike media publisher.
//!
//! This crate defines what every other crate in the workspace agrees on:
//! the caller-facing request, the target environment, the JSON-RPC wire
//! shapes, and the transport seam used to send them.

pub mod environment;
pub mod error;
pub mod request;
pub mod rpc;
pub mod transport;

pub use environment::Environment;
pub use error::{ParseEnvironmentError, TransportError, TransportErrorKind};
pub use request::PublishRequest;
pub use rpc::{
    publish_envelope, JsonRpcErrorObject, JsonRpcRequest, MediaParams, JSONRPC_VERSION,
    PUBLISH_METHOD, PUBLISH_REQUEST_ID,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, CONTENT_TYPE_JSON};
