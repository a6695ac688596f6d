//! Nullable infrastructure for deterministic testing.
//!
//! The network is abstracted behind [`slike_types::HttpTransport`]. This
//! crate provides a test-friendly implementation that:
//! - Records every request it is handed
//! - Replies from a programmable script
//! - Never touches the network
//!
//! Usage: swap `ReqwestTransport` for `NullTransport` in tests.

pub mod transport;

pub use transport::NullTransport;
