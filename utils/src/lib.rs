//! Shared utilities for the Slike media publisher.

pub mod logging;
pub mod redact;
pub mod time;

pub use logging::init_tracing;
pub use redact::redact_token;
pub use time::format_elapsed;
