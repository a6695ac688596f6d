//! Endpoint and credential selection.

use slike_types::Environment;

/// Production JSON-RPC endpoint.
pub const PRODUCTION_URL: &str = "https://b2b.sli.ke/rpc";

/// Development JSON-RPC endpoint.
pub const DEVELOPMENT_URL: &str = "https://local.sli.ke:8443/rpc";

/// The URL a request is sent to and the bearer credential it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub environment: Environment,
    pub url: &'static str,
    pub token: String,
}

/// Base URL for an environment.
pub fn url_for(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => PRODUCTION_URL,
        Environment::Development => DEVELOPMENT_URL,
    }
}
