//! Optional TOML defaults for the command-line publisher.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Defaults read from `--config`. Every field is optional; flags and
/// environment variables override whatever is set here.
///
/// ```toml
/// token = "8b2a3c03-..."
/// environment = "prod"
/// asset_type = "shorts"
/// tags = ["news", "daily"]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub token: Option<String>,
    pub token_dev: Option<String>,
    pub environment: Option<String>,
    pub preset_meta: Option<String>,
    pub asset_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub auto_publish: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load `path`, or return an empty config when no path was given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
