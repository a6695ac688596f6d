//! slike-publish — publish a media item to Slike from the command line.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use config::FileConfig;
use serde_json::Value;
use slike_publisher::{
    prepare, PublishError, PublishRequest, ReqwestTransport, SlikeApiError, SlikeClient,
};
use slike_utils::redact_token;

#[derive(Parser, Debug)]
#[command(name = "slike-publish", about = "Publish media metadata to the Slike platform")]
struct Cli {
    /// Media URL (Google Drive, YouTube, ...).
    #[arg(long)]
    url: String,

    /// Media title.
    #[arg(long)]
    title: String,

    /// Media description.
    #[arg(long)]
    description: String,

    /// Media type understood by the platform, e.g. "gdrive" or "youtube".
    #[arg(long = "type")]
    media_type: String,

    /// Production authentication token.
    #[arg(long, env = "SLIKE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Development authentication token (required with --environment dev).
    #[arg(long, env = "SLIKE_TOKEN_DEV", hide_env_values = true)]
    token_dev: Option<String>,

    /// Target environment: "production"/"prod" or "development"/"dev".
    /// Production when unset.
    #[arg(long, env = "SLIKE_ENVIRONMENT")]
    environment: Option<String>,

    /// Preset metadata identifier.
    #[arg(long)]
    preset_meta: Option<String>,

    /// Tags (comma-separated: "news,daily").
    #[arg(long, value_delimiter = ',')]
    tags: Option<Vec<String>>,

    /// Asset type, e.g. "shorts" or "video".
    #[arg(long)]
    asset_type: Option<String>,

    /// Publish immediately after registering; overrides `auto_publish = false`
    /// in the config file.
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_auto_publish")]
    auto_publish: bool,

    /// Register the media without publishing it.
    #[arg(long)]
    no_auto_publish: bool,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SLIKE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML file with default values. CLI flags and env vars
    /// override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the request that would be sent and exit.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Merge flags over the file config into a publish request.
    fn to_request(&self, file: &FileConfig) -> PublishRequest {
        PublishRequest {
            url: self.url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            media_type: self.media_type.clone(),
            token: self
                .token
                .clone()
                .or_else(|| file.token.clone())
                .unwrap_or_default(),
            token_dev: self.token_dev.clone().or_else(|| file.token_dev.clone()),
            environment: self.environment.clone().or_else(|| file.environment.clone()),
            preset_meta: self.preset_meta.clone().or_else(|| file.preset_meta.clone()),
            tags: self.tags.clone().or_else(|| file.tags.clone()),
            asset_type: self.asset_type.clone().or_else(|| file.asset_type.clone()),
            auto_publish: match (self.auto_publish, self.no_auto_publish) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => file.auto_publish,
            },
        }
    }
}

const SEPARATOR: &str = "============================================================";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let file = FileConfig::load(cli.config.as_deref())?;

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    slike_utils::init_tracing(&log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let request = cli.to_request(&file);

    if cli.dry_run {
        return Ok(match dry_run(&request) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => report(&e),
        });
    }

    let timeout = cli
        .timeout_secs
        .or(file.timeout_secs)
        .map(Duration::from_secs);
    let transport = match timeout {
        Some(t) => ReqwestTransport::with_timeout(t)?,
        None => ReqwestTransport::new()?,
    };
    let client = SlikeClient::with_transport(transport);

    tracing::info!("Sending request to Slike API...");
    match client.publish_media(&request).await {
        Ok(result) => {
            tracing::info!("{SEPARATOR}");
            tracing::info!("SUCCESS: Media published successfully!");
            tracing::info!("{SEPARATOR}");
            match media_id(&result) {
                Some(id) => tracing::info!("Media ID: {id}"),
                None => tracing::info!("Media ID: Not available in response"),
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(report(&e)),
    }
}

/// Render the request that would be sent, with the credential masked.
fn dry_run(request: &PublishRequest) -> Result<String, PublishError> {
    let http = prepare(request)?;
    let body: Value = serde_json::from_str(&http.body).map_err(SlikeApiError::from)?;
    let pretty = serde_json::to_string_pretty(&body).map_err(SlikeApiError::from)?;
    Ok(format!(
        "POST {}\nAuthorization: Bearer {}\n{pretty}",
        http.url,
        redact_token(&http.bearer_token)
    ))
}

/// Exit status for a failure: 2 for bad input, 1 for anything remote.
fn exit_status(err: &PublishError) -> u8 {
    match err {
        PublishError::Validation(_) => 2,
        PublishError::Api(_) => 1,
    }
}

fn report(err: &PublishError) -> ExitCode {
    let heading = match err {
        PublishError::Validation(_) => "VALIDATION ERROR",
        PublishError::Api(_) => "API ERROR",
    };
    tracing::error!("{SEPARATOR}");
    tracing::error!("{heading}");
    tracing::error!("{SEPARATOR}");
    tracing::error!("Error: {err}");
    ExitCode::from(exit_status(err))
}

fn media_id(result: &Value) -> Option<String> {
    match result.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
