//! Caller-facing publish parameters.

use std::fmt;

use slike_utils::redact_token;

/// Everything a caller supplies to publish one media item.
///
/// The five required fields are plain strings so that an empty value can be
/// reported as a validation error rather than rejected at construction.
/// Optional fields distinguish "not supplied" (`None`) from "supplied empty".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PublishRequest {
    /// Media URL (Google Drive, YouTube, ...).
    pub url: String,
    pub title: String,
    pub description: String,
    /// Source kind understood by the platform, e.g. `gdrive` or `youtube`.
    pub media_type: String,
    /// Production credential.
    pub token: String,
    /// Development credential; required when targeting development.
    pub token_dev: Option<String>,
    /// Raw environment name, parsed case-insensitively during validation.
    pub environment: Option<String>,
    /// Preset metadata identifier.
    pub preset_meta: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Asset kind, e.g. `shorts` or `video`.
    pub asset_type: Option<String>,
    /// Defaults to `true` when unset.
    pub auto_publish: Option<bool>,
}

impl PublishRequest {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        media_type: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
            media_type: media_type.into(),
            token: token.into(),
            ..Default::default()
        }
    }

    pub fn with_token_dev(mut self, token_dev: impl Into<String>) -> Self {
        self.token_dev = Some(token_dev.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn with_preset_meta(mut self, preset_meta: impl Into<String>) -> Self {
        self.preset_meta = Some(preset_meta.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = Some(asset_type.into());
        self
    }

    pub fn with_auto_publish(mut self, auto_publish: bool) -> Self {
        self.auto_publish = Some(auto_publish);
        self
    }

    /// Effective auto-publish flag.
    pub fn auto_publish(&self) -> bool {
        self.auto_publish.unwrap_or(true)
    }
}

impl fmt::Debug for PublishRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishRequest")
            .field("url", &self.url)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("media_type", &self.media_type)
            .field("token", &redact_token(&self.token))
            .field("token_dev", &self.token_dev.as_deref().map(redact_token))
            .field("environment", &self.environment)
            .field("preset_meta", &self.preset_meta)
            .field("tags", &self.tags)
            .field("asset_type", &self.asset_type)
            .field("auto_publish", &self.auto_publish)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_optionals_unset() {
        let req = PublishRequest::new("u", "t", "d", "gdrive", "tok");
        assert_eq!(req.token_dev, None);
        assert_eq!(req.environment, None);
        assert_eq!(req.tags, None);
        assert!(req.auto_publish());
    }

    #[test]
    fn builders_set_fields() {
        let req = PublishRequest::new("u", "t", "d", "youtube", "tok")
            .with_token_dev("dev-tok")
            .with_environment("dev")
            .with_tags(["a", "b"])
            .with_asset_type("shorts")
            .with_preset_meta("nph9gl6gzo")
            .with_auto_publish(false);
        assert_eq!(req.token_dev.as_deref(), Some("dev-tok"));
        assert_eq!(req.environment.as_deref(), Some("dev"));
        assert_eq!(req.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(req.asset_type.as_deref(), Some("shorts"));
        assert_eq!(req.preset_meta.as_deref(), Some("nph9gl6gzo"));
        assert!(!req.auto_publish());
    }

    #[test]
    fn empty_tag_list_is_distinct_from_unset() {
        let req = PublishRequest::new("u", "t", "d", "gdrive", "tok").with_tags(Vec::<String>::new());
        assert_eq!(req.tags, Some(vec![]));
    }

    #[test]
    fn debug_masks_tokens() {
        let req = PublishRequest::new("u", "t", "d", "gdrive", "8b2a3c03-af9a-35d8-ad37-e7b70bfaf367")
            .with_token_dev("dev-secret-token-9911");
        let shown = format!("{req:?}");
        assert!(!shown.contains("8b2a3c03-af9a-35d8-ad37-e7b70bfaf367"));
        assert!(!shown.contains("dev-secret-token-9911"));
        assert!(shown.contains("****f367"));
        assert!(shown.contains("****9911"));
        assert!(shown.contains("gdrive"));
    }
}
