//! Pre-flight checks run before anything touches the network.

use slike_types::{Environment, PublishRequest};

use crate::endpoint::{url_for, ResolvedEndpoint};
use crate::error::ValidationError;

/// Check a request and decide where it goes and which token it carries.
pub fn validate(req: &PublishRequest) -> Result<ResolvedEndpoint, ValidationError> {
    let required = [
        ("url", &req.url),
        ("title", &req.title),
        ("description", &req.description),
        ("media_type", &req.media_type),
        ("token", &req.token),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    let environment = Environment::resolve(req.environment.as_deref())?;

    let token = match environment {
        Environment::Production => req.token.clone(),
        Environment::Development => match req.token_dev.as_deref() {
            Some(dev) if !dev.is_empty() => dev.to_string(),
            _ => return Err(ValidationError::MissingDevToken),
        },
    };

    Ok(ResolvedEndpoint {
        environment,
        url: url_for(environment),
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{DEVELOPMENT_URL, PRODUCTION_URL};

    fn valid() -> PublishRequest {
        PublishRequest::new("https://youtu.be/x", "T", "D", "youtube", "tok")
    }

    #[test]
    fn default_is_production_with_main_token() {
        let ep = validate(&valid()).unwrap();
        assert_eq!(ep.environment, Environment::Production);
        assert_eq!(ep.url, PRODUCTION_URL);
        assert_eq!(ep.token, "tok");
    }

    #[test]
    fn production_ignores_dev_token() {
        let ep = validate(&valid().with_environment("Prod").with_token_dev("dtok")).unwrap();
        assert_eq!(ep.url, PRODUCTION_URL);
        assert_eq!(ep.token, "tok");
    }

    #[test]
    fn development_uses_dev_token() {
        let ep = validate(&valid().with_environment("DEVELOPMENT").with_token_dev("dtok")).unwrap();
        assert_eq!(ep.environment, Environment::Development);
        assert_eq!(ep.url, DEVELOPMENT_URL);
        assert_eq!(ep.token, "dtok");
    }

    #[test]
    fn development_without_dev_token_fails() {
        let err = validate(&valid().with_environment("dev")).unwrap_err();
        assert_eq!(err, ValidationError::MissingDevToken);

        let err = validate(&valid().with_environment("dev").with_token_dev("")).unwrap_err();
        assert_eq!(err, ValidationError::MissingDevToken);
    }

    #[test]
    fn each_required_field_is_checked() {
        let cases: [(&str, fn(&mut PublishRequest)); 5] = [
            ("url", |r| r.url.clear()),
            ("title", |r| r.title.clear()),
            ("description", |r| r.description.clear()),
            ("media_type", |r| r.media_type.clear()),
            ("token", |r| r.token.clear()),
        ];
        for (field, clear) in cases {
            let mut req = valid();
            clear(&mut req);
            assert_eq!(validate(&req).unwrap_err(), ValidationError::MissingField(field));
        }
    }

    #[test]
    fn missing_field_reported_before_bad_environment() {
        let mut req = valid().with_environment("staging");
        req.title.clear();
        assert_eq!(validate(&req).unwrap_err(), ValidationError::MissingField("title"));
    }

    #[test]
    fn unknown_environment_rejected() {
        let err = validate(&valid().with_environment("qa")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEnvironment(_)));
        assert!(err.to_string().contains("'qa'"));
    }
}
