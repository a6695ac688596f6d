use proptest::prelude::*;

use slike_types::{publish_envelope, Environment, MediaParams, PublishRequest};

fn case_variants(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    /// Every casing of a development spelling parses to Development.
    #[test]
    fn development_spellings_any_case(
        raw in prop_oneof![case_variants("dev"), case_variants("development")]
    ) {
        prop_assert_eq!(raw.parse::<Environment>().unwrap(), Environment::Development);
    }

    /// Every casing of a production spelling parses to Production.
    #[test]
    fn production_spellings_any_case(
        raw in prop_oneof![case_variants("prod"), case_variants("production")]
    ) {
        prop_assert_eq!(raw.parse::<Environment>().unwrap(), Environment::Production);
    }

    /// Any other non-empty name is rejected.
    #[test]
    fn unknown_names_rejected(raw in "[a-z]{1,12}") {
        let known = ["dev", "development", "prod", "production"];
        prop_assume!(!known.contains(&raw.as_str()));
        prop_assert!(Environment::resolve(Some(&raw)).is_err());
    }

    /// Optional params appear in the payload exactly when supplied.
    #[test]
    fn optional_params_present_iff_supplied(
        tags in prop::option::of(prop::collection::vec("[a-z0-9]{0,8}", 0..4)),
        preset_meta in prop::option::of("[a-z0-9]{0,10}"),
        asset_type in prop::option::of("[a-z]{0,8}"),
        auto_publish in prop::option::of(any::<bool>()),
    ) {
        let req = PublishRequest {
            tags: tags.clone(),
            preset_meta: preset_meta.clone(),
            asset_type: asset_type.clone(),
            auto_publish,
            ..PublishRequest::new("https://example.test/v", "T", "D", "gdrive", "tok")
        };
        let value = serde_json::to_value(publish_envelope(&req)).unwrap();
        let params = value["params"].as_object().unwrap();

        prop_assert_eq!(params.contains_key("tags"), tags.is_some());
        prop_assert_eq!(params.contains_key("preset_meta"), preset_meta.is_some());
        prop_assert_eq!(params.contains_key("asset_type"), asset_type.is_some());
        prop_assert_eq!(&params["auto_publish"], &serde_json::json!(auto_publish.unwrap_or(true)));
        prop_assert!(params.values().all(|v| !v.is_null()));

        let decoded: MediaParams = serde_json::from_value(value["params"].clone()).unwrap();
        prop_assert_eq!(decoded, MediaParams::from(&req));
    }
}
