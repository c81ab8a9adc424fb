//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_empty_document_uses_defaults() {
    tracing::debug!("Loading settings from an empty document");

    let settings = Settings::from_toml("").unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.logging.level, "info");
    assert_eq!(
        settings.validation.inverted_bounds,
        InvertedBoundsPolicy::Reject
    );
}

#[test]
fn test_inverted_bounds_policy_from_toml() {
    let settings = Settings::from_toml(
        r#"
        [validation]
        inverted_bounds = "disable"
        "#,
    )
    .unwrap();

    assert_eq!(
        settings.validation.inverted_bounds,
        InvertedBoundsPolicy::Disable
    );
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn test_logging_level_override() {
    let settings = Settings::from_toml(
        r#"
        [logging]
        level = "tftime_types=trace"
        "#,
    )
    .unwrap();

    assert_eq!(settings.logging.level, "tftime_types=trace");
}

#[test]
fn test_unknown_policy_is_rejected() {
    let result = Settings::from_toml(
        r#"
        [validation]
        inverted_bounds = "sometimes"
        "#,
    );

    assert!(result.is_err());
}

fn settings_from_env(vars: &[(&str, &str)]) -> Result<Settings> {
    let vars = vars
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect::<config::Map<String, String>>();

    Ok(Settings::builder_with_defaults()?
        .add_source(Settings::environment().source(Some(vars)))
        .build()?
        .try_deserialize::<Settings>()?)
}

#[test_log::test]
fn test_environment_overrides_nested_keys() {
    let settings = settings_from_env(&[
        ("TFTIME_VALIDATION__INVERTED_BOUNDS", "disable"),
        ("TFTIME_LOGGING__LEVEL", "debug"),
    ])
    .unwrap();

    assert_eq!(
        settings.validation.inverted_bounds,
        InvertedBoundsPolicy::Disable
    );
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_environment_ignores_other_prefixes() {
    let settings = settings_from_env(&[
        ("OTHER_VALIDATION__INVERTED_BOUNDS", "disable"),
        ("TFTIME_LOGGING__LEVEL", ""),
    ])
    .unwrap();

    assert_eq!(settings, Settings::default());
}
