//! Validation as a provider runs it: value type checks first, then any
//! range validators attached to the attribute.

use tftime_core::config::{InvertedBoundsPolicy, Settings};
use tftime_core::validator::{StringRequest, StringResponse, StringValidator};
use tftime_core::{AttributePath, Diagnostics};
use tftime_types::godurationvalidator::{Between, at_least, at_most, between_with_policy};
use tftime_types::{GoDurationValue, Rfc3339Value, TimeDuration};

fn validate(
    value: &GoDurationValue,
    path: &AttributePath,
    validators: &[&dyn StringValidator],
) -> Diagnostics {
    let mut diagnostics = value.validate_attribute(path);
    let request = StringRequest::new(path.clone(), value.string_value().clone());
    for validator in validators {
        let mut response = StringResponse::default();
        validator.validate_string(&request, &mut response);
        diagnostics.extend(response.diagnostics);
    }
    diagnostics
}

#[test_log::test]
fn invalid_format_is_reported_once() {
    let path = AttributePath::root("timeouts").at_name("create");
    let diagnostics = validate(
        &GoDurationValue::new("20 minutes"),
        &path,
        &[&at_least(TimeDuration::from_mins(1))],
    );

    assert_eq!(diagnostics.len(), 1);
    let diag = diagnostics.first().unwrap();
    assert_eq!(diag.summary(), "Invalid Time Duration String Value");
    assert_eq!(diag.path(), Some(&path));
    assert!(diag.detail().contains("Given Value: 20 minutes"));
}

#[test_log::test]
fn range_violations_accumulate() {
    let path = AttributePath::root("retry").at_list_index(0).at_name("delay");
    let diagnostics = validate(
        &GoDurationValue::new("2h"),
        &path,
        &[
            &at_least(TimeDuration::SECOND),
            &at_most(TimeDuration::from_mins(30)),
            &Between::new(TimeDuration::SECOND, TimeDuration::HOUR).unwrap(),
        ],
    );

    let details: Vec<_> = diagnostics.iter().map(|d| d.detail().to_string()).collect();
    assert_eq!(
        details,
        [
            "Attribute retry[0].delay value must be at most 30m0s, got: 2h0m0s",
            "Attribute retry[0].delay value must be between 1s and 1h0m0s, got: 2h0m0s",
        ]
    );
}

#[test]
fn unknown_values_pass_everything() {
    let diagnostics = validate(
        &GoDurationValue::unknown(),
        &AttributePath::root("ttl"),
        &[&at_least(TimeDuration::HOUR)],
    );
    assert!(diagnostics.is_empty());
}

#[test_log::test]
fn inverted_bounds_follow_settings() {
    let settings = Settings::from_toml(
        r#"
        [validation]
        inverted_bounds = "disable"
        "#,
    )
    .unwrap();

    let validator = between_with_policy(
        TimeDuration::HOUR,
        TimeDuration::SECOND,
        settings.validation.inverted_bounds,
    )
    .unwrap();
    assert!(validator.is_none());

    let defaults = Settings::default();
    assert_eq!(defaults.validation.inverted_bounds, InvertedBoundsPolicy::Reject);
    assert!(
        between_with_policy(
            TimeDuration::HOUR,
            TimeDuration::SECOND,
            defaults.validation.inverted_bounds
        )
        .is_err()
    );
}

#[test]
fn diagnostics_serialize_for_hosts() {
    let diagnostics = Rfc3339Value::new("2023-07-25T").validate_attribute(&AttributePath::root("at"));
    let json = serde_json::to_value(&diagnostics).unwrap();

    assert_eq!(json[0]["severity"], "error");
    assert_eq!(json[0]["summary"], "Invalid RFC3339 String Value");
    assert!(
        json[0]["detail"]
            .as_str()
            .unwrap()
            .ends_with("cannot parse \"\" as \"15\"")
    );
}
