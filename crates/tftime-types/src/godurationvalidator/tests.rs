use tftime_core::AttributePath;
use tftime_core::config::InvertedBoundsPolicy;
use tftime_core::error::CoreError;
use tftime_core::validator::{StringRequest, StringResponse, StringValidator};
use tftime_core::StringValue;

use super::*;
use crate::error::TypesError;
use crate::value::GoDurationValue;

fn run(validator: &dyn StringValidator, value: StringValue) -> StringResponse {
    let request = StringRequest::new(AttributePath::root("test"), value);
    let mut response = StringResponse::default();
    validator.validate_string(&request, &mut response);
    response
}

fn secs(n: i64) -> TimeDuration {
    TimeDuration::from_secs(n)
}

fn go(n: i64) -> StringValue {
    GoDurationValue::from_duration(secs(n)).string_value().clone()
}

#[test_log::test]
fn at_least_bounds() {
    let validator = at_least(secs(1));
    let cases = [
        (StringValue::unknown(), false),
        (StringValue::null(), false),
        (go(2), false),
        (go(1), false),
        (go(0), true),
    ];

    for (value, expect_error) in cases {
        let response = run(&validator, value.clone());
        assert_eq!(response.diagnostics.has_error(), expect_error, "{value}");
    }
}

#[test_log::test]
fn at_most_bounds() {
    let validator = at_most(secs(2));
    let cases = [
        (StringValue::unknown(), false),
        (StringValue::null(), false),
        (go(1), false),
        (go(2), false),
        (go(4), true),
    ];

    for (value, expect_error) in cases {
        let response = run(&validator, value.clone());
        assert_eq!(response.diagnostics.has_error(), expect_error, "{value}");
    }
}

#[test_log::test]
fn between_bounds_are_inclusive() {
    let validator = Between::new(secs(5), secs(60)).unwrap();
    let cases = [
        (StringValue::unknown(), false),
        (StringValue::null(), false),
        (go(5), false),
        (go(30), false),
        (go(60), false),
        (go(4), true),
        (go(61), true),
    ];

    for (value, expect_error) in cases {
        let response = run(&validator, value.clone());
        assert_eq!(response.diagnostics.has_error(), expect_error, "{value}");
    }
}

#[test]
fn unparseable_values_are_skipped() {
    for validator in [
        &at_least(secs(1)) as &dyn StringValidator,
        &at_most(secs(1)),
        &Between::new(secs(1), secs(2)).unwrap(),
    ] {
        assert!(run(validator, StringValue::new("nope")).diagnostics.is_empty());
    }
}

#[test]
fn violation_reports_canonical_value() {
    let response = run(&at_least(secs(1)), StringValue::new("0.5s"));
    let diag = response.diagnostics.first().unwrap();

    assert_eq!(diag.summary(), "Invalid Attribute Value");
    assert_eq!(
        diag.detail(),
        "Attribute test value must be at least 1s, got: 500ms"
    );
    assert_eq!(diag.path(), Some(&AttributePath::root("test")));

    let response = run(&at_most(TimeDuration::from_mins(90)), StringValue::new("2h"));
    assert_eq!(
        response.diagnostics.first().unwrap().detail(),
        "Attribute test value must be at most 1h30m0s, got: 2h0m0s"
    );
}

#[test]
fn descriptions() {
    let between = Between::new(secs(5), secs(60)).unwrap();
    assert_eq!(between.description(), "value must be between 5s and 1m0s");
    assert_eq!(between.markdown_description(), between.description());
    assert_eq!(at_least(secs(1)).description(), "value must be at least 1s");
    assert_eq!(at_most(secs(2)).description(), "value must be at most 2s");
}

#[test]
fn between_rejects_inverted_bounds() {
    let err = Between::new(secs(10), secs(1)).unwrap_err();
    assert!(matches!(
        err,
        TypesError::CoreError(CoreError::InvalidConfiguration(_))
    ));

    assert!(between_with_policy(secs(10), secs(1), InvertedBoundsPolicy::Reject).is_err());
}

#[test_log::test]
fn between_policy_can_disable_validation() {
    assert_eq!(
        between_with_policy(secs(10), secs(1), InvertedBoundsPolicy::Disable).unwrap(),
        None
    );
    assert_eq!(
        between_with_policy(secs(1), secs(10), InvertedBoundsPolicy::Disable).unwrap(),
        Some(Between::new(secs(1), secs(10)).unwrap())
    );
}

#[test]
fn equal_bounds_accept_exact_value() {
    let validator = Between::new(secs(3), secs(3)).unwrap();
    assert!(run(&validator, go(3)).diagnostics.is_empty());
    assert!(run(&validator, StringValue::new("3001ms")).diagnostics.has_error());
}
