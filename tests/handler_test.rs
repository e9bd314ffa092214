//! Invocation contract tests
//!
//! Drive the handler through the same JSON envelope the hosting platform uses.

use is_positive::types::{InvocationEvent, InvocationResponse};
use is_positive::{handle, Error};
use serde_json::json;

fn invoke(payload: serde_json::Value) -> is_positive::Result<InvocationResponse> {
    let event: InvocationEvent = serde_json::from_value(payload).unwrap();
    handle(&event)
}

fn invoke_number(number: &str) -> is_positive::Result<InvocationResponse> {
    invoke(json!({ "queryStringParameters": { "number": number } }))
}

#[test]
fn positive_numbers_report_positive() {
    for n in [1i64, 5, 42, 1_000_000, i64::MAX] {
        let response = invoke_number(&n.to_string()).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "Number is positive", "n = {n}");
    }
}

#[test]
fn zero_and_negative_numbers_report_negative() {
    for n in [0i64, -1, -3, -987_654, i64::MIN] {
        let response = invoke_number(&n.to_string()).unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "Number is negative", "n = {n}");
    }
}

#[test]
fn integers_beyond_machine_width_are_accepted() {
    let big = format!("{}0", u128::MAX);
    assert_eq!(invoke_number(&big).unwrap().body, "Number is positive");
    assert_eq!(
        invoke_number(&format!("-{big}")).unwrap().body,
        "Number is negative"
    );
}

#[test]
fn repeated_invocations_are_identical() {
    let first = invoke_number("17").unwrap();
    let second = invoke_number("17").unwrap();
    assert_eq!(first, second);
}

#[test]
fn response_serializes_to_platform_shape() {
    let response = invoke_number("42").unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "statusCode": 200, "body": "Number is positive" })
    );
}

#[test]
fn extra_event_fields_are_ignored() {
    let response = invoke(json!({
        "httpMethod": "GET",
        "path": "/is-positive",
        "queryStringParameters": { "number": "-2", "other": "x" }
    }))
    .unwrap();
    assert_eq!(response.body, "Number is negative");
}

#[test]
fn non_integer_number_is_a_fault() {
    for raw in ["foo", "abc", "1.5", ""] {
        let err = invoke_number(raw).unwrap_err();
        assert!(
            matches!(err, Error::InvalidInteger { .. }),
            "expected invalid integer for {raw:?}, got {err:?}"
        );
    }
}

#[test]
fn missing_number_is_a_fault() {
    let cases = [
        json!({ "queryStringParameters": { "other": "1" } }),
        json!({ "queryStringParameters": null }),
        json!({}),
    ];

    for payload in cases {
        let err = invoke(payload).unwrap_err();
        assert!(matches!(err, Error::MissingParameter(_)), "got {err:?}");
    }
}
