//! Rule engine behavior through the public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use datanft_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

// ============================================================================
// SHORT-CIRCUIT
// ============================================================================

#[test]
fn rules_after_first_failure_are_not_evaluated() {
    let calls = Arc::new(AtomicUsize::new(0));
    let spy = Arc::clone(&calls);
    let validator = StringValidator::new().min_length(5).predicate(
        "spy",
        "never reached",
        move |_| {
            spy.fetch_add(1, Ordering::SeqCst);
            true
        },
    );

    let err = validator.validate(&json!("abc")).unwrap_err();
    assert_eq!(err.code, "min_length");
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert!(validator.validate(&json!("abcdef")).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn predicate_failure_keeps_its_code_and_message() {
    let validator = StringValidator::new().predicate("erd_prefix", "Address must start with erd1", |s| {
        s.starts_with("erd1")
    });
    let err = validator.validate(&json!("0x1234")).unwrap_err();
    assert_eq!(err.code, "erd_prefix");
    assert_eq!(err.message, "Address must start with erd1");
}

#[test]
fn predicate_without_code_or_message_still_has_a_message() {
    let validator = StringValidator::new().predicate("", "", |_| false);
    let err = validator.validate(&json!("x")).unwrap_err();
    assert!(!err.message.is_empty());
    assert_eq!(err.message, "Validation failed");
}

// ============================================================================
// KIND MISMATCH
// ============================================================================

#[rstest]
#[case(json!(1), "Expected a string, received number")]
#[case(json!(null), "Expected a string, received null")]
#[case(json!(["a"]), "Expected a string, received array")]
#[case(json!({"a": 1}), "Expected a string, received object")]
#[case(json!(true), "Expected a string, received boolean")]
fn string_validator_rejects_other_kinds(#[case] candidate: Value, #[case] message: &str) {
    let err = StringValidator::new().validate(&candidate).unwrap_err();
    assert_eq!(err.code, "type_mismatch");
    assert_eq!(err.message, message);
}

#[test]
fn numeric_validator_rejects_numeric_strings() {
    let err = NumericValidator::new().validate(&json!("42")).unwrap_err();
    assert_eq!(err.message, "Expected a number, received string");
}

// ============================================================================
// STRING RULES
// ============================================================================

#[test]
fn not_empty_rejects_only_the_empty_string() {
    let validator = StringValidator::new().not_empty();
    let err = validator.validate(&json!("")).unwrap_err();
    assert_eq!(
        err.message,
        "String must be at least 1 characters long, received 0"
    );
    assert_eq!(validator.validate(&json!(" ")).unwrap(), " ");
}

#[rstest]
#[case("abc123", true)]
#[case("ABC", true)]
#[case("", false)]
#[case("has space", false)]
#[case("dash-ed", false)]
#[case("ümlaut", false)]
fn alphanumeric_is_ascii_only(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(StringValidator::new().alphanumeric().validate(&json!(input)).is_ok(), valid);
}

#[test]
fn length_counts_utf16_units() {
    let validator = StringValidator::new().max_length(2);
    // One astral code point is two UTF-16 units.
    assert!(validator.validate(&json!("😀")).is_ok());
    let err = validator.validate(&json!("a😀")).unwrap_err();
    assert_eq!(err.message, "String must be at most 2 characters long, received 3");
}

#[test]
fn equality_rules() {
    let err = StringValidator::new().equals("mint").validate(&json!("burn")).unwrap_err();
    assert_eq!(err.message, "Value must equal 'mint', received 'burn'");

    let err = StringValidator::new().not_equals("admin").validate(&json!("admin")).unwrap_err();
    assert_eq!(err.message, "Value must not equal 'admin'");
}

// ============================================================================
// NUMERIC RULES
// ============================================================================

#[rstest]
#[case(json!(5), "Value must be at least 10, received 5")]
#[case(json!(25.5), "Value must be at most 20, received 25.5")]
fn bounds_report_limit_and_value(#[case] candidate: Value, #[case] message: &str) {
    let validator = NumericValidator::new().min_value(10.0).max_value(20.0);
    assert_eq!(validator.validate(&candidate).unwrap_err().message, message);
}

#[test]
fn value_within_bounds_is_returned() {
    let validator = NumericValidator::new().min_value(10.0).max_value(20.0);
    assert_eq!(validator.validate(&json!(15)).unwrap(), 15.0);
}

#[test]
fn bounds_are_inclusive() {
    let validator = NumericValidator::new().min_value(10.0).max_value(20.0);
    assert_eq!(validator.validate(&json!(10)).unwrap(), 10.0);
    assert_eq!(validator.validate(&json!(20)).unwrap(), 20.0);
}

#[rstest]
#[case(json!(3), true)]
#[case(json!(-3), true)]
#[case(json!(3.0), true)]
#[case(json!(3.5), false)]
fn integer_rule(#[case] candidate: Value, #[case] valid: bool) {
    assert_eq!(NumericValidator::new().integer().validate(&candidate).is_ok(), valid);
}

#[test]
fn integer_failure_message() {
    let err = NumericValidator::new().integer().validate(&json!(4.5)).unwrap_err();
    assert_eq!(err.message, "Value must be an integer, received 4.5");
}

// ============================================================================
// REUSE
// ============================================================================

#[test]
fn repeated_validation_gives_identical_outcomes() {
    let validator = StringValidator::new().alphanumeric().max_length(8);
    let a = json!("abc 123");
    let b = json!("abc123");

    let first = validator.validate(&a);
    let other = validator.validate(&b);
    let third = validator.validate(&a);
    assert_eq!(first, third);
    assert_eq!(other.unwrap(), "abc123");
}

#[test]
fn validators_are_reusable_and_shareable() {
    let validator = Arc::new(NumericValidator::new().min_value(1.0).max_value(1000.0));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = Arc::clone(&validator);
            std::thread::spawn(move || validator.validate(&json!(i * 500)).is_ok())
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, false]);
}
