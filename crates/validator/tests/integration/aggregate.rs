//! Aggregating independent outcomes.

use datanft_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn every_failure_is_reported_in_input_order() {
    let token_name = StringValidator::new().alphanumeric().validate(&json!("my token"));
    let supply = NumericValidator::new().min_value(1.0).validate(&json!(0));
    let title = StringValidator::new().not_empty().validate(&json!("Weather"));

    let err = validate_results![token_name, supply, title].unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r"
    Validation Error: Result at index 0: String must contain only letters and digits, received 'my token'
    Result at index 1: Value must be at least 1, received 0
    ");
    assert_eq!(err.len(), 2);
}

#[test]
fn passing_outcomes_keep_their_values() {
    let token_name = StringValidator::new().min_length(3).validate(&json!("DATA"));
    let royalties = NumericValidator::new().integer().validate(&json!(250));

    assert!(validate_results![token_name, royalties].is_ok());
    assert_eq!(token_name.unwrap(), "DATA");
    assert_eq!(royalties.unwrap(), 250.0);
}

#[test]
fn empty_input_succeeds() {
    assert!(validate_results![].is_ok());
    assert!(validate_results(Vec::<ValidationOutcome<String>>::new()).is_ok());
}

#[test]
fn homogeneous_outcomes_through_the_function() {
    let validator = NumericValidator::new().max_value(1000.0);
    let outcomes: Vec<_> = [1.0, 1001.0, 5.0, 2000.0]
        .iter()
        .map(|n| validator.check(n))
        .collect();

    let err = validate_results(&outcomes).unwrap_err();
    let indices: Vec<usize> = err.failures().iter().map(|f| f.index).collect();
    assert_eq!(indices, vec![1, 3]);
}

#[test]
fn aggregate_converts_to_validation_errors() {
    let a: ValidationOutcome<()> = Err(ValidationError::new("custom", "first"));
    let b: ValidationOutcome<()> = Ok(());
    let errors: ValidationErrors = validate_results![a, b].unwrap_err().into();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].code, "custom");
    assert_eq!(errors.errors()[0].field.as_deref(), Some("index[0]"));
}
