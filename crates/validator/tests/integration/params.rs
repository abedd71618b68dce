//! Request-bag dispatch for view-data and mint requests.

use datanft_validator::params::{
    DispatchOptions, FailureReason, FaultPolicy, FieldFault, ParamsSchema, ViewDataProfile,
    validate_specific_params_mint, validate_specific_params_view_data,
    validate_specific_params_view_data_nested,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn valid_view_data() -> Value {
    json!({
        "_mandatoryParamsList": ["signedMessage", "signableMessage", "stream"],
        "signedMessage": "0xabcdef0123",
        "signableMessage": {"nonce": 1},
        "stream": true,
        "fwdAllHeaders": false,
        "fwdHeaderKeys": "authorization,x-api-key",
        "fwdHeaderMapLookup": {"authorization": "Bearer token"},
        "_fwdHeaderMapLookupMustContainBearerAuthHeader": true,
        "mvxNativeAuthMaxExpirySeconds": 3600,
        "mvxNativeAuthOrigins": ["https://datadex.io"],
    })
}

fn valid_mint() -> Value {
    json!({
        "_mandatoryParamsList": ["senderAddress", "tokenName", "supply"],
        "senderAddress": "erd1qqqqqqqqqqqqqpgq",
        "tokenName": "WEATHER1",
        "datasetTitle": "Weather data 2024",
        "datasetDescription": "Hourly readings from ten stations",
        "royalties": 500,
        "supply": 100,
        "antiSpamTax": 0,
    })
}

// ============================================================================
// VIEW DATA
// ============================================================================

#[test]
fn valid_view_data_passes() {
    let result = validate_specific_params_view_data(&valid_view_data());
    assert!(result.all_passed);
    assert_eq!(result.validation_messages, "");
}

#[test]
fn view_data_reports_every_failing_field() {
    let mut params = valid_view_data();
    params["stream"] = json!("true");
    params["fwdHeaderKeys"] = json!("a,b,c,d,e");
    params["mvxNativeAuthMaxExpirySeconds"] = json!(60);

    let result = validate_specific_params_view_data(&params);
    insta::assert_json_snapshot!(result, @r#"
    {
      "allPassed": false,
      "validationMessages": "[stream needs to be true or false][fwdHeaderKeys needs to be a comma separated lowercase string with no more than 4 items][mvxNativeAuthMaxExpirySeconds needs to be between min 5 mins (300) and max 3 days (259200)]"
    }
    "#);
}

#[test]
fn absent_mandatory_fields_fail() {
    let result = validate_specific_params_view_data(&json!({
        "_mandatoryParamsList": ["signedMessage", "signableMessage"],
    }));
    assert!(!result.all_passed);
    assert_eq!(
        result.validation_messages,
        "[signedMessage needs to be a valid signature type string][signableMessage needs to be a valid type]"
    );
}

#[test]
fn nested_index_is_checked_only_by_the_nested_profile() {
    let mut params = valid_view_data();
    params["nestedIdxToStream"] = json!("-2");

    assert!(validate_specific_params_view_data(&params).all_passed);

    let nested = validate_specific_params_view_data_nested(&params);
    assert!(!nested.all_passed);
    assert_eq!(
        nested.validation_messages,
        "[nestedIdxToStream needs to be a non-negative integer]"
    );
}

#[rstest]
#[case(json!(0), true)]
#[case(json!("3"), true)]
#[case(json!([2]), true)]
#[case(json!("x"), false)]
#[case(json!({}), false)]
fn nested_index_parses_leading_integer(#[case] value: Value, #[case] valid: bool) {
    let params = json!({"_mandatoryParamsList": [], "nestedIdxToStream": value});
    assert_eq!(validate_specific_params_view_data_nested(&params).all_passed, valid);
}

// ============================================================================
// FAULTS
// ============================================================================

#[test]
fn null_nested_index_collapses_by_default() {
    let params = json!({
        "_mandatoryParamsList": [],
        "stream": 1,
        "nestedIdxToStream": null,
    });
    let result = validate_specific_params_view_data_nested(&params);
    assert!(!result.all_passed);
    assert_eq!(
        result.validation_messages,
        "nestedIdxToStream is null and cannot be read as a number"
    );
}

#[test]
fn preserve_policy_keeps_every_fragment() {
    let options: DispatchOptions = serde_json::from_value(json!({
        "faultPolicy": "preserve",
        "viewDataProfile": "with_nested_stream",
    }))
    .unwrap();
    let schema = ParamsSchema::from_options(&options);

    let report = schema.evaluate(&json!({
        "_mandatoryParamsList": [],
        "stream": 1,
        "nestedIdxToStream": null,
    }));
    assert_eq!(report.policy(), FaultPolicy::Preserve);
    assert!(report.fault().is_none());
    assert_eq!(
        report.validation_messages(),
        "[stream needs to be true or false]\
         [nestedIdxToStream could not be validated: \
         nestedIdxToStream is null and cannot be read as a number]"
    );
}

#[test]
fn missing_mandatory_list_is_a_fault_only_for_absent_fields() {
    let all_present = json!({
        "senderAddress": "erd1",
        "tokenName": "TOKEN",
        "datasetTitle": "Some dataset title",
        "datasetDescription": "Some dataset description",
        "royalties": 0,
        "supply": 1,
        "antiSpamTax": 0,
    });
    assert!(validate_specific_params_mint(&all_present).all_passed);

    let report = ParamsSchema::mint().evaluate(&json!({"tokenName": "TOKEN"}));
    assert_eq!(
        report.fault(),
        Some(&FieldFault::MissingMandatoryList {
            field: "senderAddress"
        })
    );
    assert!(!report.all_passed());
}

#[test]
fn non_object_params_fail() {
    let result = validate_specific_params_mint(&json!("tokenName=abc"));
    assert!(!result.all_passed);
    assert_eq!(
        result.validation_messages,
        "params must be an object, received string"
    );
}

// ============================================================================
// MINT
// ============================================================================

#[test]
fn valid_mint_passes() {
    let result = validate_specific_params_mint(&valid_mint());
    assert!(result.all_passed, "{}", result.validation_messages);
}

#[test]
fn mint_token_name_only() {
    let failing = validate_specific_params_mint(&json!({
        "tokenName": "ab",
        "_mandatoryParamsList": ["tokenName"],
    }));
    assert!(!failing.all_passed);
    assert!(failing.validation_messages.contains("[tokenName needs to"));

    let passing = validate_specific_params_mint(&json!({
        "tokenName": "validName123",
        "_mandatoryParamsList": [],
    }));
    assert!(passing.all_passed);
    assert_eq!(passing.validation_messages, "");
}

#[rstest]
#[case(json!("ab"), false)]
#[case(json!("abc"), true)]
#[case(json!("  abc  "), true)]
#[case(json!("abc def"), false)]
#[case(json!(42), false)]
fn mint_token_name(#[case] token_name: Value, #[case] valid: bool) {
    let mut params = valid_mint();
    params["tokenName"] = token_name;
    let result = validate_specific_params_mint(&params);
    assert_eq!(result.all_passed, valid);
    if !valid {
        assert_eq!(
            result.validation_messages,
            "[tokenName needs to be between 3 and 20 alphanumeric characters]"
        );
    }
}

#[test]
fn mint_numeric_fields_require_json_numbers() {
    let mut params = valid_mint();
    params["royalties"] = json!(2.5);
    params["supply"] = json!("100");
    params["antiSpamTax"] = json!(-1);

    let report = ParamsSchema::mint().evaluate(&params);
    let reasons: Vec<&FailureReason> = report.failures().iter().map(|f| &f.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &FailureReason::InvalidRoyalties,
            &FailureReason::InvalidSupply,
            &FailureReason::InvalidAntiSpamTax,
        ]
    );
}

#[test]
fn evaluation_is_idempotent() {
    let mut params = valid_mint();
    params["supply"] = json!(0);
    let first = validate_specific_params_mint(&params);
    let second = validate_specific_params_mint(&params);
    assert_eq!(first, second);
}

#[test]
fn report_converts_to_validation_errors() {
    let mut params = valid_mint();
    params["supply"] = json!(5000);
    let errors = ParamsSchema::mint().evaluate(&params).to_validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].code, "invalid_supply");
    assert_eq!(
        errors.errors()[0].message,
        "supply needs to be a number between 1 and 1000"
    );
}

#[test]
fn standard_profile_is_the_default() {
    let schema = ParamsSchema::from_options(&DispatchOptions::default());
    assert_eq!(schema.fault_policy(), FaultPolicy::Collapse);
    assert_eq!(schema.fields().len(), 8);
    assert_eq!(
        ParamsSchema::view_data_with(ViewDataProfile::WithNestedStream)
            .fields()
            .len(),
        9
    );
}
