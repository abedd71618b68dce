//! Basic usage example for datanft-validator

use datanft_validator::prelude::*;
use serde_json::json;

fn main() {
    // Field-level validators, aggregated in one pass
    let token_name = StringValidator::new().alphanumeric().min_length(3).max_length(20);
    let supply = NumericValidator::new().min_value(1.0).max_value(1000.0);

    let name = token_name.validate(&json!("my token"));
    let amount = supply.validate(&json!(5000));

    match validate_results![name, amount] {
        Ok(()) => println!("✓ all fields valid"),
        Err(e) => println!("✗ {e}"),
    }

    // Whole request bags
    let result = validate_specific_params_mint(&json!({
        "_mandatoryParamsList": ["senderAddress", "tokenName"],
        "tokenName": "WEATHER1",
        "royalties": 12.5,
    }));
    println!(
        "\nmint allPassed={} messages={}",
        result.all_passed, result.validation_messages
    );
}
