//! Rule table for mint requests

use std::sync::LazyLock;

use crate::engine::{NumericValidator, StringValidator};
use crate::params::schema::{FieldCheck, FieldSpec, ParamsSchema};
use crate::params::FailureReason;

static ALPHANUMERIC_SPACES_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9\s]+$").unwrap());

fn alphanumeric_with_spaces(min: usize, max: usize) -> StringValidator {
    StringValidator::new()
        .predicate(
            "alphanumeric_spaces",
            "String must contain only letters, digits and whitespace",
            |s| ALPHANUMERIC_SPACES_REGEX.is_match(s),
        )
        .min_length(min)
        .max_length(max)
}

impl ParamsSchema {
    /// The mint schema.
    pub fn mint() -> Self {
        Self::new("mint")
            .field(FieldSpec::new(
                "senderAddress",
                FieldCheck::Present,
                FailureReason::MissingValue,
            ))
            .field(FieldSpec::new(
                "tokenName",
                FieldCheck::Text {
                    trim: true,
                    validator: StringValidator::new()
                        .alphanumeric()
                        .min_length(3)
                        .max_length(20),
                },
                FailureReason::InvalidTokenName,
            ))
            .field(FieldSpec::new(
                "datasetTitle",
                FieldCheck::Text {
                    trim: true,
                    validator: alphanumeric_with_spaces(10, 60),
                },
                FailureReason::InvalidDatasetTitle,
            ))
            .field(FieldSpec::new(
                "datasetDescription",
                FieldCheck::Text {
                    trim: false,
                    validator: alphanumeric_with_spaces(10, 400),
                },
                FailureReason::InvalidDatasetDescription,
            ))
            .field(FieldSpec::new(
                "royalties",
                FieldCheck::Number(
                    NumericValidator::new()
                        .integer()
                        .min_value(0.0)
                        .max_value(5000.0),
                ),
                FailureReason::InvalidRoyalties,
            ))
            .field(FieldSpec::new(
                "supply",
                FieldCheck::Number(NumericValidator::new().min_value(1.0).max_value(1000.0)),
                FailureReason::InvalidSupply,
            ))
            .field(FieldSpec::new(
                "antiSpamTax",
                FieldCheck::Number(NumericValidator::new().min_value(0.0)),
                FailureReason::InvalidAntiSpamTax,
            ))
    }
}
