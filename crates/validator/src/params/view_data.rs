//! Rule table for view-data requests

use serde_json::Value;

use crate::engine::{NumericValidator, StringValidator};
use crate::params::coerce;
use crate::params::schema::{FieldCheck, FieldInput, FieldSpec, ParamsSchema};
use crate::params::{FailureReason, FieldFault, ViewDataProfile};

/// Flag that turns on the bearer-auth requirement for `fwdHeaderMapLookup`.
pub const BEARER_FLAG_KEY: &str = "_fwdHeaderMapLookupMustContainBearerAuthHeader";

const MAX_HEADER_ITEMS: usize = 4;
const MAX_ORIGINS: usize = 4;
const MIN_EXPIRY_SECONDS: f64 = 300.0;
const MAX_EXPIRY_SECONDS: f64 = 259_200.0;

impl ParamsSchema {
    /// The standard view-data schema.
    pub fn view_data() -> Self {
        Self::view_data_with(ViewDataProfile::Standard)
    }

    /// The view-data schema for `profile`.
    pub fn view_data_with(profile: ViewDataProfile) -> Self {
        let schema = Self::new("view_data")
            .field(FieldSpec::new(
                "signedMessage",
                FieldCheck::Text {
                    trim: true,
                    validator: StringValidator::new().min_length(6),
                },
                FailureReason::InvalidSignature,
            ))
            .field(FieldSpec::new(
                "signableMessage",
                FieldCheck::Present,
                FailureReason::MissingValue,
            ))
            .field(FieldSpec::new(
                "stream",
                FieldCheck::Boolean,
                FailureReason::NotBoolean,
            ))
            .field(FieldSpec::new(
                "fwdAllHeaders",
                FieldCheck::Boolean,
                FailureReason::NotBoolean,
            ))
            .field(FieldSpec::new(
                "fwdHeaderKeys",
                FieldCheck::Custom(header_keys),
                FailureReason::InvalidHeaderKeys,
            ))
            .field(FieldSpec::new(
                "fwdHeaderMapLookup",
                FieldCheck::Custom(header_map_lookup),
                FailureReason::InvalidHeaderMap,
            ))
            .field(FieldSpec::new(
                "mvxNativeAuthMaxExpirySeconds",
                FieldCheck::LeadingInteger(
                    NumericValidator::new()
                        .min_value(MIN_EXPIRY_SECONDS)
                        .max_value(MAX_EXPIRY_SECONDS),
                ),
                FailureReason::ExpiryOutOfRange,
            ))
            .field(FieldSpec::new(
                "mvxNativeAuthOrigins",
                FieldCheck::Custom(origins),
                FailureReason::InvalidOrigins,
            ));

        match profile {
            ViewDataProfile::Standard => schema,
            ViewDataProfile::WithNestedStream => schema.field(FieldSpec::new(
                "nestedIdxToStream",
                FieldCheck::LeadingInteger(NumericValidator::new().min_value(0.0)),
                FailureReason::InvalidNestedIndex,
            )),
        }
    }
}

fn header_keys(input: &FieldInput<'_>) -> Result<Option<FailureReason>, FieldFault> {
    let valid = match input.value {
        Some(Value::String(keys)) => {
            !coerce::trim(keys).is_empty() && keys.split(',').count() <= MAX_HEADER_ITEMS
        }
        _ => false,
    };
    Ok((!valid).then_some(FailureReason::InvalidHeaderKeys))
}

fn header_map_lookup(input: &FieldInput<'_>) -> Result<Option<FailureReason>, FieldFault> {
    let Some(Value::Object(map)) = input.value else {
        return Ok(Some(FailureReason::InvalidHeaderMap));
    };
    if map.is_empty() || map.len() > MAX_HEADER_ITEMS {
        return Ok(Some(FailureReason::InvalidHeaderMap));
    }

    let bearer_required = input.params.get(BEARER_FLAG_KEY).is_some_and(coerce::is_truthy);
    if !bearer_required {
        return Ok(None);
    }

    if !map.keys().any(|key| key.eq_ignore_ascii_case("authorization")) {
        return Ok(Some(FailureReason::MissingBearerAuth));
    }
    match map.get("authorization") {
        Some(Value::String(token)) if coerce::trim(token).contains("Bearer ") => Ok(None),
        Some(Value::String(_)) => Ok(Some(FailureReason::MissingBearerAuth)),
        _ => Err(FieldFault::UnreadableAuthorization { field: input.field }),
    }
}

fn origins(input: &FieldInput<'_>) -> Result<Option<FailureReason>, FieldFault> {
    let valid = match input.value {
        Some(Value::Array(items)) => {
            (1..=MAX_ORIGINS).contains(&items.len()) && items.iter().all(Value::is_string)
        }
        _ => false,
    };
    Ok((!valid).then_some(FailureReason::InvalidOrigins))
}
