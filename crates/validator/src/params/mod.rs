//! Field-presence dispatcher for request bags
//!
//! A request bag is a JSON object of optional fields plus a
//! `_mandatoryParamsList` naming the fields that must be present. Each
//! request kind has a [`ParamsSchema`] (a rule table); evaluating a bag
//! produces a [`ParamsReport`] that renders to the `{allPassed,
//! validationMessages}` pair API callers receive.
//!
//! ```
//! use datanft_validator::params::validate_specific_params_mint;
//! use serde_json::json;
//!
//! let result = validate_specific_params_mint(&json!({
//!     "_mandatoryParamsList": ["tokenName"],
//!     "tokenName": "ab",
//! }));
//! assert!(!result.all_passed);
//! assert_eq!(
//!     result.validation_messages,
//!     "[tokenName needs to be between 3 and 20 alphanumeric characters]"
//! );
//! ```

mod coerce;
pub mod fault;
pub mod mint;
pub mod options;
pub mod report;
pub mod schema;
pub mod view_data;

use std::sync::LazyLock;

use serde_json::Value;

pub use fault::{FaultPolicy, FieldFault};
pub use options::{DispatchOptions, ViewDataProfile};
pub use report::{FailureReason, FieldFailure, ParamsReport, ParamsValidation};
pub use schema::{CustomCheck, FieldCheck, FieldInput, FieldSpec, MANDATORY_KEY, ParamsSchema};

static VIEW_DATA: LazyLock<ParamsSchema> = LazyLock::new(ParamsSchema::view_data);

static VIEW_DATA_NESTED: LazyLock<ParamsSchema> =
    LazyLock::new(|| ParamsSchema::view_data_with(ViewDataProfile::WithNestedStream));

static MINT: LazyLock<ParamsSchema> = LazyLock::new(ParamsSchema::mint);

/// Validates a view-data request with the standard field set.
pub fn validate_specific_params_view_data(params: &Value) -> ParamsValidation {
    VIEW_DATA.evaluate(params).into()
}

/// Validates a view-data request including `nestedIdxToStream`.
pub fn validate_specific_params_view_data_nested(params: &Value) -> ParamsValidation {
    VIEW_DATA_NESTED.evaluate(params).into()
}

/// Validates a mint request.
pub fn validate_specific_params_mint(params: &Value) -> ParamsValidation {
    MINT.evaluate(params).into()
}
