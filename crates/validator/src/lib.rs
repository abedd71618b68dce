//! # datanft-validator
//!
//! Declarative validation of request parameters for the Data NFT services.
//!
//! ## Quick Start
//!
//! ```rust
//! use datanft_validator::prelude::*;
//! use serde_json::json;
//!
//! let token_name = StringValidator::new().alphanumeric().min_length(3).max_length(20);
//! let supply = NumericValidator::new().min_value(1.0).max_value(1000.0);
//!
//! let name = token_name.validate(&json!("DATANFT1"));
//! let amount = supply.validate(&json!(0));
//!
//! let err = validate_results![name, amount].unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Validation Error: Result at index 1: Value must be at least 1, received 0"
//! );
//! ```
//!
//! ## Layers
//!
//! - [`rules`]: atomic checks ([`StringRule`](rules::StringRule),
//!   [`NumericRule`](rules::NumericRule))
//! - [`engine`]: ordered, short-circuiting [`Validator`](engine::Validator)s
//!   built from rules
//! - [`aggregate`]: combining independent outcomes with
//!   [`validate_results`](aggregate::validate_results)
//! - [`params`]: rule tables for whole request bags (view-data and mint)

// ValidationError is the fundamental error type for all validators;
// outcomes carry it by value.
#![allow(clippy::result_large_err)]

pub mod aggregate;
pub mod engine;
pub mod foundation;
pub mod params;
pub mod prelude;
pub mod rules;

pub use aggregate::{AggregateError, Outcome, validate_results};
pub use engine::{NumericValidator, StringValidator, Validator};
pub use foundation::{ValidationError, ValidationErrors, ValidationOutcome};
pub use params::{
    ParamsValidation, validate_specific_params_mint, validate_specific_params_view_data,
    validate_specific_params_view_data_nested,
};
