//! Prelude module for convenient imports.
//!
//! Provides a single `use datanft_validator::prelude::*;` import that brings
//! in the validators, the aggregation helpers and the request dispatchers.
//!
//! # Examples
//!
//! ```rust
//! use datanft_validator::prelude::*;
//!
//! let title = StringValidator::new().not_empty().max_length(60);
//! assert!(title.check_str("Weather data").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, kinds
// ============================================================================

pub use crate::foundation::{
    Number, ScalarKind, Text, Validate, ValidationError, ValidationErrors, ValidationOutcome,
    ValueKind,
};

// ============================================================================
// RULES AND ENGINE
// ============================================================================

pub use crate::engine::{NumericValidator, StringValidator, Validator};
pub use crate::rules::{NumericRule, Predicate, StringRule};

// ============================================================================
// AGGREGATION: function and macro share a name
// ============================================================================

pub use crate::aggregate::{AggregateError, IndexedFailure, Outcome};
pub use crate::validate_results;

// ============================================================================
// PARAMS: request-bag dispatch
// ============================================================================

pub use crate::params::{
    DispatchOptions, FailureReason, FaultPolicy, ParamsReport, ParamsSchema, ParamsValidation,
    ViewDataProfile, validate_specific_params_mint, validate_specific_params_view_data,
    validate_specific_params_view_data_nested,
};
