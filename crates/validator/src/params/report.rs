//! Structured results of the field-presence dispatcher
//!
//! Failures are kept as `(field, reason)` pairs and only turned into the
//! bracket-delimited message string at the boundary, by
//! [`ParamsReport::validation_messages`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::{ValidationError, ValidationErrors};
use crate::params::{FaultPolicy, FieldFault};

// ============================================================================
// FAILURE REASON
// ============================================================================

/// Why a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
#[non_exhaustive]
pub enum FailureReason {
    MissingValue,
    InvalidSignature,
    NotBoolean,
    InvalidHeaderKeys,
    InvalidHeaderMap,
    MissingBearerAuth,
    ExpiryOutOfRange,
    InvalidOrigins,
    InvalidNestedIndex,
    InvalidTokenName,
    InvalidDatasetTitle,
    InvalidDatasetDescription,
    InvalidRoyalties,
    InvalidSupply,
    InvalidAntiSpamTax,
    /// The field raised an internal fault (only under [`FaultPolicy::Preserve`]).
    Fault(String),
}

impl FailureReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingValue => "missing_value",
            Self::InvalidSignature => "invalid_signature",
            Self::NotBoolean => "not_boolean",
            Self::InvalidHeaderKeys => "invalid_header_keys",
            Self::InvalidHeaderMap => "invalid_header_map",
            Self::MissingBearerAuth => "missing_bearer_auth",
            Self::ExpiryOutOfRange => "expiry_out_of_range",
            Self::InvalidOrigins => "invalid_origins",
            Self::InvalidNestedIndex => "invalid_nested_index",
            Self::InvalidTokenName => "invalid_token_name",
            Self::InvalidDatasetTitle => "invalid_dataset_title",
            Self::InvalidDatasetDescription => "invalid_dataset_description",
            Self::InvalidRoyalties => "invalid_royalties",
            Self::InvalidSupply => "invalid_supply",
            Self::InvalidAntiSpamTax => "invalid_anti_spam_tax",
            Self::Fault(_) => "fault",
        }
    }

    fn requirement(&self) -> &'static str {
        match self {
            Self::MissingValue => "be a valid type",
            Self::InvalidSignature => "be a valid signature type string",
            Self::NotBoolean => "be true or false",
            Self::InvalidHeaderKeys => {
                "be a comma separated lowercase string with no more than 4 items"
            }
            Self::InvalidHeaderMap => "be a object map with maximum 4 items",
            Self::MissingBearerAuth => "contain an authorization key with a Bearer token value",
            Self::ExpiryOutOfRange => "be between min 5 mins (300) and max 3 days (259200)",
            Self::InvalidOrigins => "be a string array of domains with a maximum of 4 items",
            Self::InvalidNestedIndex => "be a non-negative integer",
            Self::InvalidTokenName => "be between 3 and 20 alphanumeric characters",
            Self::InvalidDatasetTitle => "be between 10 and 60 alphanumeric characters",
            Self::InvalidDatasetDescription => "be between 10 and 400 alphanumeric characters",
            Self::InvalidRoyalties => "be a whole number between 0 and 5000",
            Self::InvalidSupply => "be a number between 1 and 1000",
            Self::InvalidAntiSpamTax => "be a number greater than or equal to 0",
            Self::Fault(_) => "",
        }
    }
}

// ============================================================================
// FIELD FAILURE
// ============================================================================

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: &'static str,
    pub reason: FailureReason,
}

impl FieldFailure {
    pub fn new(field: &'static str, reason: FailureReason) -> Self {
        Self { field, reason }
    }

    /// The diagnostic without brackets, e.g. `stream needs to be true or false`.
    pub fn message(&self) -> String {
        match &self.reason {
            FailureReason::Fault(fault) => {
                format!("{} could not be validated: {fault}", self.field)
            }
            reason => format!("{} needs to {}", self.field, reason.requirement()),
        }
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.message())
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// The result of evaluating one request against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsReport {
    schema: &'static str,
    policy: FaultPolicy,
    failures: Vec<FieldFailure>,
    fault: Option<FieldFault>,
}

impl ParamsReport {
    pub(crate) fn new(schema: &'static str, policy: FaultPolicy) -> Self {
        Self {
            schema,
            policy,
            failures: Vec::new(),
            fault: None,
        }
    }

    pub(crate) fn push(&mut self, failure: FieldFailure) {
        self.failures.push(failure);
    }

    /// Ends the report on a fault that replaces every diagnostic.
    pub(crate) fn collapse(&mut self, fault: FieldFault) {
        self.fault = Some(fault);
    }

    /// Name of the schema that produced this report.
    pub fn schema(&self) -> &'static str {
        self.schema
    }

    /// Policy the report was produced under.
    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    /// Field failures in schema order.
    ///
    /// After a collapsing fault this still holds the failures found before
    /// it, although [`validation_messages`](Self::validation_messages) no
    /// longer shows them.
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// The fault that ended evaluation, if any.
    pub fn fault(&self) -> Option<&FieldFault> {
        self.fault.as_ref()
    }

    /// True when every in-scope field passed and no fault occurred.
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty() && self.fault.is_none()
    }

    /// Renders the report: the fault's text alone after a collapsing fault,
    /// otherwise every failure's `[...]` fragment with no separator.
    pub fn validation_messages(&self) -> String {
        match &self.fault {
            Some(fault) => fault.to_string(),
            None => self.failures.iter().map(ToString::to_string).collect(),
        }
    }

    /// One [`ValidationError`] per failure, with the field set.
    pub fn to_validation_errors(&self) -> ValidationErrors {
        let mut errors: ValidationErrors = self
            .failures
            .iter()
            .map(|f| ValidationError::new(f.reason.code(), f.message()).with_field(f.field))
            .collect();
        if let Some(fault) = &self.fault {
            errors.add(ValidationError::new("fault", fault.to_string()));
        }
        errors
    }
}

/// The `{allPassed, validationMessages}` pair returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsValidation {
    pub all_passed: bool,
    pub validation_messages: String,
}

impl From<&ParamsReport> for ParamsValidation {
    fn from(report: &ParamsReport) -> Self {
        Self {
            all_passed: report.all_passed(),
            validation_messages: report.validation_messages(),
        }
    }
}

impl From<ParamsReport> for ParamsValidation {
    fn from(report: ParamsReport) -> Self {
        Self::from(&report)
    }
}
