//! The field rule table and its dispatch loop
//!
//! A [`ParamsSchema`] is an ordered table of [`FieldSpec`]s. Evaluation walks
//! the table once; each field is decided on its own and never short-circuits
//! the others:
//!
//! 1. a field is in scope if its key is present or it is listed in
//!    `_mandatoryParamsList`;
//! 2. a field out of scope passes silently;
//! 3. a field in scope runs its [`FieldCheck`] and, on failure, adds one
//!    [`FieldFailure`] to the report.

use serde_json::{Map, Value};

use crate::engine::{NumericValidator, StringValidator};
use crate::foundation::ValueKind;
use crate::params::coerce;
use crate::params::{
    DispatchOptions, FailureReason, FaultPolicy, FieldFailure, FieldFault, ParamsReport,
};

/// Key of the list naming the fields that must be present.
pub const MANDATORY_KEY: &str = "_mandatoryParamsList";

/// A field check that needs more than one failure reason or looks at sibling
/// fields.
pub type CustomCheck = fn(&FieldInput<'_>) -> Result<Option<FailureReason>, FieldFault>;

/// What a field in scope is checked against.
#[derive(Debug, Clone)]
pub enum FieldCheck {
    /// The key must be present.
    Present,
    /// Strict boolean.
    Boolean,
    /// A string, optionally trimmed, passing `validator`.
    Text {
        trim: bool,
        validator: StringValidator,
    },
    /// A JSON number passing the validator.
    Number(NumericValidator),
    /// The leading integer of the value's text form passing the validator.
    LeadingInteger(NumericValidator),
    /// A hand-written check that reports its own reason.
    Custom(CustomCheck),
}

/// The value under check and the request it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    /// Name of the field under check.
    pub field: &'static str,
    /// `None` when the field is absent but mandatory.
    pub value: Option<&'a Value>,
    /// The whole request, for checks that read sibling flags.
    pub params: &'a Map<String, Value>,
}

/// One row of the rule table.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    check: FieldCheck,
    reason: FailureReason,
}

impl FieldSpec {
    /// `reason` is reported when `check` fails; custom checks pick their own.
    pub fn new(name: &'static str, check: FieldCheck, reason: FailureReason) -> Self {
        Self {
            name,
            check,
            reason,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn check(&self) -> &FieldCheck {
        &self.check
    }

    fn evaluate(&self, input: &FieldInput<'_>) -> Result<Option<FailureReason>, FieldFault> {
        let passed = match &self.check {
            FieldCheck::Present => input.value.is_some(),
            FieldCheck::Boolean => matches!(input.value, Some(Value::Bool(_))),
            FieldCheck::Text { trim, validator } => match input.value {
                Some(Value::String(s)) => {
                    let s = if *trim { coerce::trim(s) } else { s.as_str() };
                    validator.check(s).is_ok()
                }
                _ => false,
            },
            FieldCheck::Number(validator) => {
                input.value.is_some_and(|v| validator.validate(v).is_ok())
            }
            FieldCheck::LeadingInteger(validator) => match input.value {
                None => false,
                Some(value) => {
                    let text = coerce::render_text(value)
                        .ok_or(FieldFault::NullNumber { field: self.name })?;
                    coerce::leading_integer(&text).is_some_and(|n| validator.check(&n).is_ok())
                }
            },
            FieldCheck::Custom(check) => return check(input),
        };
        Ok((!passed).then(|| self.reason.clone()))
    }
}

/// An ordered rule table for one kind of request.
#[derive(Debug, Clone)]
pub struct ParamsSchema {
    name: &'static str,
    fields: Vec<FieldSpec>,
    fault_policy: FaultPolicy,
}

impl ParamsSchema {
    /// An empty schema; add rows with [`field`](Self::field).
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            fault_policy: FaultPolicy::default(),
        }
    }

    /// Appends a row; rows are evaluated in insertion order.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn with_fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = policy;
        self
    }

    /// The view-data schema described by `options`.
    pub fn from_options(options: &DispatchOptions) -> Self {
        Self::view_data_with(options.view_data_profile).with_fault_policy(options.fault_policy)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn fault_policy(&self) -> FaultPolicy {
        self.fault_policy
    }

    /// Evaluates a request bag.
    pub fn evaluate(&self, params: &Value) -> ParamsReport {
        let mut report = ParamsReport::new(self.name, self.fault_policy);

        let Some(object) = params.as_object() else {
            let fault = FieldFault::NotAnObject {
                kind: ValueKind::of(params),
            };
            tracing::warn!(schema = self.name, %fault, "params could not be evaluated");
            report.collapse(fault);
            return report;
        };

        for spec in &self.fields {
            match evaluate_field(spec, object) {
                Ok(None) => {}
                Ok(Some(reason)) => report.push(FieldFailure::new(spec.name, reason)),
                Err(fault) => {
                    tracing::warn!(
                        schema = self.name,
                        field = spec.name,
                        policy = ?self.fault_policy,
                        %fault,
                        "internal fault while validating params"
                    );
                    match self.fault_policy {
                        FaultPolicy::Collapse => {
                            report.collapse(fault);
                            return report;
                        }
                        FaultPolicy::Preserve => report.push(FieldFailure::new(
                            spec.name,
                            FailureReason::Fault(fault.to_string()),
                        )),
                    }
                }
            }
        }

        tracing::debug!(
            schema = self.name,
            failures = report.failures().len(),
            "params evaluated"
        );
        report
    }
}

fn evaluate_field(
    spec: &FieldSpec,
    params: &Map<String, Value>,
) -> Result<Option<FailureReason>, FieldFault> {
    let value = params.get(spec.name);
    if value.is_none() && !is_mandatory(params, spec.name)? {
        return Ok(None);
    }
    spec.evaluate(&FieldInput {
        field: spec.name,
        value,
        params,
    })
}

fn is_mandatory(params: &Map<String, Value>, field: &'static str) -> Result<bool, FieldFault> {
    match params.get(MANDATORY_KEY) {
        None => Err(FieldFault::MissingMandatoryList { field }),
        Some(Value::Array(names)) => Ok(names.iter().any(|name| name.as_str() == Some(field))),
        Some(other) => Err(FieldFault::MalformedMandatoryList {
            kind: ValueKind::of(other),
        }),
    }
}
