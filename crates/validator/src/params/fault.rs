//! Internal faults of the field-presence dispatcher
//!
//! A fault is not a field failure: it means the request could not be
//! evaluated as given (wrong shape, unreadable value). How a fault affects
//! the report is decided by [`FaultPolicy`].

use serde::{Deserialize, Serialize};

use crate::foundation::ValueKind;

/// The request could not be evaluated as given.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FieldFault {
    /// The request itself is not a JSON object.
    #[error("params must be an object, received {kind}")]
    NotAnObject { kind: ValueKind },

    /// A field is absent and there is no mandatory list to consult.
    #[error("_mandatoryParamsList is missing, cannot tell whether {field} is mandatory")]
    MissingMandatoryList { field: &'static str },

    /// The mandatory list is not an array.
    #[error("_mandatoryParamsList must be an array, received {kind}")]
    MalformedMandatoryList { kind: ValueKind },

    /// An authorization header key matched, but no string value sits under
    /// the literal `authorization` key.
    #[error("{field}.authorization cannot be read as a string")]
    UnreadableAuthorization { field: &'static str },

    /// A field parsed as an integer is `null`, which has no text form.
    #[error("{field} is null and cannot be read as a number")]
    NullNumber { field: &'static str },
}

/// What a fault does to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Stop at the fault. The report fails and its message is the fault's
    /// text alone; fragments collected so far are dropped.
    #[default]
    Collapse,
    /// Record the fault as a failure of the field that raised it and keep
    /// evaluating; every fragment is kept.
    Preserve,
}
