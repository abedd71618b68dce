//! Runtime kinds of dynamic values and the scalar kinds validators accept
//!
//! Request payloads arrive as `serde_json::Value`. Before any rule runs, a
//! validator narrows the candidate to its own scalar kind through
//! [`ScalarKind::extract`]; a candidate of any other kind is rejected with a
//! `type_mismatch` error naming the kind that was actually received.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};
use crate::rules::{NumericRule, StringRule};

// ============================================================================
// VALUE KIND
// ============================================================================

/// The runtime kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Returns the kind of `value`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SCALAR KIND
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

/// Type-level tag selecting a validator's input type and rule set.
///
/// Sealed: the crate ships exactly two kinds, [`Text`] and [`Number`].
pub trait ScalarKind: sealed::Sealed + fmt::Debug + Clone + Send + Sync + 'static {
    /// The borrowed input rules are evaluated against.
    type Input: ?Sized + ToOwned + fmt::Debug;

    /// The rule set of this kind.
    type Rule: Validate<Input = Self::Input> + Clone + fmt::Debug + Send + Sync;

    /// Name used in `type_mismatch` diagnostics.
    const NAME: &'static str;

    /// Narrows a dynamic candidate to this kind.
    fn extract(candidate: &Value) -> Result<Cow<'_, Self::Input>, ValidationError>;

    /// Rejects typed inputs that are not a proper member of the kind.
    fn admit(input: &Self::Input) -> Result<(), ValidationError>;
}

/// String scalar kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

/// Numeric scalar kind (`f64`, NaN excluded).
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl sealed::Sealed for Text {}
impl sealed::Sealed for Number {}

impl ScalarKind for Text {
    type Input = str;
    type Rule = StringRule;

    const NAME: &'static str = "string";

    fn extract(candidate: &Value) -> Result<Cow<'_, str>, ValidationError> {
        match candidate {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            other => Err(ValidationError::type_mismatch(
                Self::NAME,
                ValueKind::of(other).as_str(),
            )),
        }
    }

    #[inline]
    fn admit(_input: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl ScalarKind for Number {
    type Input = f64;
    type Rule = NumericRule;

    const NAME: &'static str = "number";

    fn extract(candidate: &Value) -> Result<Cow<'_, f64>, ValidationError> {
        match candidate {
            Value::Number(n) => {
                let value = n.as_f64().unwrap_or(f64::NAN);
                Self::admit(&value)?;
                Ok(Cow::Owned(value))
            }
            other => Err(ValidationError::type_mismatch(
                Self::NAME,
                ValueKind::of(other).as_str(),
            )),
        }
    }

    fn admit(input: &f64) -> Result<(), ValidationError> {
        if input.is_nan() {
            Err(ValidationError::type_mismatch(Self::NAME, "NaN"))
        } else {
            Ok(())
        }
    }
}
