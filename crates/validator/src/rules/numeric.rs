//! Numeric rules

use crate::foundation::{Validate, ValidationError};
use crate::rules::Predicate;

/// One constraint on a numeric candidate.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum NumericRule {
    /// Inclusive lower bound.
    MinValue(f64),
    /// Inclusive upper bound.
    MaxValue(f64),
    /// Candidate must have no fractional part (`c % 1 == 0`).
    Integer,
    /// Caller-supplied check.
    Predicate(Predicate<f64>),
}

impl Validate for NumericRule {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        let value = *input;
        match self {
            Self::MinValue(min) => {
                if value >= *min {
                    Ok(())
                } else {
                    Err(ValidationError::min_value(*min, value))
                }
            }
            Self::MaxValue(max) => {
                if value <= *max {
                    Ok(())
                } else {
                    Err(ValidationError::max_value(*max, value))
                }
            }
            Self::Integer => {
                // Infinities yield NaN here and are rejected.
                if value % 1.0 == 0.0 {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        "integer",
                        format!("Value must be an integer, received {value}"),
                    )
                    .with_param("actual", value.to_string()))
                }
            }
            Self::Predicate(predicate) => predicate.validate(input),
        }
    }
}
