//! String rules
//!
//! Length is measured in UTF-16 code units, the unit the SDK's consumers
//! (browser wallets, the data marshal) use for string length.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};
use crate::rules::Predicate;

pub(crate) static ALPHANUMERIC_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

/// Length of `input` in UTF-16 code units.
#[inline]
pub(crate) fn utf16_len(input: &str) -> usize {
    input.encode_utf16().count()
}

/// One constraint on a string candidate.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum StringRule {
    /// Candidate must equal the value exactly.
    Equal(String),
    /// Candidate must differ from the value.
    NotEqual(String),
    /// Candidate length must be at least `n`.
    MinLength(usize),
    /// Candidate length must be at most `n`.
    MaxLength(usize),
    /// Candidate must match `^[a-zA-Z0-9]+$`; rejects the empty string.
    Alphanumeric,
    /// Caller-supplied check.
    Predicate(Predicate<str>),
}

impl Validate for StringRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            Self::Equal(expected) => {
                if input == expected {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        "equal",
                        format!("Value must equal '{expected}', received '{input}'"),
                    )
                    .with_param("expected", expected.clone())
                    .with_param("actual", input.to_owned()))
                }
            }
            Self::NotEqual(forbidden) => {
                if input == forbidden {
                    Err(
                        ValidationError::new(
                            "not_equal",
                            format!("Value must not equal '{forbidden}'"),
                        )
                        .with_param("expected", forbidden.clone()),
                    )
                } else {
                    Ok(())
                }
            }
            Self::MinLength(min) => {
                let len = utf16_len(input);
                if len >= *min {
                    Ok(())
                } else {
                    Err(ValidationError::min_length(*min, len))
                }
            }
            Self::MaxLength(max) => {
                let len = utf16_len(input);
                if len <= *max {
                    Ok(())
                } else {
                    Err(ValidationError::max_length(*max, len))
                }
            }
            Self::Alphanumeric => {
                if ALPHANUMERIC_REGEX.is_match(input) {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        "alphanumeric",
                        format!("String must contain only letters and digits, received '{input}'"),
                    )
                    .with_param("actual", input.to_owned()))
                }
            }
            Self::Predicate(predicate) => predicate.validate(input),
        }
    }
}
