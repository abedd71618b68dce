//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// Generic over the input type so a rule can only ever be evaluated against
/// a value of its own scalar kind. Implementations must be pure: the same
/// input always yields the same result.
///
/// # Examples
///
/// ```
/// use datanft_validator::foundation::{Validate, ValidationError};
///
/// struct StartsWithErd;
///
/// impl Validate for StartsWithErd {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.starts_with("erd1") {
///             Ok(())
///         } else {
///             Err(ValidationError::new("bech32_prefix", "Address must start with erd1"))
///         }
///     }
/// }
///
/// assert!(StartsWithErd.validate("erd1qqq").is_ok());
/// assert!(StartsWithErd.validate("0x00").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so rules can validate `str` directly.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
