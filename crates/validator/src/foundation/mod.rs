//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], implemented by every rule
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//! - **Kinds**: [`ScalarKind`] with its two members [`Text`] and [`Number`],
//!   and [`ValueKind`] for reporting what a dynamic candidate actually was
//!
//! Rules are generic over their input type, so a string rule can never be
//! evaluated against a number:
//!
//! ```
//! use datanft_validator::foundation::Validate;
//! use datanft_validator::rules::StringRule;
//!
//! let rule = StringRule::MinLength(3);
//! assert!(rule.validate("abc").is_ok());
//! assert!(rule.validate("ab").is_err());
//! ```

pub mod error;
pub mod kind;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use kind::{Number, ScalarKind, Text, ValueKind};
pub use traits::Validate;

/// Outcome of validating one candidate: the accepted, type-narrowed value or
/// the diagnostic of the first failing check.
pub type ValidationOutcome<T> = Result<T, ValidationError>;
