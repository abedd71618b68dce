//! Rules: the atomic, immutable checks a validator is built from
//!
//! Each scalar kind has its own tagged set of rules. A rule carries only the
//! data needed to evaluate itself and implements [`Validate`] for its
//! scalar, so it can also be used on its own.
//!
//! [`Validate`]: crate::foundation::Validate

pub mod numeric;
pub mod predicate;
pub mod string;

pub use numeric::NumericRule;
pub use predicate::Predicate;
pub use string::StringRule;
