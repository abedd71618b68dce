//! Named closure rules
//!
//! A [`Predicate`] lets callers extend a validator with a domain check the
//! built-in rules do not cover while keeping a fixed, deterministic message.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Validate, ValidationError};

/// A rule backed by a closure, with a fixed code and message.
///
/// Cloning is cheap: the closure is shared.
///
/// # Examples
///
/// ```
/// use datanft_validator::foundation::Validate;
/// use datanft_validator::rules::Predicate;
///
/// let lowercase = Predicate::<str>::new("lowercase", "Must be lowercase", |s| {
///     s.chars().all(|c| !c.is_uppercase())
/// });
/// assert!(lowercase.validate("abc").is_ok());
/// assert_eq!(lowercase.validate("aBc").unwrap_err().message, "Must be lowercase");
/// ```
pub struct Predicate<T: ?Sized> {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    check: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Predicate<T> {
    /// Creates a predicate rule.
    pub fn new<F>(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            code: code.into(),
            message: message.into(),
            check: Arc::new(check),
        }
    }

    /// Returns the error code reported on failure.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            code: self.code.clone(),
            message: self.message.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("check", &"<function>")
            .finish()
    }
}

impl<T: ?Sized> Validate for Predicate<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.code.clone(), self.message.clone()))
        }
    }
}
