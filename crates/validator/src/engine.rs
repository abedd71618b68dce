//! The rule engine
//!
//! A [`Validator`] owns an ordered list of rules for one scalar kind. Rules
//! are appended through chainable builder methods and evaluated in insertion
//! order; evaluation stops at the first failing rule, whose error is
//! returned unchanged.
//!
//! ```
//! use datanft_validator::engine::{NumericValidator, StringValidator};
//! use serde_json::json;
//!
//! let token = StringValidator::new().alphanumeric().min_length(3).max_length(20);
//! assert_eq!(token.validate(&json!("DATANFT1")).unwrap(), "DATANFT1");
//! assert!(token.validate(&json!("ab")).is_err());
//!
//! let royalties = NumericValidator::new().integer().min_value(0.0).max_value(5000.0);
//! assert!(royalties.validate(&json!(250)).is_ok());
//! assert!(royalties.validate(&json!("250")).is_err());
//! ```

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::{
    Number, ScalarKind, Text, Validate, ValidationError, ValidationOutcome,
};
use crate::rules::{NumericRule, Predicate, StringRule};

/// Accepted value type of a validator of kind `K`.
pub type Accepted<K> = <<K as ScalarKind>::Input as ToOwned>::Owned;

/// Ordered rules for one scalar kind.
pub struct Validator<K: ScalarKind> {
    rules: Vec<K::Rule>,
}

/// Validator for string candidates.
pub type StringValidator = Validator<Text>;

/// Validator for numeric candidates.
pub type NumericValidator = Validator<Number>;

impl<K: ScalarKind> Validator<K> {
    /// Creates a validator with no rules; it accepts every value of its kind.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn rule(mut self, rule: K::Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[K::Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule has been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validates a dynamic candidate.
    ///
    /// A candidate of another kind fails with `type_mismatch` before any
    /// rule runs. On success the narrowed value is returned.
    pub fn validate(&self, candidate: &Value) -> ValidationOutcome<Accepted<K>> {
        let value = K::extract(candidate)?;
        self.run(&*value)?;
        Ok(value.into_owned())
    }

    /// Validates an already-typed value.
    pub fn check(&self, input: &K::Input) -> ValidationOutcome<Accepted<K>> {
        K::admit(input)?;
        self.run(input)?;
        Ok(ToOwned::to_owned(input))
    }

    fn run(&self, input: &K::Input) -> Result<(), ValidationError> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Err(error) = rule.validate(input) {
                tracing::trace!(
                    kind = K::NAME,
                    rule = index,
                    code = %error.code,
                    "rule rejected candidate"
                );
                return Err(error);
            }
        }
        Ok(())
    }
}

impl<K: ScalarKind> Default for Validator<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ScalarKind> Clone for Validator<K> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<K: ScalarKind> fmt::Debug for Validator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kind", &K::NAME)
            .field("rules", &self.rules)
            .finish()
    }
}

// ============================================================================
// STRING BUILDERS
// ============================================================================

impl Validator<Text> {
    /// Length must be at least `min`.
    pub fn min_length(self, min: usize) -> Self {
        self.rule(StringRule::MinLength(min))
    }

    /// Length must be at most `max`.
    pub fn max_length(self, max: usize) -> Self {
        self.rule(StringRule::MaxLength(max))
    }

    /// Sugar for `min_length(1)`.
    pub fn not_empty(self) -> Self {
        self.min_length(1)
    }

    /// Only ASCII letters and digits; the empty string fails.
    pub fn alphanumeric(self) -> Self {
        self.rule(StringRule::Alphanumeric)
    }

    /// Must equal `value`.
    pub fn equals(self, value: impl Into<String>) -> Self {
        self.rule(StringRule::Equal(value.into()))
    }

    /// Must not equal `value`.
    pub fn not_equals(self, value: impl Into<String>) -> Self {
        self.rule(StringRule::NotEqual(value.into()))
    }

    /// Custom check with a fixed code and message.
    pub fn predicate<F>(
        self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(StringRule::Predicate(Predicate::new(code, message, check)))
    }

    /// Convenience for validating a `&str` or `String`.
    pub fn check_str(&self, input: impl AsRef<str>) -> ValidationOutcome<String> {
        self.check(input.as_ref())
    }
}

// ============================================================================
// NUMERIC BUILDERS
// ============================================================================

impl Validator<Number> {
    /// Inclusive lower bound.
    pub fn min_value(self, min: f64) -> Self {
        self.rule(NumericRule::MinValue(min))
    }

    /// Inclusive upper bound.
    pub fn max_value(self, max: f64) -> Self {
        self.rule(NumericRule::MaxValue(max))
    }

    /// No fractional part.
    pub fn integer(self) -> Self {
        self.rule(NumericRule::Integer)
    }

    /// Custom check with a fixed code and message.
    pub fn predicate<F>(
        self,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
        check: F,
    ) -> Self
    where
        F: Fn(&f64) -> bool + Send + Sync + 'static,
    {
        self.rule(NumericRule::Predicate(Predicate::new(code, message, check)))
    }
}
