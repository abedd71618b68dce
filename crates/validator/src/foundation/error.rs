//! Error types for validation failures
//!
//! A [`ValidationError`] is what a single rule reports; a
//! [`ValidationErrors`] collects several of them when the caller wants every
//! problem at once instead of the first.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

const FALLBACK_MESSAGE: &str = "Validation failed";

/// A structured validation error.
///
/// `message` is the human-readable diagnostic and is never empty; `code` and
/// `params` exist for programmatic handling (tests, i18n, API responses).
///
/// # Examples
///
/// ```
/// use datanft_validator::foundation::ValidationError;
///
/// let error = ValidationError::min_length(3, 2);
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("3"));
/// assert_eq!(error.to_string(), "String must be at least 3 characters long, received 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code, e.g. `"min_length"`, `"type_mismatch"`.
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional field path the error belongs to.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters of the failed check.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// An empty message is replaced by the code, or by a generic text when
    /// the code is empty too, so the error always carries a diagnostic.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        let code = code.into();
        let mut message = message.into();
        if message.is_empty() {
            message = if code.is_empty() {
                Cow::Borrowed(FALLBACK_MESSAGE)
            } else {
                code.clone()
            };
        }
        Self {
            code,
            message,
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{field}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// The candidate is not of the expected scalar kind.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new(
            "type_mismatch",
            format!("Expected a {expected}, received {actual}"),
        )
        .with_param("expected", expected)
        .with_param("actual", actual)
    }

    /// The string is shorter than `min`.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("String must be at least {min} characters long, received {actual}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The string is longer than `max`.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("String must be at most {max} characters long, received {actual}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The number is below the inclusive lower bound.
    pub fn min_value<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new(
            "min_value",
            format!("Value must be at least {min}, received {actual}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// The number is above the inclusive upper bound.
    pub fn max_value<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new(
            "max_value",
            format!("Value must be at most {max}, received {actual}"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
