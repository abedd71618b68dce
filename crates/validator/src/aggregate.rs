//! Aggregation of independent validation outcomes
//!
//! Callers validate each field of a request on its own and then make a
//! single aggregation pass, so the user sees every problem at once instead of
//! only the first.
//!
//! ```
//! use datanft_validator::prelude::*;
//! use serde_json::json;
//!
//! let name = StringValidator::new().alphanumeric().validate(&json!("my token"));
//! let supply = NumericValidator::new().min_value(1.0).validate(&json!(10));
//! let royalties = NumericValidator::new().integer().validate(&json!(2.5));
//!
//! let err = validate_results![name, supply, royalties].unwrap_err();
//! assert_eq!(err.len(), 2);
//! assert!(err.to_string().starts_with("Validation Error: Result at index 0: "));
//! ```

use std::fmt;

use crate::foundation::{ValidationError, ValidationErrors};

// ============================================================================
// OUTCOME
// ============================================================================

/// Anything that either succeeded or failed with a [`ValidationError`].
///
/// Object-safe so outcomes of different accepted types can sit in one list.
pub trait Outcome {
    /// The error, if this outcome is a failure.
    fn failure(&self) -> Option<&ValidationError>;
}

impl<T> Outcome for Result<T, ValidationError> {
    #[inline]
    fn failure(&self) -> Option<&ValidationError> {
        self.as_ref().err()
    }
}

impl<O: Outcome + ?Sized> Outcome for &O {
    #[inline]
    fn failure(&self) -> Option<&ValidationError> {
        (**self).failure()
    }
}

// ============================================================================
// AGGREGATE ERROR
// ============================================================================

/// One failing outcome and its position in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFailure {
    /// Position of the outcome in the list passed to [`validate_results`].
    pub index: usize,
    /// The outcome's error.
    pub error: ValidationError,
}

impl fmt::Display for IndexedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result at index {}: {}", self.index, self.error.message)
    }
}

/// Every failure found by one aggregation pass, in input order.
///
/// Renders as `Validation Error: ` followed by one
/// `Result at index {i}: {message}` line per failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation Error: {}", render_lines(.failures))]
pub struct AggregateError {
    failures: Vec<IndexedFailure>,
}

fn render_lines(failures: &[IndexedFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl AggregateError {
    /// The failures in input order.
    pub fn failures(&self) -> &[IndexedFailure] {
        &self.failures
    }

    /// Number of failing outcomes.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always false for an error produced by [`validate_results`].
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl From<AggregateError> for ValidationErrors {
    fn from(aggregate: AggregateError) -> Self {
        aggregate
            .failures
            .into_iter()
            .map(|f| f.error.with_field(format!("index[{}]", f.index)))
            .collect()
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Combines independent outcomes into one pass/fail decision.
///
/// Returns `Ok(())` when nothing failed (including an empty input).
/// Otherwise returns an [`AggregateError`] listing every failure with its
/// index in the input.
pub fn validate_results<I>(outcomes: I) -> Result<(), AggregateError>
where
    I: IntoIterator,
    I::Item: Outcome,
{
    let failures: Vec<IndexedFailure> = outcomes
        .into_iter()
        .enumerate()
        .filter_map(|(index, outcome)| {
            outcome.failure().map(|error| IndexedFailure {
                index,
                error: error.clone(),
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(failures = failures.len(), "aggregated validation failed");
        Err(AggregateError { failures })
    }
}

/// Aggregates outcomes of possibly different accepted types.
///
/// ```
/// use datanft_validator::prelude::*;
/// use serde_json::json;
///
/// let title = StringValidator::new().not_empty().validate(&json!("Weather data"));
/// let supply = NumericValidator::new().max_value(1000.0).validate(&json!(5));
/// assert!(validate_results![title, supply].is_ok());
/// assert!(validate_results![].is_ok());
/// ```
#[macro_export]
macro_rules! validate_results {
    () => {
        $crate::aggregate::validate_results(
            ::std::iter::empty::<&dyn $crate::aggregate::Outcome>(),
        )
    };
    ($($outcome:expr),+ $(,)?) => {
        $crate::aggregate::validate_results([
            $(&$outcome as &dyn $crate::aggregate::Outcome),+
        ])
    };
}
