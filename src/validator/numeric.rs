//! Number validation.
//!
//! [`NumberValidator`] checks that a value is a JSON number and applies
//! optional bound, integer and divisibility refinements.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;

/// A refinement applied to numeric values.
#[derive(Debug, Clone, PartialEq)]
enum NumberConstraint {
    Min { value: f64, message: Option<String> },
    Max { value: f64, message: Option<String> },
    ExclusiveMin { value: f64, message: Option<String> },
    ExclusiveMax { value: f64, message: Option<String> },
    Integer { message: Option<String> },
    MultipleOf { value: f64, message: Option<String> },
}

/// A validator for numeric values.
///
/// Any JSON number passes the type check; JSON cannot encode NaN, so NaN is
/// never accepted. Refinements are additive and all reported together.
///
/// # Example
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let percentage = jointz::number().range(0..=100).integer();
///
/// assert!(percentage.is_valid(&json!(42)));
///
/// // out of range AND not an integer
/// assert_eq!(percentage.validate(&json!(100.5)).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValidator {
    constraints: Vec<NumberConstraint>,
    type_error_message: Option<String>,
}

impl NumberValidator {
    /// Creates a validator that only checks the value is a number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the number to be at least `value` (inclusive).
    pub fn min(mut self, value: impl Into<f64>) -> Self {
        self.constraints.push(NumberConstraint::Min {
            value: value.into(),
            message: None,
        });
        self
    }

    /// Requires the number to be at most `value` (inclusive).
    pub fn max(mut self, value: impl Into<f64>) -> Self {
        self.constraints.push(NumberConstraint::Max {
            value: value.into(),
            message: None,
        });
        self
    }

    /// Requires the number to be strictly greater than `value`.
    pub fn exclusive_min(mut self, value: impl Into<f64>) -> Self {
        self.constraints.push(NumberConstraint::ExclusiveMin {
            value: value.into(),
            message: None,
        });
        self
    }

    /// Requires the number to be strictly less than `value`.
    pub fn exclusive_max(mut self, value: impl Into<f64>) -> Self {
        self.constraints.push(NumberConstraint::ExclusiveMax {
            value: value.into(),
            message: None,
        });
        self
    }

    /// Shorthand for `.min(start).max(end)`.
    pub fn range<T: Into<f64>>(self, range: RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        self.min(start).max(end)
    }

    /// Requires the number to have no fractional part.
    pub fn integer(mut self) -> Self {
        self.constraints
            .push(NumberConstraint::Integer { message: None });
        self
    }

    /// Requires the number to be a multiple of `value`.
    pub fn multiple_of(mut self, value: impl Into<f64>) -> Self {
        self.constraints.push(NumberConstraint::MultipleOf {
            value: value.into(),
            message: None,
        });
        self
    }

    /// Sets a custom message for the most recently added refinement, or for
    /// the type check if no refinement has been added yet.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        let message = Some(message.into());
        match self.constraints.last_mut() {
            Some(NumberConstraint::Min { message: m, .. })
            | Some(NumberConstraint::Max { message: m, .. })
            | Some(NumberConstraint::ExclusiveMin { message: m, .. })
            | Some(NumberConstraint::ExclusiveMax { message: m, .. })
            | Some(NumberConstraint::Integer { message: m })
            | Some(NumberConstraint::MultipleOf { message: m, .. }) => *m = message,
            None => self.type_error_message = message,
        }
        self
    }
}

impl Validate for NumberValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        let Some(n) = value.as_f64().filter(|n| !n.is_nan()) else {
            let message = self
                .type_error_message
                .clone()
                .unwrap_or_else(|| "must be a number".to_string());
            return vec![
                ValidationError::new(path.clone(), message, value.clone()).with_code("invalid_type")
            ];
        };

        self.constraints
            .iter()
            .filter_map(|c| check_constraint(c, n))
            .map(|(code, message)| {
                ValidationError::new(path.clone(), message, value.clone()).with_code(code)
            })
            .collect()
    }
}

/// Checks one refinement, returning the error code and message on failure.
fn check_constraint(constraint: &NumberConstraint, n: f64) -> Option<(&'static str, String)> {
    let (failed, code, message, default) = match constraint {
        NumberConstraint::Min { value, message } => (
            n < *value,
            "min",
            message,
            format!("must be greater than or equal to {}", value),
        ),
        NumberConstraint::Max { value, message } => (
            n > *value,
            "max",
            message,
            format!("must be less than or equal to {}", value),
        ),
        NumberConstraint::ExclusiveMin { value, message } => (
            n <= *value,
            "exclusive_min",
            message,
            format!("must be greater than {}", value),
        ),
        NumberConstraint::ExclusiveMax { value, message } => (
            n >= *value,
            "exclusive_max",
            message,
            format!("must be less than {}", value),
        ),
        NumberConstraint::Integer { message } => (
            n.fract() != 0.0,
            "integer",
            message,
            "must be an integer".to_string(),
        ),
        NumberConstraint::MultipleOf { value, message } => (
            !is_multiple_of(n, *value),
            "multiple_of",
            message,
            format!("must be a multiple of {}", value),
        ),
    };

    failed.then(|| (code, message.clone().unwrap_or(default)))
}

/// Tolerates the rounding error of binary fractions, so `0.3` counts as a
/// multiple of `0.1`. A zero divisor matches nothing.
fn is_multiple_of(n: f64, divisor: f64) -> bool {
    if divisor == 0.0 {
        return false;
    }
    let quotient = n / divisor;
    (quotient - quotient.round()).abs() <= f64::EPSILON * quotient.abs().max(1.0)
}
