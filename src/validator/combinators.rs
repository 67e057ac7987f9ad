//! Union validation.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;
use super::Validator;

/// A validator that accepts a value matching at least one of its members.
///
/// Members are tried in order and evaluation stops at the first member that
/// reports no errors. When every member fails, the individual member errors
/// are discarded and a single summary error is reported at the current path.
///
/// # Example
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let id = jointz::or(vec![
///     jointz::string().min_length(1).into(),
///     jointz::number().integer().into(),
/// ]);
///
/// assert!(id.is_valid(&json!("abc")));
/// assert!(id.is_valid(&json!(42)));
///
/// let errors = id.validate(&json!(true));
/// assert_eq!(errors[0].message, "must match one of 2 alternatives");
/// ```
#[derive(Debug, Clone)]
pub struct OrValidator {
    validators: Arc<[Validator]>,
}

impl OrValidator {
    /// Creates a union of `validators`, tried in order.
    pub fn new(validators: Vec<Validator>) -> Self {
        Self {
            validators: validators.into(),
        }
    }

    /// Returns the members in evaluation order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

impl Validate for OrValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        for (index, validator) in self.validators.iter().enumerate() {
            if validator.validate_at(value, path).is_empty() {
                tracing::trace!(alternative = index, path = %path, "alternative matched");
                return Vec::new();
            }
        }

        let message = format!("must match one of {} alternatives", self.validators.len());
        vec![ValidationError::new(path.clone(), message, value.clone()).with_code("or")]
    }
}
