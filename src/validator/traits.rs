//! The validator contract.
//!
//! [`Validate`] has a single required method, [`Validate::validate_at`];
//! every other operation is derived from it.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{FailedValidationError, ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::ValidationResult;

/// A rule that decides whether a value conforms to a shape.
///
/// Implementations must be pure: the same value always yields the same
/// errors, and mismatches are reported in the returned list rather than by
/// panicking. An empty list is the only success signal.
///
/// Types outside this crate may implement `Validate` to get the derived
/// operations, but only [`crate::Validator`] variants can be nested inside
/// container validators.
///
/// # Example
///
/// ```rust
/// use jointz::{Validate, ValidationError, ValuePath};
/// use serde_json::{json, Value};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => Vec::new(),
///             _ => vec![ValidationError::new(path.clone(), "must be non-empty", value.clone())],
///         }
///     }
/// }
///
/// assert!(NonEmpty.is_valid(&json!("abc")));
/// assert!(NonEmpty.check_valid(&json!("")).is_err());
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value`, located at `path` within the root value.
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError>;

    /// Validates `value` as the root value.
    fn validate(&self, value: &Value) -> Vec<ValidationError> {
        self.validate_at(value, &ValuePath::root())
    }

    /// Returns true if `value` produces no errors.
    fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_empty()
    }

    /// Returns `value` unchanged if it is valid, otherwise an error carrying
    /// every validation failure.
    fn check_valid<'a>(&self, value: &'a Value) -> Result<&'a Value, FailedValidationError> {
        let errors = self.validate(value);
        if let Some(first) = errors.first() {
            tracing::debug!(
                errors = errors.len(),
                path = %first.path,
                message = %first.message,
                "value failed validation"
            );
            return Err(FailedValidationError::new(errors));
        }
        Ok(value)
    }

    /// Validates `value` as a [`stillwater::Validation`]. Failures of
    /// independent validators accumulate through [`ValidationErrors`]'s
    /// `Semigroup` impl.
    fn validation<'a>(&self, value: &'a Value) -> ValidationResult<&'a Value> {
        match ValidationErrors::from_vec(self.validate(value)) {
            None => Validation::Success(value),
            Some(errors) => Validation::Failure(errors),
        }
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        (**self).validate_at(value, path)
    }
}
