//! Validation error types.

use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;

use crate::path::ValuePath;

/// A single validation failure.
///
/// - **message**: human-readable description of the failure
/// - **path**: location of the offending value, empty for the root
/// - **value**: the offending sub-value itself
/// - **code**: machine-readable kind of failure (e.g. `required`)
///
/// # Example
///
/// ```rust
/// use jointz::{ValidationError, ValuePath};
/// use serde_json::json;
///
/// let error = ValidationError::new(
///     ValuePath::root().push_key("abc"),
///     "must be a number",
///     json!("hello"),
/// )
/// .with_code("invalid_type");
///
/// assert_eq!(error.to_string(), "abc: must be a number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
    pub path: ValuePath,
    pub value: Value,
    /// Defaults to `validation_error`.
    pub code: String,
}

impl ValidationError {
    /// Creates an error with the default `validation_error` code.
    pub fn new(path: ValuePath, message: impl Into<String>, value: Value) -> Self {
        Self {
            message: message.into(),
            path,
            value,
            code: "validation_error".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Renders the error as `{"message", "path", "value"}`, the shape handed
    /// to transport layers such as HTTP error bodies.
    pub fn to_json(&self) -> Value {
        json!({
            "message": self.message,
            "path": self.path.to_json(),
            "value": self.value,
        })
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// This is the failure side of [`crate::ValidationResult`]. It implements
/// `Semigroup`, so failures of independent validations accumulate:
///
/// ```rust
/// use jointz::{ValidationError, ValidationErrors, ValuePath};
/// use serde_json::Value;
/// use stillwater::prelude::*;
///
/// let a = ValidationErrors::single(ValidationError::new(
///     ValuePath::root().push_key("name"), "must be a string", Value::Null));
/// let b = ValidationErrors::single(ValidationError::new(
///     ValuePath::root().push_key("age"), "must be a number", Value::Null));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a collection holding one error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Wraps a list of errors, returning `None` if it is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the errors in report order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns the first error in report order.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Returns all errors reported at exactly `path`.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Consumes the collection, returning the errors in report order.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

/// Message used when a [`FailedValidationError`] is built from an empty list.
const FALLBACK_MESSAGE: &str = "validation failed";

/// The error returned by `check_valid` when a value does not conform.
///
/// Carries every error produced by the triggering validation; its message is
/// the first error's message.
///
/// Code holding a type-erased error can ask whether it is this kind with
/// [`FailedValidationError::is_failed_validation_error`]:
///
/// ```rust
/// use jointz::{FailedValidationError, Validate};
/// use serde_json::json;
///
/// fn run() -> Result<(), Box<dyn std::error::Error>> {
///     jointz::number().check_valid(&json!("abc"))?;
///     Ok(())
/// }
///
/// let err = run().unwrap_err();
/// assert!(FailedValidationError::is_failed_validation_error(err.as_ref()));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct FailedValidationError {
    pub message: String,
    pub errors: Vec<ValidationError>,
}

impl FailedValidationError {
    /// Creates the error from `errors`, taking the first error's message.
    pub fn new(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
        Self { message, errors }
    }

    /// Returns true if `error` is a `FailedValidationError`.
    pub fn is_failed_validation_error(error: &(dyn std::error::Error + 'static)) -> bool {
        error.downcast_ref::<FailedValidationError>().is_some()
    }

    /// Returns the errors as a non-empty collection, or `None` if there are none.
    pub fn to_errors(&self) -> Option<ValidationErrors> {
        ValidationErrors::from_vec(self.errors.clone())
    }
}

impl From<ValidationErrors> for FailedValidationError {
    fn from(errors: ValidationErrors) -> Self {
        Self::new(errors.into_vec())
    }
}
