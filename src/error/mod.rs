//! Error types for validation failures.
//!
//! [`ValidationError`] describes a single mismatch, [`ValidationErrors`] a
//! non-empty set of them, and [`FailedValidationError`] is the error returned
//! when a caller demands that a value be valid.

mod validation_error;

pub use validation_error::{FailedValidationError, ValidationError, ValidationErrors};
