//! # jointz
//!
//! Composable validators for untrusted JSON values, with structured,
//! path-annotated error reports.
//!
//! ## Overview
//!
//! A validator tree is built from a handful of primitives (string, number,
//! constant, any, array, tuple, object, or) and checks a `serde_json::Value`.
//! Validation never stops at the first problem: every mismatch is reported
//! as a [`ValidationError`] carrying a message, the [`ValuePath`] of the
//! offending sub-value, and the sub-value itself. An empty error list means
//! the value conforms.
//!
//! Validators are immutable. Builder methods return new validators, so a
//! validator can be defined once and shared across threads.
//!
//! ## Core Types
//!
//! - [`Validate`]: the validator contract (`validate`, `is_valid`, `check_valid`)
//! - [`Validator`]: the sum of all validator kinds, used for nesting
//! - [`ValidationError`] / [`ValidationErrors`]: reported mismatches
//! - [`FailedValidationError`]: returned by `check_valid` for invalid values
//!
//! ## Example
//!
//! ```rust
//! use jointz::Validate;
//! use serde_json::json;
//!
//! let user = jointz::object(vec![
//!     ("name", jointz::string().min_length(1).into()),
//!     ("role", jointz::constant(["admin", "member"]).into()),
//!     ("tags", jointz::array(jointz::string()).into()),
//! ])
//! .required_keys(["name", "role"]);
//!
//! assert!(user.is_valid(&json!({"name": "Alice", "role": "admin"})));
//!
//! let errors = user.validate(&json!({"name": "Bob", "role": "owner", "tags": [1]}));
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].message, r#"must be one of "admin", "member""#);
//! assert_eq!(errors[1].path.to_string(), "tags[0]");
//!
//! let err = user.check_valid(&json!({})).unwrap_err();
//! assert_eq!(err.message, r#"required key "name" was not defined"#);
//! ```

pub mod error;
pub mod factory;
pub mod path;
pub mod validator;

pub use error::{FailedValidationError, ValidationError, ValidationErrors};
pub use factory::{any, array, constant, number, object, or, string, tuple};
pub use path::{PathSegment, ValuePath};
pub use validator::{
    AnyValidator, ArrayValidator, ConstantValidator, Literal, NumberValidator, ObjectValidator,
    OrValidator, StringValidator, TupleValidator, Validate, Validator, ANY_VALIDATOR,
};

/// Validation outcome with accumulated errors on failure.
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
