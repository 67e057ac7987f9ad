//! Constructors for every validator kind.
//!
//! These are re-exported at the crate root, so validator trees read as
//! `jointz::object(..)`, `jointz::string()` and so on. Each call returns a
//! fresh validator with default configuration.

use crate::validator::{
    AnyValidator, ArrayValidator, ConstantValidator, Literal, NumberValidator, ObjectValidator,
    OrValidator, StringValidator, TupleValidator, Validator, ANY_VALIDATOR,
};

/// Creates a validator that checks the value is a string.
pub fn string() -> StringValidator {
    StringValidator::new()
}

/// Creates a validator that checks the value is a number.
pub fn number() -> NumberValidator {
    NumberValidator::new()
}

/// Creates a validator that checks the value is an object with the given keys.
///
/// All keys are optional and unknown keys are rejected. Call
/// [`ObjectValidator::required_keys`] and [`ObjectValidator::allow_unknown_keys`]
/// on the result to change that.
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let nested = jointz::object(vec![(
///     "abc",
///     jointz::object(vec![("def", jointz::number().into())])
///         .required_keys(["def"])
///         .into(),
/// )])
/// .required_keys(["abc"]);
///
/// let errors = nested.validate(&json!({"abc": {}}));
/// assert_eq!(errors[0].message, r#"required key "def" was not defined"#);
/// assert_eq!(errors[0].path.to_string(), "abc");
/// ```
pub fn object(keys: Vec<(&str, Validator)>) -> ObjectValidator {
    keys.into_iter()
        .fold(ObjectValidator::new(), |validator, (name, child)| {
            validator.key(name, child)
        })
}

/// Creates a validator that checks the value is an array whose items all
/// satisfy `items`.
///
/// The item validator has no implicit default here. Pass [`any`], or use
/// [`ArrayValidator::default`], to only check that the value is an array:
///
/// ```rust
/// use jointz::{ArrayValidator, Validate};
/// use serde_json::json;
///
/// assert!(jointz::array(jointz::any()).is_valid(&json!([1, "a", null])));
/// assert!(ArrayValidator::default().is_valid(&json!([{"b": 2}])));
/// assert!(!ArrayValidator::default().is_valid(&json!({})));
/// ```
pub fn array(items: impl Into<Validator>) -> ArrayValidator {
    ArrayValidator::new(items)
}

/// Creates a validator for fixed-length arrays, one validator per position.
pub fn tuple(validators: Vec<Validator>) -> TupleValidator {
    TupleValidator::new(validators)
}

/// Creates a validator that passes if any of `validators` passes.
pub fn or(validators: Vec<Validator>) -> OrValidator {
    OrValidator::new(validators)
}

/// Creates a validator that checks the value strictly equals one of
/// `allowed` (numbers, strings, booleans or null).
pub fn constant<I>(allowed: I) -> ConstantValidator
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    ConstantValidator::new(allowed)
}

/// Returns the validator that accepts every value.
pub fn any() -> AnyValidator {
    ANY_VALIDATOR
}
