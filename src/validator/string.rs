//! String validation.
//!
//! [`StringValidator`] checks that a value is a string and applies optional
//! length and pattern refinements.

use regex::Regex;
use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;

/// A refinement applied to string values.
#[derive(Debug, Clone)]
enum StringConstraint {
    MinLength {
        min: usize,
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        message: Option<String>,
    },
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
}

/// A validator for string values.
///
/// A non-string input yields a single `must be a string` error. For strings,
/// every refinement runs and reports independently, so one call can surface
/// several problems at the same path.
///
/// # Example
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let validator = jointz::string()
///     .min_length(3)
///     .pattern(r"^[a-z]+$")
///     .unwrap();
///
/// assert!(validator.is_valid(&json!("abc")));
///
/// // too short AND not lowercase
/// assert_eq!(validator.validate(&json!("A")).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    constraints: Vec<StringConstraint>,
    type_error_message: Option<String>,
}

impl StringValidator {
    /// Creates a validator that only checks the value is a string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least `min` characters (Unicode scalar values).
    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints
            .push(StringConstraint::MinLength { min, message: None });
        self
    }

    /// Requires at most `max` characters (Unicode scalar values).
    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints
            .push(StringConstraint::MaxLength { max, message: None });
        self
    }

    /// Requires the string to match `pattern`.
    ///
    /// The pattern is unanchored; use `^`/`$` to match the whole string.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error if `pattern` is invalid.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        self.constraints.push(StringConstraint::Pattern {
            regex,
            message: None,
        });
        Ok(self)
    }

    /// Sets a custom message for the most recently added refinement, or for
    /// the type check if no refinement has been added yet.
    ///
    /// ```rust
    /// use jointz::Validate;
    /// use serde_json::json;
    ///
    /// let validator = jointz::string().min_length(5).error("username too short");
    /// assert_eq!(validator.validate(&json!("ab"))[0].message, "username too short");
    /// ```
    pub fn error(mut self, message: impl Into<String>) -> Self {
        let message = Some(message.into());
        match self.constraints.last_mut() {
            Some(StringConstraint::MinLength { message: m, .. })
            | Some(StringConstraint::MaxLength { message: m, .. })
            | Some(StringConstraint::Pattern { message: m, .. }) => *m = message,
            None => self.type_error_message = message,
        }
        self
    }
}

impl Validate for StringValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        let Some(s) = value.as_str() else {
            let message = self
                .type_error_message
                .clone()
                .unwrap_or_else(|| "must be a string".to_string());
            return vec![
                ValidationError::new(path.clone(), message, value.clone()).with_code("invalid_type")
            ];
        };

        self.constraints
            .iter()
            .filter_map(|c| check_constraint(c, s))
            .map(|(code, message)| {
                ValidationError::new(path.clone(), message, value.clone()).with_code(code)
            })
            .collect()
    }
}

/// Checks one refinement, returning the error code and message on failure.
fn check_constraint(constraint: &StringConstraint, value: &str) -> Option<(&'static str, String)> {
    match constraint {
        StringConstraint::MinLength { min, message } => {
            (value.chars().count() < *min).then(|| {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("must be at least {} characters long", min));
                ("min_length", msg)
            })
        }
        StringConstraint::MaxLength { max, message } => {
            (value.chars().count() > *max).then(|| {
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("must be at most {} characters long", max));
                ("max_length", msg)
            })
        }
        StringConstraint::Pattern { regex, message } => (!regex.is_match(value)).then(|| {
            let msg = message
                .clone()
                .unwrap_or_else(|| format!("must match pattern /{}/", regex.as_str()));
            ("pattern", msg)
        }),
    }
}
