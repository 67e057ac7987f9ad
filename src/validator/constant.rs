//! Constant (enumerated literal) validation.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;

/// A primitive value a [`ConstantValidator`] may allow.
///
/// Comparison is strict equality: a literal only matches a value of the same
/// kind, and numbers compare numerically (`1` matches `1.0`). A NaN literal
/// never matches anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    /// Returns true if `value` strictly equals this literal.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Literal::Null, Value::Null) => true,
            (Literal::Bool(expected), Value::Bool(actual)) => expected == actual,
            (Literal::Number(expected), Value::Number(actual)) => {
                actual.as_f64() == Some(*expected)
            }
            (Literal::String(expected), Value::String(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// Renders the literal as it would appear in JSON (strings quoted).
impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", Value::String(s.clone())),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

macro_rules! literal_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(n: $t) -> Self {
                    Literal::Number(n as f64)
                }
            }
        )*
    };
}

literal_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Literal::Null, Into::into)
    }
}

/// A validator that accepts only values strictly equal to one of an ordered
/// list of literals.
///
/// # Example
///
/// ```rust
/// use jointz::{Literal, Validate};
/// use serde_json::json;
///
/// let color = jointz::constant(["red", "green"]);
/// assert!(color.is_valid(&json!("red")));
///
/// let errors = color.validate(&json!("blue"));
/// assert_eq!(errors[0].message, r#"must be one of "red", "green""#);
///
/// let mixed = jointz::constant([Literal::from(1), Literal::from("a"), Literal::Null]);
/// assert!(mixed.is_valid(&json!(null)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantValidator {
    allowed: Vec<Literal>,
}

impl ConstantValidator {
    /// Creates a validator accepting exactly the `allowed` literals.
    pub fn new<I>(allowed: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed literals in declaration order.
    pub fn allowed_values(&self) -> &[Literal] {
        &self.allowed
    }

    fn message(&self) -> String {
        let listed: Vec<String> = self.allowed.iter().map(Literal::to_string).collect();
        format!("must be one of {}", listed.join(", "))
    }
}

impl Validate for ConstantValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        if self.allowed.iter().any(|literal| literal.matches(value)) {
            return Vec::new();
        }
        vec![ValidationError::new(path.clone(), self.message(), value.clone()).with_code("constant")]
    }
}
