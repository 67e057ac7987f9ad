//! Tuple validation.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;
use super::Validator;

/// A validator for fixed-length arrays with one validator per position.
///
/// The input must have exactly as many elements as there are validators;
/// otherwise a single length error is reported and no position is checked.
///
/// # Example
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let point = jointz::tuple(vec![jointz::number().into(), jointz::number().into()]);
///
/// assert!(point.is_valid(&json!([1, 2])));
/// assert_eq!(
///     point.validate(&json!([1, 2, 3]))[0].message,
///     "must have exactly 2 items, got 3"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TupleValidator {
    validators: Arc<[Validator]>,
}

impl TupleValidator {
    /// Creates a validator with one validator per position.
    pub fn new(validators: Vec<Validator>) -> Self {
        Self {
            validators: validators.into(),
        }
    }

    /// Returns the positional validators in order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

impl Validate for TupleValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        let Some(arr) = value.as_array() else {
            return vec![
                ValidationError::new(path.clone(), "must be an array", value.clone())
                    .with_code("invalid_type"),
            ];
        };

        if arr.len() != self.validators.len() {
            let message = format!(
                "must have exactly {} items, got {}",
                self.validators.len(),
                arr.len()
            );
            return vec![
                ValidationError::new(path.clone(), message, value.clone()).with_code("tuple_length")
            ];
        }

        self.validators
            .iter()
            .zip(arr)
            .enumerate()
            .flat_map(|(index, (validator, item))| {
                validator.validate_at(item, &path.push_index(index))
            })
            .collect()
    }
}
