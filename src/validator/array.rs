//! Array validation.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;
use super::Validator;

/// A validator for homogeneous arrays.
///
/// Every element is validated by the same item validator at `path[i]`;
/// errors are reported in index order. The item validator defaults to
/// [`crate::any`], so the default validator only checks that the value is
/// an array.
///
/// # Example
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let validator = jointz::array(jointz::number());
///
/// let errors = validator.validate(&json!([1, "two", 3, "four"]));
/// let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
/// assert_eq!(paths, vec!["[1]", "[3]"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArrayValidator {
    items: Arc<Validator>,
}

impl ArrayValidator {
    /// Creates a validator applying `items` to every element.
    pub fn new(items: impl Into<Validator>) -> Self {
        Self {
            items: Arc::new(items.into()),
        }
    }

    /// Returns the item validator.
    pub fn items(&self) -> &Validator {
        &self.items
    }
}

impl Validate for ArrayValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        let Some(arr) = value.as_array() else {
            return vec![
                ValidationError::new(path.clone(), "must be an array", value.clone())
                    .with_code("invalid_type"),
            ];
        };

        arr.iter()
            .enumerate()
            .flat_map(|(index, item)| self.items.validate_at(item, &path.push_index(index)))
            .collect()
    }
}
