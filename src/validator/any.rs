//! The pass-through validator.

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;

/// A validator that accepts every value.
///
/// It carries no configuration, so a single instance can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyValidator;

/// The shared instance returned by [`crate::any`].
pub const ANY_VALIDATOR: AnyValidator = AnyValidator;

impl Validate for AnyValidator {
    fn validate_at(&self, _value: &Value, _path: &ValuePath) -> Vec<ValidationError> {
        Vec::new()
    }
}
