//! Object validation.
//!
//! [`ObjectValidator`] reconciles the keys of an input object against a
//! declared key mapping: required keys must be present, declared keys present
//! in the input are validated, and undeclared keys are rejected unless
//! explicitly tolerated.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

use super::traits::Validate;
use super::Validator;

/// A validator for JSON objects with a declared set of keys.
///
/// Declared keys are optional unless named in [`ObjectValidator::required_keys`].
/// Keys present in the input but not declared produce an error unless
/// [`ObjectValidator::allow_unknown_keys`] is set.
///
/// Configuration is copy-on-write: every builder call returns a new
/// validator and leaves the receiver untouched, so one base validator can be
/// specialized independently by several callers.
///
/// Errors are reported in a fixed order: missing required keys, then nested
/// errors in key declaration order, then unknown keys.
///
/// # Example
///
/// ```rust
/// use jointz::Validate;
/// use serde_json::json;
///
/// let user = jointz::object(vec![
///     ("name", jointz::string().min_length(1).into()),
///     ("age", jointz::number().integer().into()),
/// ])
/// .required_keys(["name"]);
///
/// assert!(user.is_valid(&json!({"name": "Alice"})));
///
/// let errors = user.validate(&json!({"age": 1.5, "role": "admin"}));
/// let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
/// assert_eq!(
///     messages,
///     vec![
///         r#"required key "name" was not defined"#,
///         "must be an integer",
///         r#"encountered unknown key "role""#,
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectValidator {
    keys: Arc<IndexMap<String, Validator>>,
    required_keys: Arc<IndexSet<String>>,
    allow_unknown_keys: bool,
}

impl ObjectValidator {
    /// Creates a validator with no declared keys, no required keys, and
    /// unknown keys disallowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a validator that additionally declares `name`.
    ///
    /// Declaring an existing key replaces its validator in place.
    pub fn key(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Self {
        Arc::make_mut(&mut self.keys).insert(name.into(), validator.into());
        self
    }

    /// Returns a validator that additionally requires `keys` to be present.
    ///
    /// Duplicate names are collapsed, so each missing key is reported once.
    pub fn required_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Arc::make_mut(&mut self.required_keys).extend(keys.into_iter().map(Into::into));
        self
    }

    /// Returns a validator that tolerates (and does not validate) undeclared
    /// keys when `allow` is true.
    pub fn allow_unknown_keys(mut self, allow: bool) -> Self {
        self.allow_unknown_keys = allow;
        self
    }

    /// Returns the declared keys and their validators in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the required keys in the order they were added.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required_keys.iter().map(String::as_str)
    }

    /// Returns true if undeclared keys are tolerated.
    pub fn allows_unknown_keys(&self) -> bool {
        self.allow_unknown_keys
    }
}

impl Validate for ObjectValidator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        let Some(obj) = value.as_object() else {
            return vec![
                ValidationError::new(path.clone(), "must be an object", value.clone())
                    .with_code("invalid_type"),
            ];
        };

        let mut errors = Vec::new();

        for key in self.required_keys.iter() {
            if !obj.contains_key(key) {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("required key \"{}\" was not defined", key),
                        value.clone(),
                    )
                    .with_code("required"),
                );
            }
        }

        for (key, validator) in self.keys.iter() {
            if let Some(child) = obj.get(key) {
                errors.extend(validator.validate_at(child, &path.push_key(key.as_str())));
            }
        }

        if !self.allow_unknown_keys {
            for key in obj.keys().filter(|k| !self.keys.contains_key(k.as_str())) {
                errors.push(
                    ValidationError::new(
                        path.clone(),
                        format!("encountered unknown key \"{}\"", key),
                        value.clone(),
                    )
                    .with_code("unknown_key"),
                );
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{AnyValidator, ConstantValidator, NumberValidator, StringValidator};
    use serde_json::json;

    fn messages(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn test_empty_object() {
        assert!(ObjectValidator::new().validate(&json!({})).is_empty());
    }

    #[test]
    fn test_rejects_non_objects() {
        let validator = ObjectValidator::new();
        for value in [json!([]), json!("abc"), json!(123), json!(null)] {
            let errors = validator.validate(&value);
            assert_eq!(
                errors,
                vec![ValidationError::new(ValuePath::root(), "must be an object", value.clone())
                    .with_code("invalid_type")]
            );
        }
    }

    #[test]
    fn test_unknown_keys_disallowed_by_default() {
        let errors = ObjectValidator::new().validate(&json!({"abc": 123}));
        assert_eq!(messages(&errors), vec![r#"encountered unknown key "abc""#]);
        assert!(errors[0].path.is_root());
        assert_eq!(errors[0].value, json!({"abc": 123}));
        assert_eq!(errors[0].code, "unknown_key");
    }

    #[test]
    fn test_allow_unknown_keys() {
        let validator = ObjectValidator::new()
            .key("abc", NumberValidator::new())
            .allow_unknown_keys(true);

        assert!(validator.is_valid(&json!({"abc": 1, "extra": "anything"})));
        assert!(!validator.is_valid(&json!({"abc": "x", "extra": "anything"})));
    }

    #[test]
    fn test_required_key_missing() {
        let validator = ObjectValidator::new()
            .key("abc", NumberValidator::new())
            .required_keys(["abc"]);

        let errors = validator.validate(&json!({}));
        assert_eq!(messages(&errors), vec![r#"required key "abc" was not defined"#]);
        assert!(errors[0].path.is_root());
        assert_eq!(errors[0].value, json!({}));
    }

    #[test]
    fn test_null_counts_as_present() {
        let validator = ObjectValidator::new()
            .key("abc", AnyValidator)
            .required_keys(["abc"]);
        assert!(validator.is_valid(&json!({"abc": null})));
    }

    #[test]
    fn test_declared_key_validated_at_child_path() {
        let validator = ObjectValidator::new()
            .key("abc", NumberValidator::new())
            .required_keys(["abc"]);

        let errors = validator.validate(&json!({"abc": "hello"}));
        assert_eq!(messages(&errors), vec!["must be a number"]);
        assert_eq!(errors[0].path, ValuePath::root().push_key("abc"));
        assert_eq!(errors[0].value, json!("hello"));
    }

    #[test]
    fn test_optional_keys_may_be_absent() {
        let validator = ObjectValidator::new().key("abc", NumberValidator::new());
        assert!(validator.is_valid(&json!({})));
    }

    #[test]
    fn test_duplicate_required_keys_reported_once() {
        let validator = ObjectValidator::new()
            .key("abc", AnyValidator)
            .required_keys(["abc", "abc"])
            .required_keys(["abc"]);

        let errors = validator.validate(&json!({}));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_undeclared_required_key() {
        let validator = ObjectValidator::new().required_keys(["id"]);

        let errors = validator.validate(&json!({}));
        assert_eq!(messages(&errors), vec![r#"required key "id" was not defined"#]);

        let errors = validator.validate(&json!({"id": 1}));
        assert_eq!(messages(&errors), vec![r#"encountered unknown key "id""#]);
    }

    #[test]
    fn test_error_order() {
        let validator = ObjectValidator::new()
            .key("z", StringValidator::new())
            .key("a", StringValidator::new())
            .key("m", StringValidator::new())
            .required_keys(["m"]);

        let errors = validator.validate(&json!({"a": 1, "z": 2, "q": 3}));
        assert_eq!(
            messages(&errors),
            vec![
                r#"required key "m" was not defined"#,
                "must be a string",
                "must be a string",
                r#"encountered unknown key "q""#,
            ]
        );
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["", "z", "a", ""]);
    }

    #[test]
    fn test_nested_required_key() {
        let validator = ObjectValidator::new()
            .key(
                "abc",
                ObjectValidator::new()
                    .key("def", NumberValidator::new())
                    .required_keys(["def"]),
            )
            .required_keys(["abc"]);

        let errors = validator.validate(&json!({"abc": {}}));
        assert_eq!(
            errors,
            vec![ValidationError::new(
                ValuePath::root().push_key("abc"),
                r#"required key "def" was not defined"#,
                json!({}),
            )
            .with_code("required")]
        );

        let errors = validator.validate(&json!({"abc": {"def": "string"}}));
        assert_eq!(messages(&errors), vec!["must be a number"]);
        assert_eq!(errors[0].path.to_string(), "abc.def");
    }

    #[test]
    fn test_constant_key() {
        let validator = ObjectValidator::new().key("abc", ConstantValidator::new(["def"]));

        assert!(validator.validate(&json!({"abc": "def"})).is_empty());

        let errors = validator.validate(&json!({"abc": "red"}));
        assert_eq!(messages(&errors), vec![r#"must be one of "def""#]);
        assert_eq!(errors[0].path, ValuePath::root().push_key("abc"));
        assert_eq!(errors[0].value, json!("red"));
    }

    #[test]
    fn test_builders_do_not_mutate_receiver() {
        let base = ObjectValidator::new().key("abc", NumberValidator::new());
        let required = base.clone().required_keys(["abc"]);
        let open = base.clone().allow_unknown_keys(true);
        let wider = base.clone().key("def", StringValidator::new());

        assert!(base.is_valid(&json!({})));
        assert!(!base.is_valid(&json!({"x": 1})));
        assert!(!base.is_valid(&json!({"def": "y"})));

        assert!(!required.is_valid(&json!({})));
        assert!(open.is_valid(&json!({"x": 1})));
        assert!(wider.is_valid(&json!({"def": "y"})));

        assert_eq!(base.required().count(), 0);
        assert_eq!(base.keys().count(), 1);
        assert!(!base.allows_unknown_keys());
    }

    #[test]
    fn test_nested_errors_accumulate() {
        let validator = ObjectValidator::new()
            .key("name", StringValidator::new().min_length(5))
            .key("age", NumberValidator::new().min(0));

        let errors = validator.validate(&json!({"name": "AB", "age": -5}));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code, "min_length");
        assert_eq!(errors[1].code, "min");
    }
}
