//! Integration tests for object validation.

use jointz::{Validate, ValidationError, ValuePath};
use serde_json::{json, Value};

/// Projects errors onto the `(message, path, value)` triple callers see.
fn reported(errors: &[ValidationError]) -> Vec<(&str, String, &Value)> {
    errors
        .iter()
        .map(|e| (e.message.as_str(), e.path.to_string(), &e.value))
        .collect()
}

#[test]
fn test_expects_objects() {
    for value in [json!([]), json!("abc"), json!(123)] {
        let errors = jointz::object(vec![]).validate(&value);
        assert_eq!(reported(&errors), vec![("must be an object", String::new(), &value)]);
    }
}

#[test]
fn test_unknown_keys_rejected() {
    let value = json!({"abc": 123});
    let errors = jointz::object(vec![])
        .allow_unknown_keys(false)
        .validate(&value);

    assert_eq!(
        reported(&errors),
        vec![(r#"encountered unknown key "abc""#, String::new(), &value)]
    );
}

#[test]
fn test_each_unknown_key_reported_once() {
    let value = json!({"known": 1, "x": 1, "y": 2, "z": 3});
    let errors = jointz::object(vec![("known", jointz::number().into())]).validate(&value);

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.code == "unknown_key"));
}

#[test]
fn test_checks_keys() {
    let validator = jointz::object(vec![("abc", jointz::number().into())]).required_keys(["abc"]);

    let empty = json!({});
    assert_eq!(
        reported(&validator.validate(&empty)),
        vec![(r#"required key "abc" was not defined"#, String::new(), &empty)]
    );

    assert_eq!(
        reported(&validator.validate(&json!({"abc": "hello"}))),
        vec![("must be a number", "abc".to_string(), &json!("hello"))]
    );
}

#[test]
fn test_nested_objects() {
    let nested = jointz::object(vec![(
        "abc",
        jointz::object(vec![("def", jointz::number().into())])
            .required_keys(["def"])
            .into(),
    )])
    .required_keys(["abc"]);

    let errors = nested.validate(&json!({"abc": {}}));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, r#"required key "def" was not defined"#);
    assert_eq!(errors[0].path, ValuePath::root().push_key("abc"));
    assert_eq!(errors[0].value, json!({}));

    let errors = nested.validate(&json!({"abc": {"def": "string"}}));
    assert_eq!(
        reported(&errors),
        vec![("must be a number", "abc.def".to_string(), &json!("string"))]
    );
}

#[test]
fn test_duplicate_required_keys_not_duplicated() {
    let errors = jointz::object(vec![("abc", jointz::any().into())])
        .required_keys(["abc", "abc"])
        .validate(&json!({}));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, r#"required key "abc" was not defined"#);
}

#[test]
fn test_constant_keys() {
    let validator = jointz::object(vec![("abc", jointz::constant(["def"]).into())]);

    assert!(validator.validate(&json!({"abc": "def"})).is_empty());
    assert_eq!(
        reported(&validator.validate(&json!({"abc": "red"}))),
        vec![(r#"must be one of "def""#, "abc".to_string(), &json!("red"))]
    );
}

#[test]
fn test_allow_unknown_keys_still_validates_known_keys() {
    let validator =
        jointz::object(vec![("abc", jointz::constant(["def"]).into())]).allow_unknown_keys(true);

    assert!(validator.is_valid(&json!({"abc": "def", "ghi": "fgh"})));
    assert!(!validator.is_valid(&json!({"abc": "xyz", "ghi": "fgh"})));
}

#[test]
fn test_deeply_nested_arrays_in_objects() {
    let validator = jointz::object(vec![(
        "abc",
        jointz::object(vec![("def", jointz::array(jointz::number()).into())]).into(),
    )]);

    assert!(validator.is_valid(&json!({"abc": {"def": [3]}})));

    let errors = validator.validate(&json!({"abc": {"def": [3, "4"]}}));
    assert_eq!(errors[0].path.to_string(), "abc.def[1]");
}

#[test]
fn test_specializations_are_independent() {
    let base = jointz::object(vec![
        ("id", jointz::number().integer().into()),
        ("name", jointz::string().into()),
    ]);
    let create = base.clone().required_keys(["name"]);
    let update = base.clone().required_keys(["id"]);

    assert!(create.is_valid(&json!({"name": "a"})));
    assert!(!update.is_valid(&json!({"name": "a"})));
    assert!(update.is_valid(&json!({"id": 1})));
    assert!(!create.is_valid(&json!({"id": 1})));
    assert!(base.is_valid(&json!({})));
}

#[test]
fn test_error_serializes_for_transport() {
    let errors = jointz::object(vec![("abc", jointz::constant(["def"]).into())])
        .validate(&json!({"abc": "red"}));

    let body: Vec<Value> = errors.iter().map(ValidationError::to_json).collect();
    assert_eq!(
        body,
        vec![json!({"message": "must be one of \"def\"", "path": ["abc"], "value": "red"})]
    );
}
