//! Validator kinds and the [`Validator`] sum type that composes them.
//!
//! Leaf validators ([`AnyValidator`], [`ConstantValidator`],
//! [`StringValidator`], [`NumberValidator`]) check a single value. Container
//! validators ([`ArrayValidator`], [`TupleValidator`], [`ObjectValidator`])
//! delegate to child validators with an extended path, and the combinator
//! [`OrValidator`] accepts a value matching any of its members.
//!
//! # Example
//!
//! ```rust
//! use jointz::Validate;
//! use serde_json::json;
//!
//! let validator = jointz::object(vec![
//!     ("tags", jointz::array(jointz::string()).into()),
//! ]);
//!
//! let errors = validator.validate(&json!({"tags": ["a", 1]}));
//! assert_eq!(errors[0].path.to_string(), "tags[1]");
//! ```

mod any;
mod array;
mod combinators;
mod constant;
mod numeric;
mod object;
mod string;
mod traits;
mod tuple;

pub use any::{AnyValidator, ANY_VALIDATOR};
pub use array::ArrayValidator;
pub use combinators::OrValidator;
pub use constant::{ConstantValidator, Literal};
pub use numeric::NumberValidator;
pub use object::ObjectValidator;
pub use string::StringValidator;
pub use traits::Validate;
pub use tuple::TupleValidator;

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::ValuePath;

/// Any validator kind.
///
/// Container and combinator validators hold their children as `Validator`
/// values. Every kind converts into it with `.into()`.
#[derive(Debug, Clone)]
pub enum Validator {
    /// See [`AnyValidator`].
    Any(AnyValidator),
    /// See [`ConstantValidator`].
    Constant(ConstantValidator),
    /// See [`StringValidator`].
    String(StringValidator),
    /// See [`NumberValidator`].
    Number(NumberValidator),
    /// See [`ArrayValidator`].
    Array(ArrayValidator),
    /// See [`TupleValidator`].
    Tuple(TupleValidator),
    /// See [`ObjectValidator`].
    Object(ObjectValidator),
    /// See [`OrValidator`].
    Or(OrValidator),
}

impl Default for Validator {
    fn default() -> Self {
        Validator::Any(ANY_VALIDATOR)
    }
}

impl Validate for Validator {
    fn validate_at(&self, value: &Value, path: &ValuePath) -> Vec<ValidationError> {
        match self {
            Validator::Any(v) => v.validate_at(value, path),
            Validator::Constant(v) => v.validate_at(value, path),
            Validator::String(v) => v.validate_at(value, path),
            Validator::Number(v) => v.validate_at(value, path),
            Validator::Array(v) => v.validate_at(value, path),
            Validator::Tuple(v) => v.validate_at(value, path),
            Validator::Object(v) => v.validate_at(value, path),
            Validator::Or(v) => v.validate_at(value, path),
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident => $kind:ty),* $(,)?) => {
        $(
            impl From<$kind> for Validator {
                fn from(validator: $kind) -> Self {
                    Validator::$variant(validator)
                }
            }
        )*
    };
}

impl_from_kind! {
    Any => AnyValidator,
    Constant => ConstantValidator,
    String => StringValidator,
    Number => NumberValidator,
    Array => ArrayValidator,
    Tuple => TupleValidator,
    Object => ObjectValidator,
    Or => OrValidator,
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};
