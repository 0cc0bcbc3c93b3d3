//! Payload trees and the two structural transforms over them.
//!
//! A payload is any JSON value supplied as an example request or response.
//! Both transforms borrow their input and hand back a fresh tree:
//!
//! - [`flatten`] turns a nested object into dotted-path entries holding
//!   zero values of the leaf types they replace.
//! - [`collapse`] keeps the shape of a tree but cuts every array down to its
//!   first element, all the way down.

mod collapse;
mod flatten;
mod path;

pub use collapse::collapse;
pub use flatten::flatten;
pub use path::{Path, Segment};

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;

/// An example body: scalar, array or object.
pub type PayloadTree = Value;

/// Dotted path → zero value, in traversal order.
pub type FlatParams = Map<String, Value>;

/// Display type of a documented field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamType {
    /// Classify a value. Null falls through to `Object`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => ParamType::Boolean,
            Value::Number(_) => ParamType::Number,
            Value::String(_) => ParamType::String,
            Value::Array(_) => ParamType::Array,
            Value::Object(_) | Value::Null => ParamType::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "String",
            ParamType::Number => "Number",
            ParamType::Boolean => "Boolean",
            ParamType::Object => "Object",
            ParamType::Array => "Array",
        }
    }

    /// `{Number}` form used inside annotation lines.
    pub fn formatted(self) -> String {
        format!("{{{}}}", self.as_str())
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero value of the same type as `value`.
///
/// Integers map to `0`, floats to `0.0`; anything unrecognized (null) maps to
/// an empty object.
pub fn zero_value(value: &Value) -> Value {
    match value {
        Value::Bool(_) => Value::Bool(false),
        Value::Number(n) if n.is_f64() => Value::from(0.0),
        Value::Number(_) => Value::from(0),
        Value::String(_) => Value::String(String::new()),
        Value::Array(_) => Value::Array(Vec::new()),
        Value::Object(_) | Value::Null => Value::Object(Map::new()),
    }
}

/// True for values that carry no example data: null, `false`, zero, `""`,
/// `[]` and `{}`.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Borrow the top-level object of a tree, or fail with `TypeMismatch`.
pub(crate) fn top_level(tree: &Value) -> Result<&Map<String, Value>> {
    tree.as_object().ok_or(Error::TypeMismatch {
        found: kind_name(tree),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classifies_each_json_kind() {
        assert_eq!(ParamType::of(&json!(false)), ParamType::Boolean);
        assert_eq!(ParamType::of(&json!(0)), ParamType::Number);
        assert_eq!(ParamType::of(&json!(1.5)), ParamType::Number);
        assert_eq!(ParamType::of(&json!("")), ParamType::String);
        assert_eq!(ParamType::of(&json!([])), ParamType::Array);
        assert_eq!(ParamType::of(&json!({})), ParamType::Object);
        assert_eq!(ParamType::of(&Value::Null), ParamType::Object);
    }

    #[test]
    fn formatted_type_tag() {
        assert_eq!(ParamType::Number.formatted(), "{Number}");
    }

    #[test]
    fn zero_values_keep_type() {
        assert_eq!(zero_value(&json!(true)), json!(false));
        assert_eq!(zero_value(&json!(42)), json!(0));
        assert_eq!(zero_value(&json!(4.2)), json!(0.0));
        assert_eq!(zero_value(&json!("x")), json!(""));
        assert_eq!(zero_value(&json!([1])), json!([]));
        assert_eq!(zero_value(&json!({"a": 1})), json!({}));
        assert_eq!(zero_value(&Value::Null), json!({}));
    }

    #[test]
    fn blank_values() {
        for v in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_blank(&v), "{v} should be blank");
        }
        for v in [json!(true), json!(1), json!("a"), json!([0]), json!({"a": 0})] {
            assert!(!is_blank(&v), "{v} should not be blank");
        }
    }

    #[test]
    fn top_level_rejects_non_objects() {
        let err = top_level(&json!("")).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { found: "a string" }));
        assert!(top_level(&json!({})).is_ok());
    }
}
