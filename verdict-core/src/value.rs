//! Input value model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Input data: field name to value.
pub type Data = HashMap<String, Value>;

/// Rule expressions per field, in evaluation order.
pub type RuleMap = HashMap<String, Vec<String>>;

/// A dynamically-typed input value.
///
/// The set of kinds is closed. Every integer width is carried as `Int` and
/// every float width as `Float`; a field missing from the input is `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Missing or null
    #[default]
    Absent,
}

/// Discriminant of a [`Value`], used in log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
    Absent,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Absent => "absent",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Absent => ValueKind::Absent,
        }
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! int_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

int_from!(i8, i16, i32, i64, isize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::Absent => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths_collapse_to_int() {
        assert_eq!(Value::from(7i8), Value::Int(7));
        assert_eq!(Value::from(-7i16), Value::Int(-7));
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(7isize), Value::Int(7));
    }

    #[test]
    fn test_float_widths_collapse_to_float() {
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from(5.0f64).kind(), ValueKind::Float);
    }

    #[test]
    fn test_none_is_absent() {
        assert_eq!(Value::from(None::<i32>), Value::Absent);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
        assert_eq!(Value::default(), Value::Absent);
    }

    #[test]
    fn test_deserialize_json_kinds() {
        let data: Data = serde_json::from_str(
            r#"{"age": 21, "score": 9.5, "whole": 5.0, "name": "rick", "ok": true, "gone": null}"#,
        )
        .unwrap();

        assert_eq!(data["age"], Value::Int(21));
        assert_eq!(data["score"], Value::Float(9.5));
        assert_eq!(data["whole"], Value::Float(5.0));
        assert_eq!(data["name"], Value::String("rick".to_string()));
        assert_eq!(data["ok"], Value::Bool(true));
        assert_eq!(data["gone"], Value::Absent);
    }

    #[test]
    fn test_deserialize_rejects_arrays() {
        let result: Result<Value, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_absent_as_null() {
        assert_eq!(serde_json::to_string(&Value::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Int(3)).unwrap(), "3");
    }
}
