// Numeric coercion helpers

use crate::Value;

/// Widen an integer or float value to `f64`.
///
/// Returns `None` for every non-numeric kind, including numeric-looking
/// strings.
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::Bool(_) | Value::String(_) | Value::Absent => None,
    }
}

/// Whether `f` has no fractional part.
///
/// `5.0` is whole, `5.3` is not. NaN is never whole.
pub fn is_whole_number(f: f64) -> bool {
    f == (f as i64) as f64
}
