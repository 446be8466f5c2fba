//! Type classification and scalar rendering.

use crate::model::NodeType;
use crate::model::Value;

/// Returns the display type of a value.
///
/// Floats are reclassified by content: a NaN float is `Nan` and a finite
/// integral float is `Integer`, so `2.0` and `2` display the same way.
pub fn classify(value: &Value) -> NodeType {
    match value {
        Value::Null => NodeType::Null,
        Value::Absent => NodeType::Undefined,
        Value::Sequence(_) => NodeType::Array,
        Value::Integer(_) => NodeType::Integer,
        Value::NaN => NodeType::Nan,
        Value::Float(f) if f.is_nan() => NodeType::Nan,
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => NodeType::Integer,
        Value::Float(_) => NodeType::Float,
        Value::Callable(_) => NodeType::Callable,
        Value::Record(_) => NodeType::Object,
        Value::String(_) => NodeType::String,
        Value::Boolean(_) => NodeType::Boolean,
    }
}

/// Returns the string rendering of a scalar, or `None` for containers.
pub fn render(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => "null".to_string(),
        Value::Absent => "undefined".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::NaN => "NaN".to_string(),
        Value::Float(f) => render_float(*f),
        Value::String(s) => s.clone(),
        Value::Callable(text) => text.clone(),
        Value::Record(_) | Value::Sequence(_) => return None,
    };
    Some(text)
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        // Drop the sign of negative zero.
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        render_exponent(f)
    } else {
        f.to_string()
    }
}

/// Shortest round-trip digits in exponent form, with an explicit sign on
/// the exponent: `1e+21`, `1.5e-7`.
fn render_exponent(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}
