//! Value enum for dynamic input data

use super::Record;

/// A dynamic value to be displayed as a tree.
///
/// Host data is converted into this closed set of variants at the boundary,
/// so the builder never has to inspect types at run time. JSON converts
/// directly with `Value::from(serde_json::Value)` or by deserializing into
/// `Value`.
///
/// # Example
///
/// ```
/// use objview_lib::model::{Record, Value};
///
/// let name = Value::from("Ada");
/// let age = Value::from(36);
/// let tags = Value::from(vec![Value::from("math"), Value::from("engines")]);
/// let person = Value::from(Record::new().set("name", name).set("age", age).set("tags", tags));
/// assert!(person.is_container());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null.
    Null,
    /// Absent / undefined, distinct from null.
    Absent,
    /// Boolean value.
    Boolean(bool),
    /// 64-bit integer.
    Integer(i64),
    /// 64-bit floating point. May itself hold NaN or an integral value.
    Float(f64),
    /// Not-a-number.
    NaN,
    /// String value.
    String(String),
    /// A callable, carried as its display text.
    Callable(String),
    /// Named fields in insertion order.
    Record(Record),
    /// Ordered elements.
    Sequence(Vec<Value>),
}

impl Value {
    /// Creates a callable value from its display text.
    pub fn callable(text: impl Into<String>) -> Self {
        Value::Callable(text.into())
    }

    /// Returns `true` for records and sequences.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Record(_) | Value::Sequence(_))
    }

    /// Returns the record, if this is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the sequence elements, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Sequence(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Absent,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
