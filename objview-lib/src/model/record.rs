//! Order-preserving record

use super::Value;

/// A record of named fields that remembers insertion order.
///
/// Field order is display order, so records are backed by a `Vec` rather
/// than a hash map. Inserting a name that already exists replaces the value
/// in its original position.
///
/// # Example
///
/// ```
/// use objview_lib::model::Record;
///
/// let record = Record::new()
///     .set("b", 1)
///     .set("a", 2)
///     .set("b", 3);
///
/// let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["b", "a"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value, returning the previous value if the field existed.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((field, value));
                None
            }
        }
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        let index = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(index).1)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut record = Record::new().set("x", 1).set("y", 2);
        let previous = record.insert("x", "replaced");

        assert_eq!(previous, Some(Value::Integer(1)));
        let fields: Vec<_> = record.iter().collect();
        assert_eq!(fields[0], ("x", &Value::from("replaced")));
        assert_eq!(fields[1], ("y", &Value::Integer(2)));
    }

    #[test]
    fn test_remove() {
        let mut record = Record::new().set("x", 1).set("y", 2);
        assert_eq!(record.remove("x"), Some(Value::Integer(1)));
        assert_eq!(record.remove("x"), None);
        assert_eq!(record.len(), 1);
        assert!(!record.contains("x"));
        assert!(record.contains("y"));
    }

    #[test]
    fn test_from_iterator() {
        let record: Record = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(record.get("b"), Some(&Value::Integer(2)));
        assert!(record.get("c").is_none());
    }
}
