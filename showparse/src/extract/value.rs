//! Extracted values and records.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A scalar or nested value captured from command output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the value as a nested record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Record(record) => write!(f, "{record}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

/// An ordered mapping from field name to [`Value`].
///
/// Records are built field by field while a command's output is scanned.
/// Every field is optional: consumers should not assume a field is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Check if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if a field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Get a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Get a string field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Get an integer field.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    /// Get a float field.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Get a bool field.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Get a list field.
    pub fn get_list(&self, field: &str) -> Option<&[Value]> {
        self.get(field).and_then(Value::as_list)
    }

    /// Get a nested record field.
    pub fn get_record(&self, field: &str) -> Option<&Record> {
        self.get(field).and_then(Value::as_record)
    }

    /// Set a field, overwriting any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Append to a list field, creating it if needed.
    ///
    /// A non-list value already stored under `field` is replaced.
    pub fn push(&mut self, field: &str, value: Value) {
        self.with_list(field, |items| items.push(value));
    }

    /// Append to a list field unless an equal value is already present.
    pub fn push_unique(&mut self, field: &str, value: Value) {
        self.with_list(field, |items| {
            if !items.contains(&value) {
                items.push(value);
            }
        });
    }

    /// Set `key` inside the nested record stored under `field`.
    pub fn insert_nested(&mut self, field: &str, key: impl Into<String>, value: Value) {
        let entry = self
            .0
            .entry(field.to_string())
            .or_insert_with(|| Value::Record(Record::new()));
        match entry {
            Value::Record(nested) => nested.insert(key, value),
            other => {
                let mut nested = Record::new();
                nested.insert(key, value);
                *other = Value::Record(nested);
            }
        }
    }

    /// Make sure a list field exists, empty if nothing was collected.
    pub fn ensure_list(&mut self, field: &str) {
        self.with_list(field, |_| {});
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn with_list(&mut self, field: &str, f: impl FnOnce(&mut Vec<Value>)) {
        let entry = self
            .0
            .entry(field.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        match entry {
            Value::List(items) => f(items),
            other => {
                let mut items = Vec::new();
                f(&mut items);
                *other = Value::List(items);
            }
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (field, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
