//! Read-only capability over host JSON values
//!
//! The evaluator only ever inspects values through [`JsonValue`], so any JSON
//! representation can be queried by implementing it. An implementation for
//! [`serde_json::Value`] is provided.

use serde_json::Value;

/// The kind of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// Read-only view of a JSON value
pub trait JsonValue {
    fn kind(&self) -> ValueKind;

    fn as_bool(&self) -> Option<bool>;

    /// Number as an integer when it is one and fits
    fn as_i64(&self) -> Option<i64>;

    fn as_f64(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    /// Object member by key
    fn member(&self, key: &str) -> Option<&Self>;

    /// Array element by zero-based index
    fn element(&self, index: usize) -> Option<&Self>;

    /// Number of array elements or object members; 0 for scalars
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Object members in insertion order; empty for non-objects
    fn members(&self) -> impl Iterator<Item = (&str, &Self)>;

    /// Array elements in index order; empty for non-arrays
    fn elements(&self) -> impl Iterator<Item = &Self>;

    fn is_array(&self) -> bool {
        self.kind() == ValueKind::Array
    }

    fn is_object(&self) -> bool {
        self.kind() == ValueKind::Object
    }
}

impl JsonValue for Value {
    fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    #[inline]
    fn as_i64(&self) -> Option<i64> {
        Value::as_i64(self)
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        Value::as_f64(self)
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn member(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|items| items.get(index))
    }

    fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    fn members(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn elements(&self) -> impl Iterator<Item = &Self> {
        self.as_array().into_iter().flatten()
    }
}
