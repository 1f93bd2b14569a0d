//! Field value types used for dynamic record access

use serde::{Deserialize, Serialize};

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare this value against a raw query string.
    ///
    /// Strings compare exactly, numbers compare after parsing the query,
    /// booleans accept `true`/`false`. `Null` never matches.
    pub fn matches_str(&self, query: &str) -> bool {
        match self {
            FieldValue::String(s) => s == query,
            FieldValue::Integer(i) => query.parse::<i64>().is_ok_and(|q| q == *i),
            FieldValue::Float(f) => query
                .parse::<f64>()
                .is_ok_and(|q| (q - *f).abs() < f64::EPSILON),
            FieldValue::Boolean(b) => query.parse::<bool>().is_ok_and(|q| q == *b),
            FieldValue::Null => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::from)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Float)
    }
}
