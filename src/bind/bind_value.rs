//! Scalar values bound to SQL placeholders.

use indexmap::IndexMap;
use std::fmt;

/// Placeholder key to bound scalar, in the order the bindings were added.
pub type Bindings = IndexMap<String, BindValue>;

/// A scalar ready to be bound to a statement parameter.
///
/// No quoting or escaping is applied; the driver binds the value as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// SQL NULL.
    Null,
    /// Boolean parameter.
    Bool(bool),
    /// Integer parameter.
    Int(i64),
    /// Floating point parameter.
    Float(f64),
    /// Text parameter.
    Text(String),
}

impl BindValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, BindValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BindValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

impl From<f64> for BindValue {
    fn from(value: f64) -> Self {
        BindValue::Float(value)
    }
}

impl From<bool> for BindValue {
    fn from(value: bool) -> Self {
        BindValue::Bool(value)
    }
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Null => write!(f, "NULL"),
            BindValue::Bool(b) => write!(f, "{}", b),
            BindValue::Int(n) => write!(f, "{}", n),
            BindValue::Float(n) => write!(f, "{}", n),
            BindValue::Text(s) => write!(f, "{}", s),
        }
    }
}
