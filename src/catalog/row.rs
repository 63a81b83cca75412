//! Row type for catalog query results.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::Value;

/// Column names of a result set, shared by every row in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowColumns {
    names: Vec<String>,
}

impl RowColumns {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Position of a column, matched exactly.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A row of query results.
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values.
    values: Vec<Value>,
    /// Shared column names (reference counted).
    columns: Arc<RowColumns>,
}

impl Row {
    /// Create a new row with values and shared column names.
    pub fn new(values: Vec<Value>, columns: Arc<RowColumns>) -> Self {
        Self { values, columns }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get value by column name.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.columns
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a column as text. NULL gives `None`; numbers and booleans are
    /// rendered as text.
    pub fn get_str(&self, name: &str) -> Result<Option<String>> {
        match self.require(name)? {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            scalar @ (Value::Int(_) | Value::Float(_) | Value::Bool(_)) => {
                Ok(Some(scalar.to_string()))
            }
            other => Err(Error::type_conversion(format!(
                "column {} holds {:?}, expected text",
                name, other
            ))),
        }
    }

    /// Get a column as an integer. NULL gives `None`; integer text is parsed.
    pub fn get_i64(&self, name: &str) -> Result<Option<i64>> {
        match self.require(name)? {
            Value::Null => Ok(None),
            value => value.to_i64().map(Some).ok_or_else(|| {
                Error::type_conversion(format!(
                    "column {} holds {:?}, expected an integer",
                    name, value
                ))
            }),
        }
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.get_by_name(name).ok_or_else(|| Error::ColumnNotFound {
            name: name.to_string(),
        })
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.names()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
