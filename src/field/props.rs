//! Attributes shared by every field variant.

use crate::error::{Error, Result};
use crate::types::Value;

/// Shared field attributes: name, nullability, default, defined type,
/// strict flag, comment and primary key flag.
///
/// The name is established once; later `set_name` calls are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldProps {
    name: String,
    null_ok: bool,
    default_value: Option<Value>,
    defined_type: String,
    strict: bool,
    comment: Option<String>,
    primary_key: bool,
}

impl FieldProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            null_ok: true,
            default_value: None,
            defined_type: String::new(),
            strict: false,
            comment: None,
            primary_key: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name if none has been set yet.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.name.is_empty() {
            self.name = name.into();
        }
    }

    pub fn is_null_ok(&self) -> bool {
        self.null_ok
    }

    pub fn set_null_ok(&mut self, flag: bool) {
        self.null_ok = flag;
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn set_default_value(&mut self, value: Value) {
        self.default_value = match value {
            Value::Null => None,
            other => Some(other),
        };
    }

    pub fn defined_type(&self) -> &str {
        &self.defined_type
    }

    pub fn set_defined_type(&mut self, type_name: impl Into<String>) {
        self.defined_type = type_name.into();
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn set_strict(&mut self, flag: bool) {
        self.strict = flag;
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        self.comment = if comment.is_empty() { None } else { Some(comment) };
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn set_primary_key(&mut self, flag: bool) {
        self.primary_key = flag;
    }

    /// Build a range error for this field.
    pub(crate) fn range_error(&self, dir: Direction, problem: &str) -> Error {
        Error::range(
            self.name.clone(),
            format!("Setting {} value of {} {}", dir, self.name, problem),
        )
    }

    /// Resolve a NULL input: error in strict mode when NULL is not allowed,
    /// NULL when allowed, otherwise the type's zero value.
    pub(crate) fn resolve_null(&self, dir: Direction, zero: Value) -> Result<Value> {
        if self.strict && !self.null_ok {
            return Err(self.range_error(dir, "to null is not allowed"));
        }

        Ok(self.fallback(zero))
    }

    /// Value to use in place of input that could not be made to fit:
    /// NULL when allowed, otherwise the type's zero value.
    pub(crate) fn fallback(&self, zero: Value) -> Value {
        if self.null_ok {
            Value::Null
        } else {
            zero
        }
    }
}

/// Which conversion is running, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Host,
    Sql,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Host => f.write_str("host"),
            Direction::Sql => f.write_str("SQL"),
        }
    }
}
