//! A field's value packaged for a parameterized statement.

use super::{bind_key, BindValue, Bindings};

/// The SQL fragment and bindings for one field's value.
///
/// The value marker is what goes into the statement text. It is usually a
/// single placeholder, but composite types embed several (`point(:a, :b)`).
/// Every placeholder used by the marker has exactly one binding.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    field_name: String,
    value_marker: String,
    binding: Bindings,
}

impl FieldValue {
    /// Create an empty value for the named field.
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value_marker: String::new(),
            binding: Bindings::new(),
        }
    }

    /// Create a value whose marker is a single fresh placeholder bound to
    /// `value`.
    pub fn single(field_name: impl Into<String>, value: BindValue) -> Self {
        let key = bind_key();
        let mut rtn = Self::new(field_name);
        rtn.set_value_marker(key.clone()).add_binding(key, value);
        rtn
    }

    /// Name of the field this value belongs to.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Set the SQL fragment to put into the statement.
    pub fn set_value_marker(&mut self, sql: impl Into<String>) -> &mut Self {
        self.value_marker = sql.into();
        self
    }

    /// SQL fragment to put into the statement.
    pub fn value_marker(&self) -> &str {
        &self.value_marker
    }

    /// Set a single binding value.
    pub fn add_binding(&mut self, key: impl Into<String>, value: BindValue) -> &mut Self {
        self.binding.insert(key.into(), value);
        self
    }

    /// All bound values, in insertion order.
    pub fn bound_values(&self) -> &Bindings {
        &self.binding
    }

    /// Number of bound values.
    pub fn bind_count(&self) -> usize {
        self.binding.len()
    }

    /// Every placeholder in the value marker has exactly one binding, and
    /// every binding is used by the marker.
    pub fn is_consistent(&self) -> bool {
        if self.value_marker.is_empty() {
            return false;
        }

        let used = marker_placeholders(&self.value_marker);
        used.iter().all(|key| self.binding.contains_key(*key))
            && self.binding.keys().all(|key| used.contains(&key.as_str()))
    }

    /// Split into the marker and its bindings.
    pub fn into_parts(self) -> (String, Bindings) {
        (self.value_marker, self.binding)
    }
}

/// The `:name` placeholders in a marker, skipping `::` casts and quoted
/// literals.
fn marker_placeholders(marker: &str) -> Vec<&str> {
    let bytes = marker.as_bytes();
    let mut found = Vec::new();
    let mut in_literal = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                in_literal = !in_literal;
                i += 1;
            }
            b':' if !in_literal && bytes.get(i + 1) == Some(&b':') => i += 2,
            b':' if !in_literal => {
                let start = i;
                i += 1;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                if i > start + 1 && !bytes[start + 1].is_ascii_digit() {
                    found.push(&marker[start..i]);
                }
            }
            _ => i += 1,
        }
    }
    found
}
