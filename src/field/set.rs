//! Ordered, name keyed collection of fields.

use indexmap::IndexMap;

use super::{Field, FieldKind};

/// The fields of one table, in insertion order.
///
/// Names are unique; adding a field under an existing name replaces the old
/// one in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    fields: IndexMap<String, FieldKind>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, keyed by its name.
    pub fn add(&mut self, field: impl Into<FieldKind>) -> &mut Self {
        let field = field.into();
        self.fields.insert(field.name().to_string(), field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldKind> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldKind> {
        self.fields.get_mut(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of distinct field names.
    pub fn count(&self) -> usize {
        self.fields.len()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldKind> {
        self.fields.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FieldKind> {
        self.fields.values_mut()
    }

    /// One line per field pairing its host type with its name, followed by
    /// the column comment when there is one. Types and names are padded to
    /// line up. Nullable fields show their type as `Option<...>`.
    ///
    /// ```text
    /// i64          id     Row identifier
    /// String       label
    /// Option<bool> active
    /// ```
    pub fn describe_all(&self) -> String {
        let types: Vec<String> = self.iter().map(describe_type).collect();

        let type_len = types.iter().map(|t| t.chars().count()).max().unwrap_or(0);
        let name_len = self.names().map(|n| n.chars().count()).max().unwrap_or(0);

        let mut out = String::new();
        for (field, ty) in self.iter().zip(&types) {
            match field.comment() {
                Some(comment) => out.push_str(&format!(
                    "{:type_w$}{:name_w$}{}",
                    ty,
                    field.name(),
                    comment,
                    type_w = type_len + 1,
                    name_w = name_len + 1,
                )),
                None => out.push_str(&format!(
                    "{:type_w$}{}",
                    ty,
                    field.name(),
                    type_w = type_len + 1,
                )),
            }
            out.push('\n');
        }
        out
    }
}

fn describe_type(field: &FieldKind) -> String {
    if field.is_null_ok() {
        format!("Option<{}>", field.host_type_name())
    } else {
        field.host_type_name().to_string()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldKind;
    type IntoIter = indexmap::map::Values<'a, String, FieldKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}

impl IntoIterator for FieldSet {
    type Item = FieldKind;
    type IntoIter = indexmap::map::IntoValues<String, FieldKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_values()
    }
}
