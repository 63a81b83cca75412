//! Table model.

use std::sync::Arc;

use tracing::debug;

use crate::bank::Bank;
use crate::catalog::QueryExecutor;
use crate::config::{LookupOptions, DEFAULT_SCHEMA};
use crate::error::Result;
use crate::field::{Field, FieldKind, FieldSet};
use crate::reflect::PropertyLookup;

/// A table: name, schema, fields and primary key.
///
/// Fields come either from [`Table::add_field`] or from a reflection run
/// against the catalog. Fields whose name is in the primary key list are
/// flagged with [`Field::is_primary_key`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    schema: String,
    fields: FieldSet,
    primary_keys: Vec<String>,
}

impl Table {
    /// Create an empty table. A missing or empty schema becomes `public`.
    pub fn new(name: impl Into<String>, schema: Option<&str>) -> Self {
        let schema = match schema {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => DEFAULT_SCHEMA.to_string(),
        };

        Self {
            name: name.into(),
            schema,
            fields: FieldSet::new(),
            primary_keys: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// `schema.name`, followed by ` alias` when one is given.
    pub fn fqn(&self, alias: Option<&str>) -> String {
        match alias {
            Some(alias) if !alias.is_empty() => format!("{}.{} {}", self.schema, self.name, alias),
            _ => format!("{}.{}", self.schema, self.name),
        }
    }

    /// `"schema"."name"`, followed by ` "alias"` when one is given.
    pub fn fqn_quoted(&self, alias: Option<&str>) -> String {
        match alias {
            Some(alias) if !alias.is_empty() => {
                format!("\"{}\".\"{}\" \"{}\"", self.schema, self.name, alias)
            }
            _ => format!("\"{}\".\"{}\"", self.schema, self.name),
        }
    }

    /// Reflect fields and primary key with the default options.
    pub fn run_field_lookup<E: QueryExecutor + ?Sized>(
        &mut self,
        executor: &mut E,
    ) -> Result<&mut Self> {
        self.run_field_lookup_with(executor, &LookupOptions::default())
    }

    /// Reflect fields and primary key from the catalog.
    ///
    /// Does nothing if the table already has a primary key or fields. Query
    /// failures are returned unchanged and leave the table as it was.
    pub fn run_field_lookup_with<E: QueryExecutor + ?Sized>(
        &mut self,
        executor: &mut E,
        options: &LookupOptions,
    ) -> Result<&mut Self> {
        if !self.primary_keys.is_empty() || self.is_loaded() {
            debug!("[TABLE] {} already loaded, skipping lookup", self.fqn(None));
            return Ok(self);
        }

        let found = PropertyLookup::new(&self.schema, &self.name, options).run(executor)?;

        self.set_primary_key_fields(found.primary_keys);
        for field in found.fields {
            self.add_field(field);
        }

        Ok(self)
    }

    /// Add a field, replacing any field of the same name.
    pub fn add_field(&mut self, field: impl Into<FieldKind>) -> &mut Self {
        let mut field = field.into();
        if self.primary_keys.iter().any(|k| k == field.name()) {
            field.set_primary_key(true);
        }
        self.fields.add(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldKind> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldKind> {
        self.fields.get_mut(name)
    }

    pub fn field_exists(&self, name: &str) -> bool {
        self.fields.exists(name)
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Set the primary key column names, in key order.
    pub fn set_primary_key_fields<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = names.into_iter().map(Into::into).collect();

        let keys = &self.primary_keys;
        for field in self.fields.iter_mut() {
            let is_key = keys.iter().any(|k| k == field.name());
            field.set_primary_key(is_key);
        }
        self
    }

    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }

    /// True once the table has any field.
    pub fn is_loaded(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Deposit the table into `bank` and return the shared handle.
    pub fn bank_it(self, bank: &Bank, connection: Option<&str>) -> Arc<Table> {
        let table = Arc::new(self);
        bank.deposit(Arc::clone(&table), connection);
        table
    }
}
