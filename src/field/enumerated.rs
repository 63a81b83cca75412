//! Enumerated field for user-defined enum types.

use super::{bind_single, pass_through, Direction, Field, FieldProps};
use crate::bind::{BindValue, Bindings, FieldValue};
use crate::catalog::{sql, QueryExecutor};
use crate::error::Result;
use crate::types::Value;

/// Field backed by a PostgreSQL enum type.
///
/// The enum type name, its schema and the list of labels are established
/// once. Later setter calls leave them alone. Values are passed through
/// without checking them against the labels; the database already does.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumerated {
    props: FieldProps,
    enum_type: String,
    schema: String,
    values: Vec<String>,
}

impl Enumerated {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
            enum_type: String::new(),
            schema: String::new(),
            values: Vec::new(),
        }
    }

    /// Catalog name of the enum type.
    pub fn enum_type(&self) -> &str {
        &self.enum_type
    }

    pub fn set_enum_type(&mut self, enum_type: &str) -> &mut Self {
        if self.enum_type.is_empty() {
            self.enum_type = enum_type.to_string();
        }
        self
    }

    /// Schema the enum type lives in.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn set_schema(&mut self, schema: &str) -> &mut Self {
        if self.schema.is_empty() {
            self.schema = schema.to_string();
        }
        self
    }

    /// Allowed labels, in the enum's declared order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Set the allowed labels. Only the first non-empty list sticks.
    pub fn set_values<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.values.is_empty() {
            self.values = values.into_iter().map(Into::into).collect();
        }
        self
    }

    /// True if `label` is one of the allowed labels.
    pub fn is_allowed(&self, label: &str) -> bool {
        self.values.iter().any(|v| v == label)
    }

    /// Load the allowed labels from the catalog.
    ///
    /// Does nothing once labels are known. Query failures are returned as is.
    pub fn run_enum_values<E: QueryExecutor + ?Sized>(
        &mut self,
        executor: &mut E,
    ) -> Result<&mut Self> {
        if !self.values.is_empty() {
            return Ok(self);
        }

        let mut params = Bindings::new();
        params.insert(":enum_type".to_string(), BindValue::from(self.enum_type.as_str()));
        params.insert(":enum_schema".to_string(), BindValue::from(self.schema.as_str()));

        let rows = executor.query(sql::ENUM_VALUES_SQL, &params)?;

        let mut labels = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(label) = row.get_str("enumlabel")? {
                labels.push(label);
            }
        }

        Ok(self.set_values(labels))
    }
}

impl Field for Enumerated {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "String"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        pass_through(&self.props, raw, Direction::Host, Value::Text(String::new()))
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let host = pass_through(&self.props, raw, Direction::Sql, Value::Text(String::new()))?;
        Ok(bind_single(&self.props, &host))
    }
}
