//! Array field.

use super::{bind_single, pass_through, Direction, Field, FieldProps};
use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

/// Field for any PostgreSQL array column.
///
/// Values pass through unchanged. When bound, a [`Value::List`] is rendered
/// as an array literal such as `{1,2,"a b"}`; text is bound as given.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayField {
    props: FieldProps,
}

impl ArrayField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
        }
    }
}

impl Field for ArrayField {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "Vec<Value>"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        pass_through(&self.props, raw, Direction::Host, Value::List(Vec::new()))
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let host = pass_through(&self.props, raw, Direction::Sql, Value::List(Vec::new()))?;
        Ok(bind_single(&self.props, &host))
    }
}
