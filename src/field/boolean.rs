//! Boolean field.

use super::coerce::{self, parse_bool};
use super::{Direction, Field, FieldProps};
use crate::bind::{BindValue, FieldValue};
use crate::error::Result;
use crate::types::Value;

/// True/false field.
///
/// Recognizes real booleans and the strings `t`, `f`, `true`, `false` in any
/// case. A NULL input resolves to the column default when that default is a
/// boolean literal. SQL bindings are the literal text `true` / `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    props: FieldProps,
}

impl Boolean {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
        }
    }

    /// The column default, when it reads as a boolean.
    pub fn default_bool(&self) -> Option<bool> {
        match self.props.default_value()? {
            Value::Text(expr) => parse_bool(&Value::from(coerce::default_literal(expr))),
            other => parse_bool(other),
        }
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        if let Some(b) = parse_bool(raw) {
            return Ok(Value::Bool(b));
        }

        if raw.is_null() {
            if let Some(b) = self.default_bool() {
                return Ok(Value::Bool(b));
            }
            return self.props.resolve_null(dir, Value::Bool(false));
        }

        if self.props.is_strict() {
            return Err(self.props.range_error(dir, "is not a boolean"));
        }

        let truthy = match raw {
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Text(s) => !s.is_empty() && s != "0",
            Value::List(items) => !items.is_empty(),
            _ => true,
        };
        Ok(Value::Bool(truthy))
    }
}

impl Field for Boolean {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "bool"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        self.convert(raw, Direction::Host)
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let bound = match self.convert(raw, Direction::Sql)? {
            Value::Bool(true) => BindValue::from("true"),
            Value::Bool(false) => BindValue::from("false"),
            _ => BindValue::Null,
        };
        Ok(FieldValue::single(self.props.name(), bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_recognized_strings() {
        let field = Boolean::new("trueorfalse");
        assert_eq!(field.to_host_value(&Value::from("t")).unwrap(), Value::Bool(true));
        assert_eq!(field.to_host_value(&Value::from("F")).unwrap(), Value::Bool(false));
        assert_eq!(field.to_host_value(&Value::from("True")).unwrap(), Value::Bool(true));
        assert_eq!(field.to_host_value(&Value::from("false")).unwrap(), Value::Bool(false));
        assert_eq!(field.to_host_value(&Value::Bool(true)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_null_resolution_order() {
        let mut field = Boolean::new("flag");
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Null);

        field.set_null_ok(false);
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Bool(false));

        field.set_default_value("true");
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Bool(true));

        field.set_null_ok(true);
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_default_with_cast() {
        let mut field = Boolean::new("flag");
        field.set_default_value("'f'::boolean");
        assert_eq!(field.default_bool(), Some(false));

        field.set_default_value(Value::Bool(true));
        assert_eq!(field.default_bool(), Some(true));

        field.set_default_value("now()");
        assert_eq!(field.default_bool(), None);
    }

    #[test]
    fn test_lenient_truthiness() {
        let field = Boolean::new("flag");
        assert_eq!(field.to_host_value(&Value::Int(2)).unwrap(), Value::Bool(true));
        assert_eq!(field.to_host_value(&Value::Int(0)).unwrap(), Value::Bool(false));
        assert_eq!(field.to_host_value(&Value::from("yes")).unwrap(), Value::Bool(true));
        assert_eq!(field.to_host_value(&Value::from("")).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_strict_mode() {
        let mut field = Boolean::new("flag");
        field.set_strict_values(true).set_null_ok(false);

        assert!(matches!(
            field.to_host_value(&Value::from("yes")),
            Err(Error::Range { .. })
        ));
        assert!(matches!(field.to_host_value(&Value::Null), Err(Error::Range { .. })));
        assert_eq!(field.to_host_value(&Value::from("t")).unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_bound_literals() {
        let field = Boolean::new("flag");

        let val = field.to_bound_value(&Value::from("t")).unwrap();
        assert_eq!(val.bound_values()[val.value_marker()], BindValue::from("true"));

        let val = field.to_bound_value(&Value::Bool(false)).unwrap();
        assert_eq!(val.bound_values()[val.value_marker()], BindValue::from("false"));

        let val = field.to_bound_value(&Value::Null).unwrap();
        assert!(val.bound_values()[val.value_marker()].is_null());
    }
}
