//! Field types whose values are passed through as-is.
//!
//! These columns only get the null policy applied. No structural checks are
//! made; PostgreSQL validates the text on its side.

use super::{bind_single, pass_through, Direction, Field, FieldProps};
use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

macro_rules! pass_through_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            props: FieldProps,
        }

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    props: FieldProps::new(name),
                }
            }
        }

        impl Field for $name {
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
                let host =
                    pass_through(&self.props, raw, Direction::Sql, Value::Text(String::new()))?;
                Ok(bind_single(&self.props, &host))
            }
        }
    };
}

pass_through_field!(
    /// Time of day, with or without time zone.
    Time
);

pass_through_field!(
    /// XML document.
    Xml
);

pass_through_field!(
    /// Fixed or varying bit string.
    BitString
);

pass_through_field!(
    /// Network address (inet, cidr, macaddr, macaddr8).
    Network
);

pass_through_field!(
    /// Range type (int4range, daterange, ...).
    RangeField
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindValue;
    use crate::error::Error;

    #[test]
    fn test_values_untouched() {
        let field = Xml::new("doc");
        assert_eq!(
            field.to_host_value(&Value::from("<a>not closed")).unwrap(),
            Value::from("<a>not closed")
        );

        let field = Time::new("starts_at");
        let val = field.to_bound_value(&Value::from("10:30:00")).unwrap();
        assert_eq!(val.bound_values()[val.value_marker()], BindValue::from("10:30:00"));
    }

    #[test]
    fn test_null_policy() {
        let mut field = Network::new("addr");
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Null);

        field.set_null_ok(false);
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::from(""));

        field.set_strict_values(true);
        assert!(matches!(
            field.to_bound_value(&Value::Null),
            Err(Error::Range { .. })
        ));
    }

    #[test]
    fn test_host_type_names() {
        assert_eq!(BitString::new("b").host_type_name(), "String");
        assert_eq!(RangeField::new("r").host_type_name(), "String");
    }
}
