//! Field types and their value conversion rules.
//!
//! Each PostgreSQL column type reflected from the catalog maps onto one field
//! variant. Every variant converts raw values two ways:
//!
//! - [`Field::to_host_value`] gives the application-side [`Value`].
//! - [`Field::to_bound_value`] gives a [`FieldValue`] ready for a
//!   parameterized statement.
//!
//! Both follow the same policy. In strict mode, a disallowed NULL or a value
//! the column cannot hold fails with [`Error::Range`](crate::Error::Range).
//! Otherwise the value is normalized: NULL when the column allows it, else
//! the type's zero value (0, false, empty string) or a truncated value.
//!
//! | Variant | Catalog types | Host value |
//! |---------|---------------|------------|
//! | [`Integer`] | smallint, integer, bigint | `Int` |
//! | [`Numeric`] | numeric, money, real, double precision | `Float` |
//! | [`Character`] | character, character varying, text | `Text` |
//! | [`Boolean`] | boolean | `Bool` |
//! | [`Date`] | date, timestamp, timestamptz | `DateTime` |
//! | [`Time`] | time, timetz | pass-through |
//! | [`Json`] | json, jsonb | `Json` |
//! | [`Xml`] | xml | pass-through |
//! | [`PointField`] | point | `Point` |
//! | [`Enumerated`] | user-defined enums | pass-through |
//! | [`ArrayField`] | ARRAY | pass-through |
//! | [`BitString`], [`Network`], [`RangeField`] | bit, inet/cidr/macaddr, ranges | pass-through |

mod array;
mod boolean;
mod character;
pub(crate) mod coerce;
mod date;
mod enumerated;
mod integer;
mod json;
mod kind;
mod numeric;
mod passthrough;
mod point;
mod props;
mod set;

pub use array::ArrayField;
pub use boolean::Boolean;
pub use character::Character;
pub use date::Date;
pub use enumerated::Enumerated;
pub use integer::Integer;
pub use json::Json;
pub use kind::FieldKind;
pub use numeric::Numeric;
pub use passthrough::{BitString, Network, RangeField, Time, Xml};
pub use point::PointField;
pub use props::FieldProps;
pub use set::FieldSet;

pub(crate) use props::Direction;

use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

/// Behavior shared by every column type.
///
/// Implementors provide access to their [`FieldProps`] and the two
/// conversions; everything else has a default built on the props.
pub trait Field {
    /// Shared attributes.
    fn props(&self) -> &FieldProps;

    /// Shared attributes, mutable.
    fn props_mut(&mut self) -> &mut FieldProps;

    /// Name of the Rust type values of this field convert into.
    fn host_type_name(&self) -> &'static str;

    /// Convert a raw value to its host representation.
    fn to_host_value(&self, raw: &Value) -> Result<Value>;

    /// Convert a raw value to a placeholder and bindings.
    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue>;

    /// Name of the field, unquoted.
    fn name(&self) -> &str {
        self.props().name()
    }

    /// Set the name of the field. Once set, the name does not change.
    fn set_name(&mut self, name: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_name(name);
        self
    }

    /// Quoted name, optionally prefixed with a quoted table alias.
    fn fqn(&self, table_alias: Option<&str>) -> String {
        match table_alias {
            Some(alias) if !alias.is_empty() => format!("\"{}\".\"{}\"", alias, self.name()),
            _ => format!("\"{}\"", self.name()),
        }
    }

    fn is_null_ok(&self) -> bool {
        self.props().is_null_ok()
    }

    fn set_null_ok(&mut self, flag: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_null_ok(flag);
        self
    }

    /// Default as reported by the catalog (an SQL expression) or as set by
    /// the application.
    fn default_value(&self) -> Option<&Value> {
        self.props().default_value()
    }

    fn set_default_value(&mut self, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_default_value(value.into());
        self
    }

    /// Catalog type name (the column's UDT name).
    fn defined_type(&self) -> &str {
        self.props().defined_type()
    }

    fn set_defined_type(&mut self, type_name: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_defined_type(type_name);
        self
    }

    fn is_strict(&self) -> bool {
        self.props().is_strict()
    }

    /// Fail on values that do not fit instead of normalizing them.
    fn set_strict_values(&mut self, flag: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_strict(flag);
        self
    }

    fn comment(&self) -> Option<&str> {
        self.props().comment()
    }

    fn set_comment(&mut self, comment: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_comment(comment);
        self
    }

    fn is_primary_key(&self) -> bool {
        self.props().is_primary_key()
    }

    fn set_primary_key(&mut self, flag: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.props_mut().set_primary_key(flag);
        self
    }
}

/// NULL passes through the null policy; anything else is returned as-is.
pub(crate) fn pass_through(
    props: &FieldProps,
    raw: &Value,
    dir: Direction,
    zero: Value,
) -> Result<Value> {
    if raw.is_null() {
        props.resolve_null(dir, zero)
    } else {
        Ok(raw.clone())
    }
}

/// Package a converted host value behind a single fresh placeholder.
pub(crate) fn bind_single(props: &FieldProps, host: &Value) -> FieldValue {
    FieldValue::single(props.name(), coerce::to_bind_value(host))
}
