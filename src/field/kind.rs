//! Tagged union over every field variant.

use super::{
    ArrayField, BitString, Boolean, Character, Date, Enumerated, Field, FieldProps, Integer, Json,
    Network, Numeric, PointField, RangeField, Time, Xml,
};
use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

/// A field of any variant, as stored in a [`FieldSet`](super::FieldSet).
///
/// Implements [`Field`] by delegating to the wrapped variant. Use the
/// `as_*` accessors to reach variant specific state such as
/// [`Character::max_characters`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Integer(Integer),
    Numeric(Numeric),
    Character(Character),
    Boolean(Boolean),
    Date(Date),
    Time(Time),
    Json(Json),
    Xml(Xml),
    Point(PointField),
    Enumerated(Enumerated),
    Array(ArrayField),
    BitString(BitString),
    Network(Network),
    Range(RangeField),
}

macro_rules! dispatch {
    ($self:expr, $field:ident => $body:expr) => {
        match $self {
            FieldKind::Integer($field) => $body,
            FieldKind::Numeric($field) => $body,
            FieldKind::Character($field) => $body,
            FieldKind::Boolean($field) => $body,
            FieldKind::Date($field) => $body,
            FieldKind::Time($field) => $body,
            FieldKind::Json($field) => $body,
            FieldKind::Xml($field) => $body,
            FieldKind::Point($field) => $body,
            FieldKind::Enumerated($field) => $body,
            FieldKind::Array($field) => $body,
            FieldKind::BitString($field) => $body,
            FieldKind::Network($field) => $body,
            FieldKind::Range($field) => $body,
        }
    };
}

macro_rules! variant_conversions {
    ($($variant:ident($ty:ty), $as_ref:ident, $as_mut:ident;)*) => {
        impl FieldKind {
            $(
                pub fn $as_ref(&self) -> Option<&$ty> {
                    match self {
                        FieldKind::$variant(field) => Some(field),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        FieldKind::$variant(field) => Some(field),
                        _ => None,
                    }
                }
            )*
        }

        $(
            impl From<$ty> for FieldKind {
                fn from(field: $ty) -> Self {
                    FieldKind::$variant(field)
                }
            }
        )*
    };
}

variant_conversions! {
    Integer(Integer), as_integer, as_integer_mut;
    Numeric(Numeric), as_numeric, as_numeric_mut;
    Character(Character), as_character, as_character_mut;
    Boolean(Boolean), as_boolean, as_boolean_mut;
    Date(Date), as_date, as_date_mut;
    Time(Time), as_time, as_time_mut;
    Json(Json), as_json, as_json_mut;
    Xml(Xml), as_xml, as_xml_mut;
    Point(PointField), as_point, as_point_mut;
    Enumerated(Enumerated), as_enumerated, as_enumerated_mut;
    Array(ArrayField), as_array, as_array_mut;
    BitString(BitString), as_bit_string, as_bit_string_mut;
    Network(Network), as_network, as_network_mut;
    Range(RangeField), as_range, as_range_mut;
}

impl FieldKind {
    /// Short name of the variant, for logs.
    pub fn variant_name(&self) -> &'static str {
        match self {
            FieldKind::Integer(_) => "Integer",
            FieldKind::Numeric(_) => "Numeric",
            FieldKind::Character(_) => "Character",
            FieldKind::Boolean(_) => "Boolean",
            FieldKind::Date(_) => "Date",
            FieldKind::Time(_) => "Time",
            FieldKind::Json(_) => "Json",
            FieldKind::Xml(_) => "Xml",
            FieldKind::Point(_) => "Point",
            FieldKind::Enumerated(_) => "Enumerated",
            FieldKind::Array(_) => "Array",
            FieldKind::BitString(_) => "BitString",
            FieldKind::Network(_) => "Network",
            FieldKind::Range(_) => "Range",
        }
    }
}

impl Field for FieldKind {
    fn props(&self) -> &FieldProps {
        dispatch!(self, f => f.props())
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        dispatch!(self, f => f.props_mut())
    }

    fn host_type_name(&self) -> &'static str {
        dispatch!(self, f => f.host_type_name())
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        dispatch!(self, f => f.to_host_value(raw))
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        dispatch!(self, f => f.to_bound_value(raw))
    }
}
