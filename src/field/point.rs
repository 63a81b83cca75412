//! Geometric point field.

use super::{Direction, Field, FieldProps};
use crate::bind::{bind_key, BindValue, FieldValue};
use crate::error::Result;
use crate::types::{Point, Value};

/// Field for the PostgreSQL `point` type.
///
/// Accepts the catalog text `(x,y)`, a [`Point`], or a list of at least two
/// coordinates. A list with fewer than two entries is rejected whether or not
/// the field is strict. Otherwise unreadable coordinates become `0.0`, unless
/// the field is strict.
#[derive(Debug, Clone, PartialEq)]
pub struct PointField {
    props: FieldProps,
}

impl PointField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
        }
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        let point = match raw {
            Value::Null => return self.props.resolve_null(dir, Value::Point(Point::default())),
            Value::Point(p) => *p,
            Value::Text(text) if self.props.is_strict() => match Point::try_parse(text) {
                Some(p) => p,
                None => return Err(self.props.range_error(dir, "is not a valid point")),
            },
            Value::Text(text) => Point::parse(text),
            Value::List(items) if items.len() >= 2 => {
                match (items[0].to_f64(), items[1].to_f64()) {
                    (Some(x), Some(y)) => Point::new(x, y),
                    _ if self.props.is_strict() => {
                        return Err(self.props.range_error(dir, "has non-numeric coordinates"));
                    }
                    (x, y) => Point::new(x.unwrap_or(0.0), y.unwrap_or(0.0)),
                }
            }
            Value::List(_) => {
                return Err(self.props.range_error(dir, "needs a list with 2 coordinates"));
            }
            _ => {
                return Err(self.props.range_error(dir, "must be given a pair of coordinates"));
            }
        };

        Ok(Value::Point(point))
    }
}

impl Field for PointField {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "Point"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        self.convert(raw, Direction::Host)
    }

    /// Produces `point(:x, :y)` with one binding per coordinate, or a single
    /// NULL binding.
    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let point = match self.convert(raw, Direction::Sql)? {
            Value::Point(p) => p,
            _ => return Ok(FieldValue::single(self.props.name(), BindValue::Null)),
        };

        let x_key = bind_key();
        let y_key = bind_key();

        let mut rtn = FieldValue::new(self.props.name());
        rtn.set_value_marker(format!("point({}, {})", x_key, y_key))
            .add_binding(x_key, BindValue::Float(point.x))
            .add_binding(y_key, BindValue::Float(point.y));

        Ok(rtn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_host_from_catalog_text() {
        let field = PointField::new("location");
        let host = field.to_host_value(&Value::from("(3.14, 4.53)")).unwrap();
        assert_eq!(host.as_point().unwrap(), [3.14, 4.53]);
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_bound_composite_marker() {
        let field = PointField::new("location");
        let val = field
            .to_bound_value(&Value::List(vec![Value::Int(3), Value::Float(4.53)]))
            .unwrap();

        assert_eq!(val.bind_count(), 2);
        assert!(val.is_consistent());

        let keys: Vec<&String> = val.bound_values().keys().collect();
        assert_eq!(
            val.value_marker(),
            format!("point({}, {})", keys[0], keys[1])
        );
        assert_ne!(keys[0], keys[1]);

        let coords: Vec<&BindValue> = val.bound_values().values().collect();
        assert_eq!(coords, [&BindValue::Float(3.0), &BindValue::Float(4.53)]);
    }

    #[test]
    fn test_short_list_always_rejected() {
        let field = PointField::new("location");
        assert!(matches!(
            field.to_bound_value(&Value::List(vec![Value::Int(3)])),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            field.to_host_value(&Value::Int(3)),
            Err(Error::Range { .. })
        ));
    }

    #[test]
    fn test_null_binding() {
        let mut field = PointField::new("location");
        let val = field.to_bound_value(&Value::Null).unwrap();
        assert_eq!(val.bind_count(), 1);
        assert!(val.bound_values()[val.value_marker()].is_null());

        field.set_null_ok(false);
        let val = field.to_bound_value(&Value::Null).unwrap();
        assert_eq!(val.bind_count(), 2);
        assert!(val.value_marker().starts_with("point("));
    }

    #[test]
    fn test_strict_rejects_bad_text() {
        let mut field = PointField::new("location");
        field.set_strict_values(true).set_null_ok(false);

        assert!(matches!(
            field.to_host_value(&Value::from("not a point")),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            field.to_bound_value(&Value::from("hello")),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            field.to_host_value(&Value::from(vec!["x", "y"])),
            Err(Error::Range { .. })
        ));
        assert_eq!(
            field.to_host_value(&Value::from("(1.5, -2)")).unwrap(),
            Value::Point(Point::new(1.5, -2.0))
        );
        assert_eq!(
            field.to_host_value(&Value::from(vec!["3", "4"])).unwrap(),
            Value::Point(Point::new(3.0, 4.0))
        );
    }

    #[test]
    fn test_lenient_bad_coordinates_become_zero() {
        let field = PointField::new("location");
        assert_eq!(
            field.to_host_value(&Value::from("hello")).unwrap(),
            Value::Point(Point::new(0.0, 0.0))
        );
        assert_eq!(
            field.to_host_value(&Value::from(vec!["x", "2"])).unwrap(),
            Value::Point(Point::new(0.0, 2.0))
        );
    }

    #[test]
    fn test_extra_coordinates_ignored() {
        let field = PointField::new("location");
        let raw = Value::from(vec![1.0, 2.0, 9.0]);
        assert_eq!(field.to_host_value(&raw).unwrap(), Value::Point(Point::new(1.0, 2.0)));
    }
}
