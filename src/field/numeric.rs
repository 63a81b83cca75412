//! Numeric field for any number type that includes decimals.

use super::coerce::{self, Coerced};
use super::{bind_single, Direction, Field, FieldProps};
use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

/// Decimal field with a precision (total digits) and scale (decimal digits).
///
/// With both known the range is `±(10^(precision - scale) - 10^(-scale))`
/// and values are rounded to `scale` places. `real`, `double precision` and
/// `money` report no scale, so they are unbounded and unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Numeric {
    props: FieldProps,
    precision: Option<u32>,
    scale: Option<u32>,
}

impl Numeric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
            precision: None,
            scale: None,
        }
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Set the total number of digits. Negative values are ignored.
    pub fn set_precision(&mut self, digits: i64) -> &mut Self {
        if let Ok(digits) = u32::try_from(digits) {
            self.precision = Some(digits);
        }
        self
    }

    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Set the number of digits to the right of the decimal point.
    pub fn set_scale(&mut self, digits: i64) -> &mut Self {
        if let Ok(digits) = u32::try_from(digits) {
            self.scale = Some(digits);
        }
        self
    }

    /// Largest value allowed, when precision and scale are known and the
    /// bound fits in an `f64`.
    pub fn max(&self) -> Option<f64> {
        let p = i32::try_from(self.precision?).ok()?;
        let s = i32::try_from(self.scale?).ok()?;
        let max = 10f64.powi(p.checked_sub(s)?) - 10f64.powi(-s);
        max.is_finite().then_some(max)
    }

    /// Smallest value allowed, when precision and scale are known.
    pub fn min(&self) -> Option<f64> {
        self.max().map(|max| -max)
    }

    fn in_range(&self, n: f64) -> bool {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => !(n < min || n > max),
            _ => true,
        }
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        if raw.is_null() {
            return self.props.resolve_null(dir, Value::Float(0.0));
        }

        let coerced = coerce::to_float(raw);

        if self.props.is_strict() {
            let n = match coerced {
                Coerced::Exact(n) => n,
                _ => return Err(self.props.range_error(dir, "is not a number")),
            };
            if !self.in_range(n) {
                return Err(self.props.range_error(dir, "is outside of what is allowed"));
            }
            return Ok(Value::Float(self.round(n)));
        }

        let n = match coerced {
            Coerced::Exact(n) | Coerced::Lossy(n) => self.round(n),
            Coerced::Invalid => return Ok(self.props.fallback(Value::Float(0.0))),
        };

        if self.in_range(n) {
            Ok(Value::Float(n))
        } else {
            Ok(self.props.fallback(Value::Float(0.0)))
        }
    }

    fn round(&self, n: f64) -> f64 {
        match self.scale {
            Some(scale) if n.is_finite() => coerce::round_to_scale(n, scale),
            _ => n,
        }
    }
}

impl Field for Numeric {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "f64"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        self.convert(raw, Direction::Host)
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let host = self.convert(raw, Direction::Sql)?;
        Ok(bind_single(&self.props, &host))
    }
}
