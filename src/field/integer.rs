//! Integer field (smallint, integer, bigint).

use super::coerce::{self, Coerced};
use super::{bind_single, Direction, Field, FieldProps};
use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

/// Multiplier raised to the byte count to get the range of the integer.
const BYTE_MULT: i128 = 256;

const BITS_PER_BYTE: i64 = 8;

/// Assume a 4 byte integer unless told otherwise.
const DEFAULT_PRECISION: u32 = 4;

/// Largest precision a host `i64` can hold.
const MAX_PRECISION: u32 = 8;

/// Whole number field with a byte precision.
///
/// The range follows from the precision `p` in bytes:
/// `min = -(256^p)/2`, `max = (256^p)/2 - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Integer {
    props: FieldProps,
    precision: u32,
}

impl Integer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Precision in bytes.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Set the precision in bits, as reported by `numeric_precision`.
    ///
    /// Only whole bytes between 8 and 64 bits are accepted; anything else
    /// leaves the precision unchanged.
    pub fn set_precision(&mut self, bits: i64) -> &mut Self {
        if bits > 0 && bits % BITS_PER_BYTE == 0 {
            let bytes = (bits / BITS_PER_BYTE) as u32;
            if bytes <= MAX_PRECISION {
                self.precision = bytes;
            }
        }
        self
    }

    /// Largest value this integer may hold.
    pub fn max(&self) -> i64 {
        (BYTE_MULT.pow(self.precision) / 2 - 1) as i64
    }

    /// Smallest value this integer may hold.
    pub fn min(&self) -> i64 {
        (-(BYTE_MULT.pow(self.precision) / 2)) as i64
    }

    fn in_range(&self, n: i128) -> bool {
        n >= self.min() as i128 && n <= self.max() as i128
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        if raw.is_null() {
            return self.props.resolve_null(dir, Value::Int(0));
        }

        let coerced = coerce::to_integer(raw);

        if self.props.is_strict() {
            let n = match coerced {
                Coerced::Exact(n) => n,
                _ => return Err(self.props.range_error(dir, "is not an integer")),
            };
            if !self.in_range(n) {
                return Err(self.props.range_error(dir, "is outside of what is allowed"));
            }
            return Ok(Value::Int(n as i64));
        }

        match coerced {
            Coerced::Exact(n) | Coerced::Lossy(n) if self.in_range(n) => Ok(Value::Int(n as i64)),
            _ => Ok(self.props.fallback(Value::Int(0))),
        }
    }
}

impl Field for Integer {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "i64"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        self.convert(raw, Direction::Host)
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let host = self.convert(raw, Direction::Sql)?;
        Ok(bind_single(&self.props, &host))
    }
}
