//! Date field (date, timestamp, timestamptz).

use super::{Direction, Field, FieldProps};
use crate::bind::{BindValue, FieldValue};
use crate::error::Result;
use crate::types::Value;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Formats used for SQL bindings, by defined type.
const FMT_DATE: &str = "%Y-%m-%d";
const FMT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
const FMT_DATETIME_TZ: &str = "%Y-%m-%d %H:%M:%S%:z";

/// Date and timestamp field.
///
/// Host values always carry an offset. Input without one is read as UTC,
/// and a `timestamp` (without time zone) column forces its host value to
/// UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct Date {
    props: FieldProps,
}

impl Date {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
        }
    }

    fn is_timestamp(&self) -> bool {
        matches!(
            self.props.defined_type(),
            "timestamp" | "timestamp without time zone"
        )
    }

    fn is_timestamp_tz(&self) -> bool {
        matches!(
            self.props.defined_type(),
            "timestamptz" | "timestamp with time zone"
        )
    }

    /// Current time, used where a non-null date is needed and none is usable.
    fn now() -> DateTime<FixedOffset> {
        Utc::now().fixed_offset()
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        let parsed = match raw {
            Value::Null => return self.props.resolve_null(dir, Value::DateTime(Self::now())),
            Value::DateTime(dt) => Some(*dt),
            Value::Text(s) => parse_date_time(s),
            Value::Int(secs) => DateTime::from_timestamp(*secs, 0).map(|dt| dt.fixed_offset()),
            _ => None,
        };

        let dt = match parsed {
            Some(dt) => dt,
            None if self.props.is_strict() => {
                return Err(self.props.range_error(dir, "is not a valid date"));
            }
            None => return Ok(self.props.fallback(Value::DateTime(Self::now()))),
        };

        if self.is_timestamp() {
            Ok(Value::DateTime(dt.with_timezone(&Utc).fixed_offset()))
        } else {
            Ok(Value::DateTime(dt))
        }
    }

    fn format(&self, dt: &DateTime<FixedOffset>) -> String {
        let fmt = if self.is_timestamp() {
            FMT_DATETIME
        } else if self.is_timestamp_tz() {
            FMT_DATETIME_TZ
        } else {
            FMT_DATE
        };
        dt.format(fmt).to_string()
    }
}

/// Parse the date/time spellings PostgreSQL and applications commonly use.
pub(crate) fn parse_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, FMT_DATE) {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }

    None
}

impl Field for Date {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "DateTime<FixedOffset>"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        self.convert(raw, Direction::Host)
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let bound = match self.convert(raw, Direction::Sql)? {
            Value::DateTime(dt) => BindValue::Text(self.format(&dt)),
            _ => BindValue::Null,
        };
        Ok(FieldValue::single(self.props.name(), bound))
    }
}
