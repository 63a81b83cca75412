//! JSON field (json, jsonb).

use super::{Direction, Field, FieldProps};
use crate::bind::{BindValue, FieldValue};
use crate::error::{Error, JsonErrorKind, Result};
use crate::types::Value;

/// JSON document field.
///
/// Text input is validated with a full parse. Invalid documents raise
/// [`Error::Format`] in strict mode and otherwise fall back to NULL or an
/// empty string depending on nullability.
#[derive(Debug, Clone, PartialEq)]
pub struct Json {
    props: FieldProps,
}

impl Json {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
        }
    }

    fn format_error(&self, kind: JsonErrorKind, detail: impl Into<String>) -> Error {
        Error::Format {
            field: self.props.name().to_string(),
            kind,
            detail: detail.into(),
        }
    }

    fn parse(&self, raw: &Value) -> std::result::Result<serde_json::Value, Error> {
        match raw {
            Value::Json(json) => Ok(json.clone()),
            Value::Text(text) => serde_json::from_str(text)
                .map_err(|e| self.format_error(JsonErrorKind::classify(&e), e.to_string())),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(n) => Ok(serde_json::Value::from(*n)),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    self.format_error(JsonErrorKind::UnsupportedType, "NaN or infinite number")
                }),
            other => Err(self.format_error(
                JsonErrorKind::UnsupportedType,
                format!("cannot encode {}", other),
            )),
        }
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        if raw.is_null() {
            return self.props.resolve_null(dir, Value::Text(String::new()));
        }

        match self.parse(raw) {
            Ok(json) => Ok(Value::Json(json)),
            Err(err) if self.props.is_strict() => Err(err),
            Err(_) => Ok(self.props.fallback(Value::Text(String::new()))),
        }
    }
}

impl Field for Json {
    fn props(&self) -> &FieldProps {
        &self.props
    }

    fn props_mut(&mut self) -> &mut FieldProps {
        &mut self.props
    }

    fn host_type_name(&self) -> &'static str {
        "serde_json::Value"
    }

    fn to_host_value(&self, raw: &Value) -> Result<Value> {
        self.convert(raw, Direction::Host)
    }

    /// Binds the document's JSON text. Text input that was already valid is
    /// bound exactly as given.
    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let bound = match (self.convert(raw, Direction::Sql)?, raw) {
            (Value::Json(_), Value::Text(text)) => BindValue::Text(text.clone()),
            (Value::Json(json), _) => BindValue::Text(json.to_string()),
            (Value::Text(text), _) => BindValue::Text(text),
            _ => BindValue::Null,
        };
        Ok(FieldValue::single(self.props.name(), bound))
    }
}
