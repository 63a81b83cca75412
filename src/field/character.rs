//! Character field (character, character varying, text).

use super::{bind_single, Direction, Field, FieldProps};
use crate::bind::FieldValue;
use crate::error::Result;
use crate::types::Value;

/// String field with an optional maximum length in characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    props: FieldProps,
    max_characters: Option<u32>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: FieldProps::new(name),
            max_characters: None,
        }
    }

    /// Maximum number of characters allowed. `None` means unlimited.
    pub fn max_characters(&self) -> Option<u32> {
        self.max_characters
    }

    pub fn set_max_characters(&mut self, max: Option<u32>) -> &mut Self {
        self.max_characters = max;
        self
    }

    fn convert(&self, raw: &Value, dir: Direction) -> Result<Value> {
        let text = match raw {
            Value::Null => return self.props.resolve_null(dir, Value::Text(String::new())),
            Value::Text(s) => s.clone(),
            other => other.to_string(),
        };

        let max = match self.max_characters {
            Some(max) if max > 0 => max as usize,
            _ => return Ok(Value::Text(text)),
        };

        let count = text.chars().count();
        if count <= max {
            return Ok(Value::Text(text));
        }

        if self.props.is_strict() {
            return Err(self.props.range_error(dir, "has too many characters"));
        }

        Ok(Value::Text(text.chars().take(max).collect()))
    }
}

impl Field for Character {
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
        self.convert(raw, Direction::Host)
    }

    fn to_bound_value(&self, raw: &Value) -> Result<FieldValue> {
        let host = self.convert(raw, Direction::Sql)?;
        Ok(bind_single(&self.props, &host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::BindValue;
    use crate::error::Error;

    const LONG_INPUT: &str = "This string is going to be fifty six characters long!!!!";

    fn char_field(max: u32) -> Character {
        let mut field = Character::new("onestring");
        field.set_max_characters(Some(max));
        field
    }

    #[test]
    fn test_truncates_when_lenient() {
        assert_eq!(LONG_INPUT.chars().count(), 56);
        let field = char_field(50);

        let host = field.to_host_value(&Value::from(LONG_INPUT)).unwrap();
        assert_eq!(host.as_str().unwrap().chars().count(), 50);
        assert_eq!(host.as_str().unwrap(), &LONG_INPUT[..50]);

        let bound = field.to_bound_value(&Value::from(LONG_INPUT)).unwrap();
        let text = bound.bound_values()[bound.value_marker()].as_str().unwrap().to_string();
        assert_eq!(text.chars().count(), 50);
    }

    #[test]
    fn test_strict_too_long() {
        let mut field = char_field(50);
        field.set_strict_values(true);

        assert!(matches!(
            field.to_host_value(&Value::from(LONG_INPUT)),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            field.to_bound_value(&Value::from(LONG_INPUT)),
            Err(Error::Range { .. })
        ));
        assert_eq!(field.to_host_value(&Value::from("short")).unwrap(), Value::from("short"));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let field = char_field(3);
        assert_eq!(field.to_host_value(&Value::from("ñandú")).unwrap(), Value::from("ñan"));
    }

    #[test]
    fn test_no_max() {
        let field = Character::new("threestring");
        assert_eq!(field.to_host_value(&Value::from(LONG_INPUT)).unwrap(), Value::from(LONG_INPUT));
        assert_eq!(field.to_host_value(&Value::Int(12)).unwrap(), Value::from("12"));
    }

    #[test]
    fn test_null_handling() {
        let mut field = char_field(5);
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::Null);

        field.set_null_ok(false);
        assert_eq!(field.to_host_value(&Value::Null).unwrap(), Value::from(""));
        let bound = field.to_bound_value(&Value::Null).unwrap();
        assert_eq!(bound.bound_values()[bound.value_marker()], BindValue::Text(String::new()));

        field.set_strict_values(true);
        assert!(field.to_host_value(&Value::Null).is_err());
    }
}
