//! Named placeholder rewriting for drivers that only take positional
//! parameters.

use indexmap::IndexMap;

use crate::bind::{BindValue, Bindings};
use crate::error::{Error, Result};

/// Rewrite `:name` placeholders into `$n::type` positional parameters.
///
/// A placeholder used more than once reuses its position. NULL values get a
/// bare `$n` so the server infers the type from the surrounding statement.
/// `::` casts and single-quoted literals are left untouched. Returns the
/// rewritten SQL and the values in positional order.
pub fn to_positional<'a>(sql: &str, params: &'a Bindings) -> Result<(String, Vec<&'a BindValue>)> {
    let mut out = String::with_capacity(sql.len() + 16);
    let mut positions: IndexMap<&str, usize> = IndexMap::new();
    let mut values = Vec::new();

    let bytes = sql.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'\'' {
            let end = literal_end(bytes, i);
            out.push_str(&sql[i..end]);
            i = end;
            continue;
        }

        if b == b':' {
            if bytes.get(i + 1) == Some(&b':') {
                out.push_str("::");
                i += 2;
                continue;
            }

            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }

            if end > start && !bytes[start].is_ascii_digit() {
                let name = &sql[i..end];
                let (key, value) = params.get_key_value(name).ok_or_else(|| {
                    Error::data_access(format!("No binding for placeholder {}", name))
                })?;

                let position = match positions.get(key.as_str()) {
                    Some(pos) => *pos,
                    None => {
                        values.push(value);
                        positions.insert(key.as_str(), values.len());
                        values.len()
                    }
                };

                match pg_cast(value) {
                    Some(cast) => out.push_str(&format!("${}::{}", position, cast)),
                    None => out.push_str(&format!("${}", position)),
                }
                i = end;
                continue;
            }
        }

        // Copy a whole character so multibyte text stays intact.
        let ch_len = sql[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&sql[i..i + ch_len]);
        i += ch_len;
    }

    Ok((out, values))
}

/// Index just past the literal opened at `start`, honoring `''` escapes.
fn literal_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        if bytes[i] == b'\'' {
            if bytes.get(i + 1) == Some(&b'\'') {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// PostgreSQL type a bound value is sent as. NULL has none; it takes the
/// type of whatever it is compared with or assigned to.
pub fn pg_cast(value: &BindValue) -> Option<&'static str> {
    match value {
        BindValue::Null => None,
        BindValue::Text(_) => Some("text"),
        BindValue::Int(_) => Some("int8"),
        BindValue::Float(_) => Some("float8"),
        BindValue::Bool(_) => Some("bool"),
    }
}
