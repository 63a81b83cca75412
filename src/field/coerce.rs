//! Coercion helpers shared by the field variants.

use crate::bind::BindValue;
use crate::types::Value;

/// Outcome of coercing raw input into a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Coerced<T> {
    /// Input was exactly representable.
    Exact(T),
    /// Input had to be truncated or had trailing garbage.
    Lossy(T),
    /// Nothing numeric could be read from the input.
    Invalid,
}

/// Coerce raw input into an integer, truncating fractions.
pub(crate) fn to_integer(raw: &Value) -> Coerced<i128> {
    match raw {
        Value::Int(n) => Coerced::Exact(*n as i128),
        Value::Bool(b) => Coerced::Exact(*b as i128),
        Value::Float(f) => float_to_integer(*f),
        Value::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Coerced::Exact(n as i128);
            }
            if let Ok(f) = s.parse::<f64>() {
                return float_to_integer(f);
            }
            match numeric_prefix(s) {
                Some(f) if f.is_finite() => Coerced::Lossy(f.trunc() as i128),
                _ => Coerced::Invalid,
            }
        }
        _ => Coerced::Invalid,
    }
}

fn float_to_integer(f: f64) -> Coerced<i128> {
    if !f.is_finite() {
        return Coerced::Invalid;
    }
    if f.fract() == 0.0 {
        Coerced::Exact(f as i128)
    } else {
        Coerced::Lossy(f.trunc() as i128)
    }
}

/// Coerce raw input into a float.
pub(crate) fn to_float(raw: &Value) -> Coerced<f64> {
    match raw {
        Value::Int(n) => Coerced::Exact(*n as f64),
        Value::Float(f) => Coerced::Exact(*f),
        Value::Bool(b) => Coerced::Exact(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) => {
            let s = s.trim();
            if let Ok(f) = s.parse::<f64>() {
                return Coerced::Exact(f);
            }
            match numeric_prefix(s) {
                Some(f) => Coerced::Lossy(f),
                None => Coerced::Invalid,
            }
        }
        _ => Coerced::Invalid,
    }
}

/// Read the leading number of a string, ignoring whatever follows it.
/// `"12.5kg"` gives `12.5`, `"abc"` gives nothing.
pub(crate) fn numeric_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'-' || bytes[end] == b'+') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }
    s[..end].parse().ok()
}

/// Recognize the boolean spellings PostgreSQL produces.
pub(crate) fn parse_bool(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "t" | "true" => Some(true),
            "f" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Strip a column default expression down to its literal:
/// `'ABCDE'::bpchar` becomes `ABCDE`, `true` stays `true`.
pub(crate) fn default_literal(expr: &str) -> &str {
    let expr = expr.trim();
    let expr = match expr.find("::") {
        Some(pos) => &expr[..pos],
        None => expr,
    };
    let expr = expr.trim();

    if expr.len() >= 2 && expr.starts_with('\'') && expr.ends_with('\'') {
        &expr[1..expr.len() - 1]
    } else {
        expr
    }
}

/// Largest integer an f64 holds exactly. Past it there is no fraction left
/// to round.
const F64_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Round to `scale` decimal places, halves away from zero.
///
/// Values that carry no digits beyond `scale` are returned unchanged.
pub(crate) fn round_to_scale(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(scale).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() || scaled.abs() >= F64_EXACT_INT {
        return value;
    }
    scaled.round() / factor
}

/// Turn an already converted host value into a bindable scalar.
pub(crate) fn to_bind_value(host: &Value) -> BindValue {
    match host {
        Value::Null => BindValue::Null,
        Value::Bool(b) => BindValue::Bool(*b),
        Value::Int(n) => BindValue::Int(*n),
        Value::Float(f) => BindValue::Float(*f),
        Value::Text(s) => BindValue::Text(s.clone()),
        Value::List(items) => BindValue::Text(array_literal(items)),
        Value::Point(p) => BindValue::Text(p.to_string()),
        Value::DateTime(dt) => BindValue::Text(dt.to_rfc3339()),
        Value::Json(json) => BindValue::Text(json.to_string()),
    }
}

/// Render a list as a PostgreSQL array literal, e.g. `{1,"a b",NULL}`.
pub(crate) fn array_literal(items: &[Value]) -> String {
    let mut out = String::from("{");

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match item {
            Value::Null => out.push_str("NULL"),
            Value::Bool(b) => out.push_str(if *b { "t" } else { "f" }),
            Value::Int(n) => out.push_str(&n.to_string()),
            Value::Float(f) => out.push_str(&f.to_string()),
            Value::List(inner) => out.push_str(&array_literal(inner)),
            other => {
                out.push('"');
                for c in other.to_string().chars() {
                    if c == '"' || c == '\\' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('"');
            }
        }
    }

    out.push('}');
    out
}
