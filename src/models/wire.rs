//! Lenient deserializers for backend columns.
//!
//! The backend stores raw CSV cells in nullable SQLite columns, so an integer
//! column can come back as a number, a numeric string, `""` or `null`.

use serde::Deserialize;
use serde_json::Value;

/// Integer column that may be blank. Blank and non-numeric values become `None`.
pub fn optional_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_int).and_then(|n| T::try_from(n).ok()))
}

/// Count column; a blank count is zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    optional_int(deserializer).map(Option::unwrap_or_default)
}

/// Text column; `null` becomes empty and numbers keep their JSON form.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

// pandas writes integer columns that hold blanks as floats
#[allow(clippy::cast_possible_truncation)]
fn whole(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e18).then(|| f as i64)
}
