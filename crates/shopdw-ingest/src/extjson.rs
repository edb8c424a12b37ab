//! Mongo extended-JSON scalar handling.
//!
//! Snapshot exports arrive either as relaxed JSON (plain strings and
//! numbers) or as mongoexport extended JSON, where object ids, dates, and
//! numbers are wrapped in `{"$oid": ...}`, `{"$date": ...}`, and
//! `{"$numberLong": ...}`-style objects. The deserializers here accept both
//! shapes so the same reader works on either export flavor.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdValue {
    Plain(String),
    Wrapped {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            Self::Plain(value) => value,
            Self::Wrapped { oid } => oid,
        }
    }
}

/// Deserialize an object id as a plain string or `{"$oid": "..."}`.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IdValue::deserialize(deserializer).map(IdValue::into_string)
}

/// Optional variant of [`de_id`] for reference fields.
pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IdValue>::deserialize(deserializer)?;
    Ok(value.map(IdValue::into_string))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DateInner {
    Text(String),
    Millis(i64),
    NumberLong {
        #[serde(rename = "$numberLong")]
        millis: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DateValue {
    Text(String),
    Millis(i64),
    Wrapped {
        #[serde(rename = "$date")]
        date: DateInner,
    },
}

impl DateValue {
    fn into_datetime(self) -> Option<NaiveDateTime> {
        match self {
            Self::Text(text) => parse_timestamp(&text),
            Self::Millis(millis) => from_millis(millis),
            Self::Wrapped { date } => match date {
                DateInner::Text(text) => parse_timestamp(&text),
                DateInner::Millis(millis) => from_millis(millis),
                DateInner::NumberLong { millis } => {
                    millis.trim().parse::<i64>().ok().and_then(from_millis)
                }
            },
        }
    }
}

fn from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Parse a timestamp string as exported by the operational store.
///
/// Accepts RFC 3339 (with or without fractional seconds), the same without
/// a timezone designator, a space-separated datetime, and a bare date.
/// Unparseable input maps to `None`; the transformation layer decides what
/// a missing timestamp means.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Deserialize an optional timestamp in any of the accepted shapes.
/// Unparseable values degrade to `None` rather than failing the record.
pub fn de_opt_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateValue>::deserialize(deserializer)?;
    Ok(value.and_then(DateValue::into_datetime))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberValue {
    Number(f64),
    Text(String),
    NumberInt {
        #[serde(rename = "$numberInt")]
        value: String,
    },
    NumberLong {
        #[serde(rename = "$numberLong")]
        value: String,
    },
    NumberDouble {
        #[serde(rename = "$numberDouble")]
        value: String,
    },
}

impl NumberValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value)
            | Self::NumberInt { value }
            | Self::NumberLong { value }
            | Self::NumberDouble { value } => value.trim().parse::<f64>().ok(),
        }
    }
}

/// Deserialize an optional numeric field as f64, accepting plain numbers,
/// numeric strings, and extended-JSON number wrappers.
pub fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberValue>::deserialize(deserializer)?;
    Ok(value.and_then(|number| number.as_f64()))
}

/// Integer variant of [`de_opt_f64`]. Fractional input is truncated.
pub fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberValue>::deserialize(deserializer)?;
    Ok(value.and_then(|number| number.as_f64()).map(|value| value as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_millis() {
        let parsed = parse_timestamp("2025-01-05T10:30:00.123Z").expect("parse");
        assert_eq!(parsed.date().to_string(), "2025-01-05");
    }

    #[test]
    fn parses_bare_date() {
        let parsed = parse_timestamp("2025-01-05").expect("parse");
        assert_eq!(parsed.to_string(), "2025-01-05 00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
