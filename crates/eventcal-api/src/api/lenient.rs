// Lenient field decoders for request bodies
//
// Clients send timestamps and user ids in whatever shape PostgreSQL would
// coerce: naive timestamps, a space instead of `T`, short offsets, numeric
// strings. Only values the store could never accept are refused here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Offset-bearing layouts. `%#z` takes `Z`, `+00`, `+0000` and `+00:00`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Layouts without an offset; read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp the way a `timestamptz` column would accept it
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc));
    }

    // "2024-01-01 09:00:00+00" -> "2024-01-01T09:00:00+00"
    let normalized = match trimmed.split_once(' ') {
        Some((date, time)) => format!("{}T{}", date, time.trim_start()),
        None => trimmed.to_string(),
    };

    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(&normalized, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `#[serde(default, deserialize_with = "lenient::timestamp")]`
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        parse_timestamp(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {:?}", value)))
    })
    .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Text(String),
}

/// `#[serde(default, deserialize_with = "lenient::id")]`: integer or numeric string
pub fn id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdRepr::Int(value)) => Ok(Some(value)),
        Some(IdRepr::Text(value)) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer id: {:?}", value))),
    }
}
