// Small value helpers shared by the domain types.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Deserializes an identifier that the backend may send as a JSON number or string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(value) => value,
        Id::Integer(value) => value.to_string(),
        Id::Float(value) => value.to_string(),
    })
}

/// Deserializes an ISO-8601 timestamp. Values without an offset are read as UTC.
pub fn flexible_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(value) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(value.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}
