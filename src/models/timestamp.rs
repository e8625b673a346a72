//! Wire format for Wrike timestamps: `YYYY-MM-DDTHH:MM:SSZ`, always UTC.
//!
//! Fields use `#[serde(default, with = "timestamp::option")]`: a missing or
//! `null` value becomes `None`, a malformed string fails deserialization.

use chrono::{DateTime, NaiveDateTime, ParseResult, Utc};

/// `strftime` pattern of every timestamp the API sends.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a wire timestamp.
///
/// ```
/// use wrike_rs::models::timestamp;
///
/// let ts = timestamp::parse("2016-10-07T09:54:06Z").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2016-10-07T09:54:06+00:00");
/// ```
pub fn parse(value: &str) -> ParseResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, FORMAT).map(|naive| naive.and_utc())
}

/// Render a timestamp in wire format.
pub fn format(value: &DateTime<Utc>) -> String {
    value.format(FORMAT).to_string()
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize `Some` as a wire timestamp and `None` as `null`.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&super::format(ts)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize a wire timestamp, mapping `null` to `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}"))),
            None => Ok(None),
        }
    }
}
