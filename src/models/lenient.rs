//! Field-level tolerance for off-type values.
//!
//! The API occasionally sends a field with a different JSON type than
//! documented (`"attachmentCount": "3"`). Such a value is dropped to `None`
//! for that field alone instead of failing the whole record. Timestamps are
//! not covered here and stay strict, see [`timestamp::option`](super::timestamp::option).

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` hook for plain optional fields: `null` and values of
/// the wrong shape become `None`.
pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// `deserialize_with` hook for nested records.
///
/// Anything but an object becomes `None`. An object is decoded strictly, so a
/// malformed timestamp inside it still fails the enclosing record.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::models::timestamp;

    #[derive(Debug, Deserialize)]
    struct Inner {
        #[serde(default, with = "timestamp::option")]
        at: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[serde(default, deserialize_with = "super::deserialize")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "super::deserialize")]
        ids: Option<Vec<String>>,
        #[serde(default, deserialize_with = "super::record")]
        inner: Option<Inner>,
    }

    #[test]
    fn test_well_typed_values_pass_through() {
        let outer: Outer = serde_json::from_str(r#"{"count": 3, "ids": ["a", "b"]}"#).unwrap();
        assert_eq!(outer.count, Some(3));
        assert_eq!(outer.ids, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(outer.inner.is_none());
    }

    #[test]
    fn test_off_type_values_become_none() {
        let outer: Outer =
            serde_json::from_str(r#"{"count": "3", "ids": "a,b", "inner": [1]}"#).unwrap();
        assert_eq!(outer.count, None);
        assert_eq!(outer.ids, None);
        assert!(outer.inner.is_none());

        let outer: Outer = serde_json::from_str(r#"{"count": -1, "ids": [1, 2]}"#).unwrap();
        assert_eq!(outer.count, None);
        assert_eq!(outer.ids, None);
    }

    #[test]
    fn test_null_is_none() {
        let outer: Outer = serde_json::from_str(r#"{"count": null, "inner": null}"#).unwrap();
        assert_eq!(outer.count, None);
        assert!(outer.inner.is_none());
    }

    #[test]
    fn test_nested_timestamp_stays_strict() {
        let result = serde_json::from_str::<Outer>(r#"{"inner": {"at": "07/10/2016"}}"#);
        assert!(result.is_err());

        let outer: Outer = serde_json::from_str(r#"{"inner": {"at": "2016-10-07T09:54:06Z"}}"#).unwrap();
        assert!(outer.inner.unwrap().at.is_some());
    }
}
