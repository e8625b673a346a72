//! Query parameters and their wire encoding.

use std::collections::BTreeMap;

use serde_json::Value;

/// Query parameters for a GET request.
///
/// Values are JSON values so that structured filters such as a date range
/// can be passed as-is. Encoding rules:
///
/// - strings are sent verbatim
/// - `null` values are dropped
/// - anything else is sent as compact JSON text
///
/// ```
/// use wrike_rs::Params;
/// use serde_json::json;
///
/// let params = Params::new()
///     .with("title", "Release")
///     .with("createdDate", json!({"start": "2020-01-01T00:00:00Z"}));
///
/// assert_eq!(
///     params.to_query(),
///     vec![
///         ("createdDate".to_string(), r#"{"start":"2020-01-01T00:00:00Z"}"#.to_string()),
///         ("title".to_string(), "Release".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a raw parameter value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `true` when no parameter would be sent.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Value::is_null)
    }

    /// Encoded key/value pairs, sorted by key.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let encoded = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), encoded))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
