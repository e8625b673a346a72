//! Raw responses and their classification.

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// The four ways a response can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// Any 2xx status
    Success,
    /// 429 or 503; the dispatcher retries these
    Throttled,
    /// 404
    NotFound,
    /// Any other non-2xx status
    OtherError,
}

impl ResponseClass {
    /// Classify an HTTP status code.
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => ResponseClass::Success,
            429 | 503 => ResponseClass::Throttled,
            404 => ResponseClass::NotFound,
            _ => ResponseClass::OtherError,
        }
    }
}

/// One HTTP response, fully read.
///
/// Returned by [`WrikeClient::get`](crate::WrikeClient::get) regardless of
/// status; callers decide what a status means.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Final request URL, including the query string
    pub url: String,
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    pub(crate) fn read(response: reqwest::blocking::Response) -> Result<Self> {
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text()?;

        Ok(Self {
            url,
            status,
            headers,
            body,
        })
    }

    /// Classification of this response's status.
    pub fn class(&self) -> ResponseClass {
        ResponseClass::of(self.status)
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.class() == ResponseClass::Success
    }

    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Entries of the `data` array of a successful response.
    ///
    /// Non-success statuses become [`Error::Api`].
    pub fn data(&self) -> Result<Vec<Value>> {
        if !self.is_success() {
            return Err(self.to_error());
        }
        let envelope: Envelope = self.json()?;
        Ok(envelope.data)
    }

    /// Convert into the error surfaced for an unexpected status.
    pub fn to_error(&self) -> Error {
        Error::from_api_response(self.status, self.body.clone())
    }
}

/// `{"kind": "...", "data": [...]}`, the shape of every API response.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct Envelope {
    #[allow(dead_code)]
    #[serde(default)]
    pub kind: Option<String>,
    pub data: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            url: "https://www.wrike.com/api/v3/tasks".to_string(),
            status,
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(ResponseClass::of(200), ResponseClass::Success);
        assert_eq!(ResponseClass::of(204), ResponseClass::Success);
        assert_eq!(ResponseClass::of(429), ResponseClass::Throttled);
        assert_eq!(ResponseClass::of(503), ResponseClass::Throttled);
        assert_eq!(ResponseClass::of(404), ResponseClass::NotFound);
        assert_eq!(ResponseClass::of(500), ResponseClass::OtherError);
        assert_eq!(ResponseClass::of(401), ResponseClass::OtherError);
        assert_eq!(ResponseClass::of(302), ResponseClass::OtherError);
    }

    #[test]
    fn test_data_of_success() {
        let r = response(200, r#"{"kind":"tasks","data":[{"id":"A"},{"id":"B"}]}"#);
        let data = r.data().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1]["id"], "B");
    }

    #[test]
    fn test_data_of_error_status() {
        let r = response(400, r#"{"error":"invalid_parameter","errorDescription":"Bad title"}"#);
        match r.data() {
            Err(Error::Api { status, message, .. }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Bad title");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_data_missing_is_json_error() {
        let r = response(200, r#"{"kind":"tasks"}"#);
        assert!(matches!(r.data(), Err(Error::Json(_))));
    }
}
