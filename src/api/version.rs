//! API version endpoint.

use std::sync::Arc;

use crate::client::{ClientInner, Params};
use crate::{Error, Result};

/// Service for the `version` endpoint.
pub(crate) struct VersionService {
    inner: Arc<ClientInner>,
}

impl VersionService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// `(major, minor)` as reported by the server.
    pub(crate) fn get(&self) -> Result<(u32, u32)> {
        #[derive(serde::Deserialize)]
        struct Version {
            major: u32,
            minor: u32,
        }

        let response = self.inner.dispatch("version", &Params::new())?;
        let entry = response
            .data()?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Api {
                status: response.status,
                message: "version response carries no data".to_string(),
                body: response.body.clone(),
            })?;
        let version: Version = serde_json::from_value(entry)?;
        Ok((version.major, version.minor))
    }
}
