//! Primitive types shared by all resource models.
//!
//! This module provides the datacenter selector, the shared handle a
//! resource keeps back to its client, and the memo cell used by lazy
//! cross-reference accessors.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::client::ClientInner;
use crate::{Error, Result};

/// Wrike datacenter hosting an account.
///
/// Accounts live in one datacenter and must be addressed through its host.
///
/// # Example
///
/// ```
/// use wrike_rs::Datacenter;
///
/// let dc = Datacenter::Eu;
/// assert_eq!(dc.api_base_url(), "https://app-eu.wrike.com/api/v3/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Datacenter {
    /// The original US datacenter.
    #[default]
    Us1,
    /// The second US datacenter.
    Us2,
    /// The European datacenter.
    Eu,
}

impl Datacenter {
    /// Host name serving both the API and OAuth endpoints.
    pub fn host(&self) -> &'static str {
        match self {
            Datacenter::Us1 => "www.wrike.com",
            Datacenter::Us2 => "app-us2.wrike.com",
            Datacenter::Eu => "app-eu.wrike.com",
        }
    }

    /// Base URL for REST API requests, with trailing slash.
    pub fn api_base_url(&self) -> String {
        format!("https://{}/api/v3/", self.host())
    }

    /// Resolve the `host` field returned by the token endpoint.
    pub fn from_host(host: &str) -> Option<Self> {
        [Datacenter::Us1, Datacenter::Us2, Datacenter::Eu]
            .into_iter()
            .find(|dc| dc.host().eq_ignore_ascii_case(host))
    }
}

impl fmt::Display for Datacenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

/// Shared reference from a resource back to the client that fetched it.
///
/// A resource keeps its client's connection pool and credentials alive, so
/// `WrikeClient::with_token(..)?.task(id)?` yields a task that can still
/// navigate after the temporary client is gone. Only a default handle, as
/// on a record deserialized by hand, is detached; its lazy accessors fail
/// with [`Error::ClientUnavailable`].
#[derive(Clone, Default)]
pub struct ClientHandle(Option<Arc<ClientInner>>);

impl ClientHandle {
    pub(crate) fn new(inner: &Arc<ClientInner>) -> Self {
        Self(Some(Arc::clone(inner)))
    }

    pub(crate) fn client(&self) -> Result<Arc<ClientInner>> {
        self.0.clone().ok_or(Error::ClientUnavailable)
    }

    /// Whether the resource was fetched through a client.
    pub fn is_attached(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClientHandle")
            .field(&if self.is_attached() { "attached" } else { "detached" })
            .finish()
    }
}

/// Write-once cache behind a lazy accessor.
///
/// A failed computation leaves the cell empty so the next access tries again.
pub struct Memo<T>(OnceLock<T>);

impl<T> Memo<T> {
    /// Return the cached value, computing it with `init` on first use.
    pub(crate) fn get_or_try_init(&self, init: impl FnOnce() -> Result<T>) -> Result<&T> {
        if let Some(value) = self.0.get() {
            return Ok(value);
        }
        let value = init()?;
        Ok(self.0.get_or_init(|| value))
    }

    /// Whether the value has been computed.
    pub fn is_resolved(&self) -> bool {
        self.0.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self(OnceLock::new())
    }
}

impl<T: Clone> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_resolved() { "Memo(resolved)" } else { "Memo(pending)" })
    }
}
