//! Contacts service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Listing, Params};
use crate::models::Contact;
use crate::Result;

/// Service for contact lookups.
pub(crate) struct ContactsService {
    inner: Arc<ClientInner>,
}

impl ContactsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific contact.
    pub(crate) fn get(&self, contact_id: &str) -> Result<Option<Contact>> {
        self.inner
            .fetch_one(&resource_path(&["contacts", contact_id])?, &Params::new())
    }

    /// All contacts of the current user.
    pub(crate) fn list(&self) -> Result<Listing<Contact>> {
        self.inner.fetch_all("contacts", &Params::new())
    }
}
