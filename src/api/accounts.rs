//! Accounts service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use super::resource_path;
use crate::client::{ClientInner, Listing, Params};
use crate::models::{timestamp, Account, Attachment, Contact, Folder, Group, Task};
use crate::Result;

/// Service for account lookups and the listings nested under an account.
pub(crate) struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get details for a specific account.
    pub(crate) fn get(&self, account_id: &str) -> Result<Option<Account>> {
        self.inner
            .fetch_one(&resource_path(&["accounts", account_id])?, &Params::new())
    }

    /// List all accounts the current user has access to.
    pub(crate) fn list(&self) -> Result<Listing<Account>> {
        self.inner.fetch_all("accounts", &Params::new())
    }

    /// Attachments of the account's tasks and folders created in a window.
    ///
    /// The API rejects windows longer than 31 days.
    pub(crate) fn attachments(
        &self,
        account_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Listing<Attachment>> {
        let params = Params::new().with(
            "createdDate",
            json!({
                "start": timestamp::format(&start),
                "end": timestamp::format(&end),
            }),
        );
        self.inner
            .fetch_all(&resource_path(&["accounts", account_id, "attachments"])?, &params)
    }

    /// Contacts of the account.
    pub(crate) fn contacts(&self, account_id: &str) -> Result<Listing<Contact>> {
        self.inner
            .fetch_all(&resource_path(&["accounts", account_id, "contacts"])?, &Params::new())
    }

    /// Folders of the account.
    pub(crate) fn folders(&self, account_id: &str) -> Result<Listing<Folder>> {
        self.inner
            .fetch_all(&resource_path(&["accounts", account_id, "folders"])?, &Params::new())
    }

    /// Groups of the account.
    pub(crate) fn groups(&self, account_id: &str) -> Result<Listing<Group>> {
        self.inner
            .fetch_all(&resource_path(&["accounts", account_id, "groups"])?, &Params::new())
    }

    /// Tasks of the account.
    pub(crate) fn tasks(&self, account_id: &str) -> Result<Listing<Task>> {
        self.inner
            .fetch_all(&resource_path(&["accounts", account_id, "tasks"])?, &Params::new())
    }
}
