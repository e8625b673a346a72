//! Folders service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Listing, Params};
use crate::models::{Attachment, Folder};
use crate::{Error, Result};

/// Service for folder lookups.
pub(crate) struct FoldersService {
    inner: Arc<ClientInner>,
}

impl FoldersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific folder.
    pub(crate) fn get(&self, folder_id: &str) -> Result<Option<Folder>> {
        self.inner
            .fetch_one(&resource_path(&["folders", folder_id])?, &Params::new())
    }

    /// All folders, or the folders with the given IDs.
    ///
    /// IDs are joined with commas into a single path segment.
    pub(crate) fn list(&self, folder_ids: Option<&[&str]>) -> Result<Listing<Folder>> {
        match folder_ids {
            None => self.inner.fetch_all("folders", &Params::new()),
            Some([]) => Err(Error::InvalidInput(
                "folder ID filter must not be empty".to_string(),
            )),
            Some(ids) => self
                .inner
                .fetch_all(&resource_path(&["folders", &ids.join(",")])?, &Params::new()),
        }
    }

    /// Attachments of a folder.
    pub(crate) fn attachments(&self, folder_id: &str) -> Result<Listing<Attachment>> {
        self.inner
            .fetch_all(&resource_path(&["folders", folder_id, "attachments"])?, &Params::new())
    }
}
