//! Attachments service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Params};
use crate::models::Attachment;
use crate::Result;

/// Service for attachment lookups.
pub(crate) struct AttachmentsService {
    inner: Arc<ClientInner>,
}

impl AttachmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific attachment.
    pub(crate) fn get(&self, attachment_id: &str) -> Result<Option<Attachment>> {
        self.inner
            .fetch_one(&resource_path(&["attachments", attachment_id])?, &Params::new())
    }
}
