//! Comments service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Listing, Params};
use crate::models::Comment;
use crate::Result;

/// Service for comment lookups.
pub(crate) struct CommentsService {
    inner: Arc<ClientInner>,
}

impl CommentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific comment.
    pub(crate) fn get(&self, comment_id: &str) -> Result<Option<Comment>> {
        self.inner
            .fetch_one(&resource_path(&["comments", comment_id])?, &Params::new())
    }

    /// All comments in all accounts.
    pub(crate) fn list(&self) -> Result<Listing<Comment>> {
        self.inner.fetch_all("comments", &Params::new())
    }
}
