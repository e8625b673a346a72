//! Groups service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Params};
use crate::models::Group;
use crate::Result;

/// Service for group lookups.
pub(crate) struct GroupsService {
    inner: Arc<ClientInner>,
}

impl GroupsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific group.
    pub(crate) fn get(&self, group_id: &str) -> Result<Option<Group>> {
        self.inner
            .fetch_one(&resource_path(&["groups", group_id])?, &Params::new())
    }
}
