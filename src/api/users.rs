//! Users service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Params};
use crate::models::User;
use crate::Result;

/// Service for user lookups.
pub(crate) struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific user.
    pub(crate) fn get(&self, user_id: &str) -> Result<Option<User>> {
        self.inner
            .fetch_one(&resource_path(&["users", user_id])?, &Params::new())
    }

    /// Look up several users, skipping IDs the API does not know.
    pub(crate) fn get_each<'a>(&self, user_ids: impl IntoIterator<Item = &'a String>) -> Result<Vec<User>> {
        let mut users = Vec::new();
        for user_id in user_ids {
            if let Some(user) = self.get(user_id)? {
                users.push(user);
            }
        }
        Ok(users)
    }
}
