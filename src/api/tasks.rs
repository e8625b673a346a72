//! Tasks service.

use std::sync::Arc;

use super::resource_path;
use crate::client::{ClientInner, Listing, Params};
use crate::models::{Attachment, Comment, Task};
use crate::Result;

/// Service for task lookups and the listings nested under a task.
pub(crate) struct TasksService {
    inner: Arc<ClientInner>,
}

impl TasksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a specific task.
    pub(crate) fn get(&self, task_id: &str) -> Result<Option<Task>> {
        self.inner
            .fetch_one(&resource_path(&["tasks", task_id])?, &Params::new())
    }

    /// Tasks in all accounts, optionally filtered by exact title.
    pub(crate) fn list(&self, title: Option<&str>) -> Result<Listing<Task>> {
        let params = Params::new().with("title", title);
        self.inner.fetch_all("tasks", &params)
    }

    /// Attachments of a task.
    pub(crate) fn attachments(&self, task_id: &str) -> Result<Listing<Attachment>> {
        self.inner
            .fetch_all(&resource_path(&["tasks", task_id, "attachments"])?, &Params::new())
    }

    /// Comments of a task.
    pub(crate) fn comments(&self, task_id: &str) -> Result<Listing<Comment>> {
        self.inner
            .fetch_all(&resource_path(&["tasks", task_id, "comments"])?, &Params::new())
    }
}
