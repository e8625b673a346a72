//! Comment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, timestamp, ClientHandle, Folder, Memo, Resource, Task, User};
use crate::api::{FoldersService, TasksService, UsersService};
use crate::Result;

/// A comment on a task or folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// ID of the user who wrote the comment
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub author_id: Option<String>,
    /// Comment body
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub text: Option<String>,
    /// When the comment was written
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the comment was last edited
    #[serde(default, with = "timestamp::option")]
    pub updated_date: Option<DateTime<Utc>>,
    /// ID of the commented task
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub task_id: Option<String>,
    /// ID of the commented folder
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub folder_id: Option<String>,

    #[serde(skip)]
    handle: ClientHandle,
    #[serde(skip)]
    author: Memo<Option<User>>,
    #[serde(skip)]
    task: Memo<Option<Task>>,
    #[serde(skip)]
    folder: Memo<Option<Folder>>,
}

impl Resource for Comment {
    const KIND: &'static str = "comment";

    fn attach(&mut self, handle: ClientHandle) {
        self.handle = handle;
    }
}

impl Comment {
    /// Author of the comment, fetched on first access.
    pub fn author(&self) -> Result<Option<&User>> {
        self.author
            .get_or_try_init(|| match &self.author_id {
                Some(id) => UsersService::new(self.handle.client()?).get(id),
                None => Ok(None),
            })
            .map(Option::as_ref)
    }

    /// Task the comment belongs to, if it was left on a task.
    pub fn task(&self) -> Result<Option<&Task>> {
        self.task
            .get_or_try_init(|| match &self.task_id {
                Some(id) => TasksService::new(self.handle.client()?).get(id),
                None => Ok(None),
            })
            .map(Option::as_ref)
    }

    /// Folder the comment belongs to, if it was left on a folder.
    pub fn folder(&self) -> Result<Option<&Folder>> {
        self.folder
            .get_or_try_init(|| match &self.folder_id {
                Some(id) => FoldersService::new(self.handle.client()?).get(id),
                None => Ok(None),
            })
            .map(Option::as_ref)
    }
}
