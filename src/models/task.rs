//! Task models.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{TaskImportance, TaskStatus};
use super::{lenient, require_id, timestamp, Account, Attachment, ClientHandle, Comment, Memo, Resource, User};
use crate::api::{AccountsService, TasksService, UsersService};
use crate::client::Listing;
use crate::{export, Result};

/// Scheduling block of a task.
///
/// `start` and `due` are local dates without a zone (`yyyy-MM-ddTHH:mm:ss`)
/// and are kept as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDates {
    /// `Backlog`, `Milestone` or `Planned`
    #[serde(rename = "type", default, deserialize_with = "lenient::deserialize")]
    pub date_type: Option<String>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub duration: Option<i64>,
    /// Start date
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub start: Option<String>,
    /// Due date
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub due: Option<String>,
    /// Whether weekends count as working days
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub work_on_weekends: Option<bool>,
}

/// A Wrike task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// ID of the owning account
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_id: Option<String>,
    /// Title
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    /// Description, may contain HTML
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub description: Option<String>,
    /// Plain-text excerpt of the description
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub brief_description: Option<String>,
    /// IDs of the parent folders
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub parent_ids: Option<Vec<String>>,
    /// IDs of the inherited parent folders
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub super_parent_ids: Option<Vec<String>>,
    /// IDs of the users the task is shared with
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub shared_ids: Option<Vec<String>>,
    /// IDs of the assignees
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub responsible_ids: Option<Vec<String>>,
    /// Status
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<TaskStatus>,
    /// Importance
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub importance: Option<TaskImportance>,
    /// When the task was created
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the task was last updated
    #[serde(default, with = "timestamp::option")]
    pub updated_date: Option<DateTime<Utc>>,
    /// When the task was completed
    #[serde(default, with = "timestamp::option")]
    pub completed_date: Option<DateTime<Utc>>,
    /// Schedule
    #[serde(default, deserialize_with = "lenient::record")]
    pub dates: Option<TaskDates>,
    /// Location scope, e.g. `WsTask` or `RbTask`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub scope: Option<String>,
    /// IDs of the task's authors
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub author_ids: Option<Vec<String>>,
    /// ID of the workflow status
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub custom_status_id: Option<String>,
    /// Whether the task has attachments
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub has_attachments: Option<bool>,
    /// Number of attachments
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub attachment_count: Option<u32>,
    /// Link to the task in the web UI
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub permalink: Option<String>,
    /// Ordering key among siblings
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub priority: Option<String>,
    /// Whether the requesting user follows the task
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub followed_by_me: Option<bool>,
    /// IDs of followers
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub follower_ids: Option<Vec<String>>,
    /// Whether the task recurs
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub recurrent: Option<bool>,

    #[serde(skip)]
    handle: ClientHandle,
    #[serde(skip)]
    account: Memo<Option<Account>>,
    #[serde(skip)]
    author: Memo<Option<User>>,
}

impl Resource for Task {
    const KIND: &'static str = "task";

    fn attach(&mut self, handle: ClientHandle) {
        self.handle = handle;
    }
}

impl Task {
    /// Account the task belongs to, fetched on first access.
    pub fn account(&self) -> Result<Option<&Account>> {
        self.account
            .get_or_try_init(|| match &self.account_id {
                Some(id) => AccountsService::new(self.handle.client()?).get(id),
                None => Ok(None),
            })
            .map(Option::as_ref)
    }

    /// First listed author, fetched on first access.
    pub fn author(&self) -> Result<Option<&User>> {
        self.author
            .get_or_try_init(|| {
                match self.author_ids.as_deref().and_then(<[String]>::first) {
                    Some(id) => UsersService::new(self.handle.client()?).get(id),
                    None => Ok(None),
                }
            })
            .map(Option::as_ref)
    }

    /// Attachments of the task.
    pub fn attachments(&self) -> Result<Listing<Attachment>> {
        let id = require_id(&self.id, Self::KIND)?;
        TasksService::new(self.handle.client()?).attachments(id)
    }

    /// Comments on the task.
    pub fn comments(&self) -> Result<Listing<Comment>> {
        let id = require_id(&self.id, Self::KIND)?;
        TasksService::new(self.handle.client()?).comments(id)
    }

    /// Write the task as a standalone HTML page to `path`.
    ///
    /// The page includes the author, attachments and comments, so this
    /// issues up to three requests. An existing file is overwritten.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let author = self.author()?;
        let attachments = self.attachments()?.collect::<Result<Vec<_>>>()?;
        let comments = self.comments()?.collect::<Result<Vec<_>>>()?;

        let html = export::render_task(self, author, &attachments, &comments);
        std::fs::write(path.as_ref(), html)?;

        tracing::info!(task = ?self.id, path = %path.as_ref().display(), "exported task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_deserialize_task() {
        let json = r#"{
            "id": "IEAGIITRKQAYHYM6",
            "accountId": "IEAGIITR",
            "title": "Test Task",
            "description": "<b>bold</b>",
            "parentIds": ["IEAGIITRI4AYHYMV"],
            "status": "Active",
            "importance": "Normal",
            "createdDate": "2016-10-07T09:54:06Z",
            "updatedDate": "2016-10-07T09:54:18Z",
            "dates": {"type": "Planned", "duration": 480, "start": "2016-10-07T09:00:00",
                      "due": "2016-10-07T17:00:00", "workOnWeekends": false},
            "scope": "WsTask",
            "authorIds": ["KUAJ25LD"],
            "hasAttachments": true,
            "attachmentCount": 1,
            "permalink": "https://www.wrike.com/open.htm?id=123",
            "priority": "0400000000000000000000",
            "followedByMe": true,
            "recurrent": false
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title.as_deref(), Some("Test Task"));
        assert_eq!(task.status, Some(TaskStatus::Active));
        assert_eq!(task.importance, Some(TaskImportance::Normal));
        assert_eq!(task.dates.as_ref().unwrap().duration, Some(480));
        assert!(task.completed_date.is_none());
        assert_eq!(
            task.created_date.unwrap(),
            timestamp::parse("2016-10-07T09:54:06Z").unwrap()
        );
    }

    #[test]
    fn test_off_type_field_is_dropped() {
        let task: Task =
            serde_json::from_str(r#"{"id": "T1", "title": "Demo", "attachmentCount": "3"}"#).unwrap();
        assert_eq!(task.id.as_deref(), Some("T1"));
        assert_eq!(task.title.as_deref(), Some("Demo"));
        assert_eq!(task.attachment_count, None);

        let task: Task = serde_json::from_str(
            r#"{"id": "T1", "status": 7, "authorIds": "KUAJ25LD", "dates": "soon"}"#,
        )
        .unwrap();
        assert!(task.status.is_none());
        assert!(task.author_ids.is_none());
        assert!(task.dates.is_none());
    }

    #[test]
    fn test_task_timestamps_stay_strict() {
        let result = serde_json::from_str::<Task>(r#"{"id": "T1", "updatedDate": "yesterday"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_task_without_account_or_author() {
        let task: Task = serde_json::from_str(r#"{"id": "T1", "authorIds": []}"#).unwrap();
        assert!(task.account().unwrap().is_none());
        assert!(task.author().unwrap().is_none());
    }

    #[test]
    fn test_detached_task_listing_fails() {
        let task: Task = serde_json::from_str(r#"{"id": "T1"}"#).unwrap();
        assert!(matches!(task.comments(), Err(Error::ClientUnavailable)));
    }
}
