//! Folder and project models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, require_id, timestamp, Attachment, ClientHandle, Memo, Resource, User};
use crate::api::{FoldersService, UsersService};
use crate::client::Listing;
use crate::Result;

/// Project details present when a folder is a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// ID of the project owner
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub author_id: Option<String>,
    /// Owner IDs
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub owner_ids: Option<Vec<String>>,
    /// Project status, e.g. `Green`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub status: Option<String>,
    /// Planned start date, `yyyy-MM-dd`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub start_date: Option<String>,
    /// Planned end date, `yyyy-MM-dd`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub end_date: Option<String>,
    /// When the project was created
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the project was completed
    #[serde(default, with = "timestamp::option")]
    pub completed_date: Option<DateTime<Utc>>,
}

/// A Wrike folder. Projects are folders carrying a [`Project`] block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// ID of the owning account
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_id: Option<String>,
    /// Title
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    /// When the folder was created
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the folder was last updated
    #[serde(default, with = "timestamp::option")]
    pub updated_date: Option<DateTime<Utc>>,
    /// Plain-text excerpt of the description
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub brief_description: Option<String>,
    /// Description, may contain HTML
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub description: Option<String>,
    /// Color name
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub color: Option<String>,
    /// IDs of the users the folder is shared with
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub shared_ids: Option<Vec<String>>,
    /// IDs of the parent folders
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub parent_ids: Option<Vec<String>>,
    /// IDs of the child folders
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub child_ids: Option<Vec<String>>,
    /// IDs of the inherited parent folders
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub super_parent_ids: Option<Vec<String>>,
    /// Location scope, e.g. `WsFolder` or `RbFolder`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub scope: Option<String>,
    /// Whether the folder has attachments
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub has_attachments: Option<bool>,
    /// Number of attachments
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub attachment_count: Option<u32>,
    /// Project details
    #[serde(default, deserialize_with = "lenient::record")]
    pub project: Option<Project>,

    #[serde(skip)]
    handle: ClientHandle,
    #[serde(skip)]
    shared_users: Memo<Vec<User>>,
}

impl Resource for Folder {
    const KIND: &'static str = "folder";

    fn attach(&mut self, handle: ClientHandle) {
        self.handle = handle;
    }
}

impl Folder {
    /// Attachments of the folder.
    pub fn attachments(&self) -> Result<Listing<Attachment>> {
        let id = require_id(&self.id, Self::KIND)?;
        FoldersService::new(self.handle.client()?).attachments(id)
    }

    /// Child folders, carrying only their IDs.
    ///
    /// No request is made; look a child up with
    /// [`WrikeClient::folder`](crate::WrikeClient::folder) for its details.
    pub fn children(&self) -> impl Iterator<Item = Folder> + '_ {
        self.child_ids.iter().flatten().map(|child_id| Folder {
            id: Some(child_id.clone()),
            handle: self.handle.clone(),
            ..Folder::default()
        })
    }

    /// Users the folder is shared with, fetched on first access.
    ///
    /// IDs the API does not resolve are skipped.
    pub fn shared_users(&self) -> Result<&[User]> {
        self.shared_users
            .get_or_try_init(|| match &self.shared_ids {
                Some(ids) if !ids.is_empty() => {
                    UsersService::new(self.handle.client()?).get_each(ids)
                }
                _ => Ok(Vec::new()),
            })
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder() -> Folder {
        serde_json::from_str(
            r#"{
                "id": "IEAGIITRI4AYHYMV",
                "accountId": "IEAGIITR",
                "title": "Pryke Test Folder",
                "createdDate": "2016-10-07T09:50:25Z",
                "updatedDate": "2016-10-07T09:54:18Z",
                "sharedIds": [],
                "childIds": ["IEAGIITRI4AYHYMW", "IEAGIITRI4AYHYMX"],
                "scope": "WsFolder",
                "hasAttachments": true,
                "attachmentCount": 1,
                "project": {"authorId": "KUAJ25LD", "status": "Green", "startDate": "2016-10-07"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_folder() {
        let folder = folder();
        assert_eq!(folder.account_id.as_deref(), Some("IEAGIITR"));
        assert_eq!(folder.attachment_count, Some(1));
        assert_eq!(folder.project.unwrap().status.as_deref(), Some("Green"));
    }

    #[test]
    fn test_children_carry_only_ids() {
        let children: Vec<Folder> = folder().children().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id.as_deref(), Some("IEAGIITRI4AYHYMW"));
        assert!(children[0].title.is_none());
    }

    #[test]
    fn test_no_children() {
        assert_eq!(Folder::default().children().count(), 0);
    }

    #[test]
    fn test_empty_share_list_needs_no_client() {
        assert!(folder().shared_users().unwrap().is_empty());
    }
}
