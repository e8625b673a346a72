//! Attachment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::AttachmentType;
use super::{lenient, timestamp, ClientHandle, Memo, Resource, User};
use crate::api::UsersService;
use crate::Result;

/// A file attached to a task or folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// ID of the user who uploaded the attachment
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub author_id: Option<String>,
    /// File name
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
    /// Upload date
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<DateTime<Utc>>,
    /// Attachment version
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub version: Option<u32>,
    /// Storage backing the attachment
    #[serde(rename = "type", default, deserialize_with = "lenient::deserialize")]
    pub attachment_type: Option<AttachmentType>,
    /// MIME type
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub content_type: Option<String>,
    /// Size in bytes; `-1` for external attachments
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub size: Option<i64>,
    /// ID of the related task
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub task_id: Option<String>,
    /// ID of the related folder
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub folder_id: Option<String>,

    #[serde(skip)]
    handle: ClientHandle,
    #[serde(skip)]
    author: Memo<Option<User>>,
}

impl Resource for Attachment {
    const KIND: &'static str = "attachment";

    fn attach(&mut self, handle: ClientHandle) {
        self.handle = handle;
    }
}

impl Attachment {
    /// User who uploaded the attachment, fetched on first access.
    pub fn author(&self) -> Result<Option<&User>> {
        self.author
            .get_or_try_init(|| match &self.author_id {
                Some(author_id) => UsersService::new(self.handle.client()?).get(author_id),
                None => Ok(None),
            })
            .map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_attachment() {
        let json = r#"{
            "id": "IEAGIITRIYACEGSN",
            "authorId": "KUAJ25LD",
            "name": "Result.pdf",
            "createdDate": "2016-10-07T09:54:06Z",
            "version": 1,
            "type": "Wrike",
            "contentType": "application/pdf",
            "size": 1024,
            "taskId": "IEAGIITRKQAYHYM6"
        }"#;

        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.attachment_type, Some(AttachmentType::Wrike));
        assert_eq!(attachment.size, Some(1024));
        assert_eq!(attachment.task_id.as_deref(), Some("IEAGIITRKQAYHYM6"));
        assert!(attachment.folder_id.is_none());
    }

    #[test]
    fn test_external_attachment_size() {
        let attachment: Attachment =
            serde_json::from_str(r#"{"id": "A1", "type": "Google", "size": -1}"#).unwrap();
        assert!(attachment.attachment_type.unwrap().is_external());
        assert_eq!(attachment.size, Some(-1));
    }

    #[test]
    fn test_malformed_created_date_is_an_error() {
        let result: serde_json::Result<Attachment> =
            serde_json::from_str(r#"{"id": "A1", "createdDate": "07/10/2016"}"#);
        assert!(result.is_err());
    }
}
