//! Enumeration types for the Wrike API.
//!
//! Every enum has an `Unknown` catch-all so that values added upstream do
//! not break parsing.

use serde::{Deserialize, Serialize};

/// Storage backing an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentType {
    /// Box
    Box,
    /// Dropbox
    DropBox,
    /// Google Drive
    Google,
    /// OneDrive
    OneDrive,
    /// File content stored in Wrike itself
    Wrike,
    /// Unknown attachment type
    #[serde(other)]
    Unknown,
}

impl AttachmentType {
    /// Returns `true` for attachments hosted outside Wrike.
    ///
    /// External attachments report a size of `-1`.
    pub fn is_external(&self) -> bool {
        !matches!(self, AttachmentType::Wrike | AttachmentType::Unknown)
    }
}

/// Kind of a user or contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    /// A single person
    Person,
    /// A group of people
    Group,
    /// Unknown user type
    #[serde(other)]
    Unknown,
}

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Open
    Active,
    /// Done
    Completed,
    /// On hold
    Deferred,
    /// Abandoned
    Cancelled,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Returns `true` if no more work is expected on the task.
    pub fn is_closed(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

/// Importance of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskImportance {
    /// High
    High,
    /// Normal
    Normal,
    /// Low
    Low,
    /// Unknown importance
    #[serde(other)]
    Unknown,
}

/// Day of the week, as used by account calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekDay {
    /// Sunday
    Sun,
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Unknown day
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_type() {
        let t: AttachmentType = serde_json::from_str(r#""DropBox""#).unwrap();
        assert_eq!(t, AttachmentType::DropBox);
        assert!(t.is_external());
        assert!(!AttachmentType::Wrike.is_external());
    }

    #[test]
    fn test_unknown_values_are_tolerated() {
        let t: AttachmentType = serde_json::from_str(r#""Sharepoint""#).unwrap();
        assert_eq!(t, AttachmentType::Unknown);
        let u: UserType = serde_json::from_str(r#""Robot""#).unwrap();
        assert_eq!(u, UserType::Unknown);
        let s: TaskStatus = serde_json::from_str(r#""Archived""#).unwrap();
        assert_eq!(s, TaskStatus::Unknown);
    }

    #[test]
    fn test_task_status() {
        let s: TaskStatus = serde_json::from_str(r#""Completed""#).unwrap();
        assert!(s.is_closed());
        assert!(!TaskStatus::Active.is_closed());
    }
}
