//! API service modules for Wrike endpoints.
//!
//! Each service groups the requests for one resource kind. They are reached
//! through the flat methods on [`WrikeClient`](crate::WrikeClient) and the
//! navigation methods on the models.

mod accounts;
mod attachments;
mod comments;
mod contacts;
mod folders;
mod groups;
mod tasks;
mod users;
mod version;

pub(crate) use accounts::AccountsService;
pub(crate) use attachments::AttachmentsService;
pub(crate) use comments::CommentsService;
pub(crate) use contacts::ContactsService;
pub(crate) use folders::FoldersService;
pub(crate) use groups::GroupsService;
pub(crate) use tasks::TasksService;
pub(crate) use users::UsersService;
pub(crate) use version::VersionService;

use url::Url;

use crate::{Error, Result};

/// Join `segments` into a path relative to the API base.
///
/// Each segment is percent-encoded, so a `/`, `?` or `#` inside an ID stays
/// part of that ID.
pub(crate) fn resource_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse("wrike:/")?;
    url.path_segments_mut()
        .map_err(|_| Error::InvalidInput("cannot build resource path".to_string()))?
        .clear()
        .extend(segments);
    Ok(url.path().trim_start_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids_are_unchanged() {
        assert_eq!(resource_path(&["tasks", "IEAGIITRKQAYHYM6"]).unwrap(), "tasks/IEAGIITRKQAYHYM6");
        assert_eq!(
            resource_path(&["accounts", "IEAGIITR", "tasks"]).unwrap(),
            "accounts/IEAGIITR/tasks"
        );
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(resource_path(&["tasks", "a/b?c"]).unwrap(), "tasks/a%2Fb%3Fc");
        assert_eq!(resource_path(&["users", "x#y z"]).unwrap(), "users/x%23y%20z");
        assert_eq!(resource_path(&["users", "50%"]).unwrap(), "users/50%25");
    }

    #[test]
    fn test_id_list_keeps_commas() {
        assert_eq!(resource_path(&["folders", "A,B"]).unwrap(), "folders/A,B");
    }
}
