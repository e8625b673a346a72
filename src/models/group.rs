//! Group models.

use serde::{Deserialize, Serialize};

use super::user::MetadataEntry;
use super::{lenient, Account, ClientHandle, Memo, Resource, User};
use crate::api::{AccountsService, UsersService};
use crate::Result;

/// A named collection of users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// ID of the owning account
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_id: Option<String>,
    /// Title
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    /// IDs of member users
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub member_ids: Option<Vec<String>>,
    /// IDs of child groups
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub child_ids: Option<Vec<String>>,
    /// IDs of parent groups
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub parent_ids: Option<Vec<String>>,
    /// Avatar URL
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub avatar_url: Option<String>,
    /// Present and `true` for the default "My Team" group
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub my_team: Option<bool>,
    /// Metadata entries
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub metadata: Option<Vec<MetadataEntry>>,

    #[serde(skip)]
    handle: ClientHandle,
    #[serde(skip)]
    account: Memo<Option<Account>>,
    #[serde(skip)]
    users: Memo<Vec<User>>,
}

impl Resource for Group {
    const KIND: &'static str = "group";

    fn attach(&mut self, handle: ClientHandle) {
        self.handle = handle;
    }
}

impl Group {
    /// Account the group belongs to, fetched on first access.
    pub fn account(&self) -> Result<Option<&Account>> {
        self.account
            .get_or_try_init(|| match &self.account_id {
                Some(id) => AccountsService::new(self.handle.client()?).get(id),
                None => Ok(None),
            })
            .map(Option::as_ref)
    }

    /// Members of the group, one lookup per member on first access.
    pub fn users(&self) -> Result<&[User]> {
        self.users
            .get_or_try_init(|| match &self.member_ids {
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

    #[test]
    fn test_deserialize_group() {
        let json = r#"{
            "id": "KX7XOYQF",
            "accountId": "IEAGIITR",
            "title": "Engineering",
            "memberIds": ["KUAJ25LD", "KUAJ25LE"],
            "childIds": [],
            "parentIds": [],
            "myTeam": false,
            "metadata": [{"key": "floor", "value": "3"}]
        }"#;

        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.title.as_deref(), Some("Engineering"));
        assert_eq!(group.member_ids.as_ref().map(Vec::len), Some(2));
        assert_eq!(group.my_team, Some(false));
    }

    #[test]
    fn test_group_without_account_or_members() {
        let group = Group::default();
        assert!(group.account().unwrap().is_none());
        assert!(group.users().unwrap().is_empty());
    }
}
