//! User models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::UserType;
use super::{lenient, ClientHandle, Resource};

/// A user's membership in one account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Account the profile belongs to
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub account_id: Option<String>,
    /// Email used in that account
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub email: Option<String>,
    /// Role in the account (`User`, `Collaborator`)
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub role: Option<String>,
    /// Whether the user is an external collaborator
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub external: Option<bool>,
    /// Whether the user administers the account
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub admin: Option<bool>,
    /// Whether the user owns the account
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub owner: Option<bool>,
}

/// A key/value metadata entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Key
    pub key: String,
    /// Value
    pub value: String,
}

/// A Wrike user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// First name
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub last_name: Option<String>,
    /// Person or group
    #[serde(rename = "type", default, deserialize_with = "lenient::deserialize")]
    pub user_type: Option<UserType>,
    /// Profiles in the accounts visible to the requesting user
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub profiles: Option<Vec<UserProfile>>,
    /// Avatar URL
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub avatar_url: Option<String>,
    /// Time zone ID, e.g. `America/New_York`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub timezone: Option<String>,
    /// Locale
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub locale: Option<String>,
    /// Whether the user is deleted
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub deleted: Option<bool>,
    /// Present and `true` for the requesting user
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub me: Option<bool>,
    /// Member contact IDs, for groups
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub member_ids: Option<Vec<String>>,
    /// Metadata entries
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub metadata: Option<Vec<MetadataEntry>>,
    /// Present and `true` for the default "My Team" group
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub my_team: Option<bool>,
    /// Job title
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    /// Company name
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub company_name: Option<String>,
    /// Phone number
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub phone: Option<String>,
    /// Location
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub location: Option<String>,
}

impl Resource for User {
    const KIND: &'static str = "user";

    fn attach(&mut self, _handle: ClientHandle) {}
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}
