//! Contact models.

use serde::{Deserialize, Serialize};

use super::enums::UserType;
use super::{lenient, ClientHandle, Resource};

/// A contact of the requesting user: a person or a group they can see.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
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
    /// Avatar URL
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub avatar_url: Option<String>,
    /// Time zone ID
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub timezone: Option<String>,
    /// Locale
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub locale: Option<String>,
    /// Whether the contact is deleted
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub deleted: Option<bool>,
    /// Present and `true` for the requesting user
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub me: Option<bool>,
    /// Member contact IDs, for groups
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub member_ids: Option<Vec<String>>,
}

impl Resource for Contact {
    const KIND: &'static str = "contact";

    fn attach(&mut self, _handle: ClientHandle) {}
}
