//! Account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::WeekDay;
use super::user::MetadataEntry;
use super::{lenient, require_id, timestamp, Attachment, ClientHandle, Contact, Folder, Group, Memo, Resource, Task};
use crate::api::{AccountsService, FoldersService};
use crate::client::Listing;
use crate::Result;

/// Billing plan of an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Plan name, e.g. `Enterprise`
    #[serde(rename = "type", default, deserialize_with = "lenient::deserialize")]
    pub subscription_type: Option<String>,
    /// Whether the plan is paid
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub paid: Option<bool>,
    /// Seat limit
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub user_limit: Option<u32>,
}

/// A Wrike account.
///
/// Nested listings ([`tasks`](Self::tasks), [`folders`](Self::folders), ...)
/// issue one request per call. [`root_folder`](Self::root_folder) and
/// [`recycle_bin`](Self::recycle_bin) are fetched once and cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub id: Option<String>,
    /// Account name
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
    /// Date format, `dd/MM/yyyy` or `MM/dd/yyyy`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub date_format: Option<String>,
    /// First day of the week
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub first_day_of_week: Option<WeekDay>,
    /// Working days used in task duration computation
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub work_days: Option<Vec<WeekDay>>,
    /// ID of the root folder
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub root_folder_id: Option<String>,
    /// ID of the recycle bin folder
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub recycle_bin_id: Option<String>,
    /// When the account was created
    #[serde(default, with = "timestamp::option")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the requesting user joined the account
    #[serde(default, with = "timestamp::option")]
    pub joined_date: Option<DateTime<Utc>>,
    /// Billing plan
    #[serde(default, deserialize_with = "lenient::record")]
    pub subscription: Option<Subscription>,
    /// Metadata entries
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub metadata: Option<Vec<MetadataEntry>>,
    /// Custom field definitions, kept as raw JSON
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub custom_fields: Option<Vec<Value>>,

    #[serde(skip)]
    handle: ClientHandle,
    #[serde(skip)]
    root_folder: Memo<Option<Folder>>,
    #[serde(skip)]
    recycle_bin: Memo<Option<Folder>>,
}

impl Resource for Account {
    const KIND: &'static str = "account";

    fn attach(&mut self, handle: ClientHandle) {
        self.handle = handle;
    }
}

impl Account {
    fn service(&self) -> Result<(AccountsService, &str)> {
        let id = require_id(&self.id, Self::KIND)?;
        Ok((AccountsService::new(self.handle.client()?), id))
    }

    /// Attachments of the account's tasks and folders created between
    /// `start` and `end`. The window must not exceed 31 days.
    pub fn attachments(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Listing<Attachment>> {
        let (service, id) = self.service()?;
        service.attachments(id, start, end)
    }

    /// Contacts of the account.
    pub fn contacts(&self) -> Result<Listing<Contact>> {
        let (service, id) = self.service()?;
        service.contacts(id)
    }

    /// Folders of the account.
    pub fn folders(&self) -> Result<Listing<Folder>> {
        let (service, id) = self.service()?;
        service.folders(id)
    }

    /// Groups of the account.
    pub fn groups(&self) -> Result<Listing<Group>> {
        let (service, id) = self.service()?;
        service.groups(id)
    }

    /// Tasks of the account.
    pub fn tasks(&self) -> Result<Listing<Task>> {
        let (service, id) = self.service()?;
        service.tasks(id)
    }

    /// Root folder of the account, fetched on first access.
    pub fn root_folder(&self) -> Result<Option<&Folder>> {
        self.root_folder
            .get_or_try_init(|| self.lookup_folder(self.root_folder_id.as_deref()))
            .map(Option::as_ref)
    }

    /// Folder holding deleted tasks and folders, fetched on first access.
    pub fn recycle_bin(&self) -> Result<Option<&Folder>> {
        self.recycle_bin
            .get_or_try_init(|| self.lookup_folder(self.recycle_bin_id.as_deref()))
            .map(Option::as_ref)
    }

    fn lookup_folder(&self, folder_id: Option<&str>) -> Result<Option<Folder>> {
        match folder_id {
            Some(folder_id) => FoldersService::new(self.handle.client()?).get(folder_id),
            None => Ok(None),
        }
    }
}
