//! Data models for the Wrike API.
//!
//! Models are plain records filled from the API's JSON with a permissive
//! policy: every field is optional, unknown keys are ignored, a value of the
//! wrong JSON type leaves just that field unset, and only timestamps are
//! validated. Organized by resource:
//!
//! - [`primitives`] - Datacenter selector, client handle, memo cell
//! - [`enums`] - Attachment, user, and task enumerations
//! - [`timestamp`] - Wire format for date-time fields
//! - [`account`], [`attachment`], [`comment`], [`contact`], [`folder`],
//!   [`group`], [`task`], [`user`] - One module per resource kind
//!
//! Cross-references such as [`Task::account`] are resolved on first access
//! with one extra request and cached on the instance.

pub mod primitives;
pub mod enums;
pub mod timestamp;
mod lenient;
pub mod account;
pub mod attachment;
pub mod comment;
pub mod contact;
pub mod folder;
pub mod group;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use attachment::*;
pub use comment::*;
pub use contact::*;
pub use folder::*;
pub use group::*;
pub use task::*;
pub use user::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Result};

/// A resource kind that can be built from one entry of a `data` array.
pub trait Resource: DeserializeOwned {
    /// Name used in logs and error messages.
    const KIND: &'static str;

    /// Give the resource its back-reference to the client.
    fn attach(&mut self, handle: ClientHandle);

    /// Deserialize one `data` entry and attach the handle.
    fn from_data(entry: Value, handle: &ClientHandle) -> Result<Self> {
        let mut resource: Self = serde_json::from_value(entry)?;
        resource.attach(handle.clone());
        Ok(resource)
    }
}

/// Identifier required to build a nested path, or an input error.
pub(crate) fn require_id<'a>(id: &'a Option<String>, kind: &str) -> Result<&'a str> {
    id.as_deref()
        .ok_or_else(|| Error::InvalidInput(format!("{kind} has no id")))
}
