//! # wrike-rs
//!
//! A blocking Rust client for the Wrike project-management REST API (v3).
//!
//! The crate turns the API's JSON resources (accounts, folders, tasks,
//! users, groups, comments, attachments, contacts) into typed records, and
//! lets you navigate between them: a task knows its account and author, an
//! account lists its tasks and folders, and so on.
//!
//! ## Features
//!
//! - **One dispatcher**: every request shares URL normalization, bearer
//!   authentication and transparent retry of throttled (`429`/`503`) responses
//! - **Typed lookups**: single-entity lookups return `Ok(None)` when the API
//!   answers `404`, and an [`Error::Api`] for any other failure
//! - **Lazy listings**: collections are single-pass iterators over one response
//! - **Lazy references**: cross-references are fetched on first access and
//!   cached on the record
//! - **Credentials**: a pre-supplied token, or the OAuth2 authorization-code
//!   flow with refresh
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wrike_rs::WrikeClient;
//!
//! fn main() -> wrike_rs::Result<()> {
//!     let client = WrikeClient::new("client-id", "client-secret", Some("access-token".into()))?;
//!
//!     let (major, minor) = client.version()?;
//!     println!("API v{major}.{minor}");
//!
//!     for account in client.accounts()? {
//!         let account = account?;
//!         println!("{}", account.name.as_deref().unwrap_or_default());
//!
//!         for task in account.tasks()? {
//!             let task = task?;
//!             let author = task.author()?.map(ToString::to_string);
//!             println!("  {:?} by {:?}", task.title, author);
//!         }
//!     }
//!
//!     match client.task("IEAGIITRKQAYHYM6")? {
//!         Some(task) => task.export("task.html")?,
//!         None => println!("no such task"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Retry Policy
//!
//! By default throttled requests are retried without limit. The delay starts
//! at `initial_backoff` and is squared from the second retry on, giving
//! 1s, 1s, 4s, 9s, ... A cap can be configured:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wrike_rs::{ClientConfig, RetryConfig, WrikeClient};
//!
//! # fn example() -> wrike_rs::Result<()> {
//! let retry = RetryConfig::default()
//!     .with_max_retries(5)
//!     .with_max_backoff(Duration::from_secs(30));
//! let client = WrikeClient::with_token("access-token", ClientConfig::default().with_retry(retry))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

mod api;
pub mod auth;
pub mod client;
pub mod error;
mod export;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::Datacenter;
pub use client::{
    BackoffGrowth, ClientConfig, Listing, OAuthConfig, Params, RawResponse, ResponseClass,
    RetryConfig, WrikeClient,
};
pub use auth::{CredentialSource, OAuthSession, PendingAuthorization, StaticToken};

/// Prelude module for convenient imports.
///
/// ```rust
/// use wrike_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        Datacenter,
        // Enums
        AttachmentType, TaskImportance, TaskStatus, UserType, WeekDay,
        // Resources
        Account, Attachment, Comment, Contact, Folder, Group, Task, User,
    };
    pub use crate::client::{ClientConfig, Listing, Params, RetryConfig, WrikeClient};
    pub use crate::auth::{CredentialSource, OAuthSession, StaticToken};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.wrike.com/api/v3/");
        assert_eq!(config.base_url, Datacenter::Us1.api_base_url());
    }

    #[test]
    fn test_default_retry_is_unbounded_squared() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_retries, None);
        assert_eq!(retry.growth, BackoffGrowth::Squared);
        assert_eq!(retry.retry_statuses, vec![429, 503]);
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WrikeClient>();
        assert_send_sync::<models::Task>();
    }
}
