//! HTTP client and dispatch layer for the Wrike API.
//!
//! This module provides the main entry point [`WrikeClient`]. All resource
//! access funnels through its dispatcher, which attaches credentials,
//! normalizes URLs and retries throttled requests.
//!
//! # Example
//!
//! ```no_run
//! use wrike_rs::{ClientConfig, Params, RetryConfig, WrikeClient};
//!
//! # fn example() -> wrike_rs::Result<()> {
//! let config = ClientConfig::default().with_retry(RetryConfig::bounded());
//! let client = WrikeClient::with_token("access-token", config)?;
//!
//! let response = client.get("version", &Params::new())?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod listing;
mod params;
mod response;

pub use config::{BackoffGrowth, ClientConfig, OAuthConfig, RetryConfig, ENV_BASE_URL, ENV_TIMEOUT_SECS};
pub use http::WrikeClient;
pub use listing::Listing;
pub use params::Params;
pub use response::{RawResponse, ResponseClass};
pub(crate) use http::ClientInner;
