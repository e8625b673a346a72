//! Credential sources for the Wrike API.
//!
//! The dispatcher only needs a bearer token and, optionally, a way to
//! refresh it. That capability is the [`CredentialSource`] trait, with two
//! implementations:
//!
//! 1. **[`StaticToken`]** - a pre-obtained access token (permanent tokens,
//!    tests, tokens stored by the application)
//! 2. **[`OAuthSession`]** - the OAuth2 authorization-code flow, with
//!    refresh-token support
//!
//! # Pre-supplied token
//!
//! ```no_run
//! use wrike_rs::{ClientConfig, WrikeClient};
//!
//! # fn example() -> wrike_rs::Result<()> {
//! let client = WrikeClient::with_token("permanent-token", ClientConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Authorization code
//!
//! ```no_run
//! use wrike_rs::{ClientConfig, OAuthSession, WrikeClient};
//!
//! # fn example() -> wrike_rs::Result<()> {
//! let config = ClientConfig::default();
//! let pending = OAuthSession::begin("client-id", "client-secret", config.oauth.clone())?;
//! println!("Open {}", pending.url());
//!
//! // ... user authorizes and is redirected ...
//! let session = pending.complete("http://localhost/?code=abc&state=...")?;
//! let client = WrikeClient::with_credentials(session, config)?;
//! # Ok(())
//! # }
//! ```

mod session;
mod token;

pub use session::{OAuthSession, PendingAuthorization};
pub use token::StaticToken;

use chrono::Duration;
use secrecy::SecretString;

use crate::{Error, Result};

/// Something that can hand out a bearer token for each request.
pub trait CredentialSource: Send + Sync {
    /// The token to attach to the next request.
    fn access_token(&self) -> Result<SecretString>;

    /// Whether the token expires within `buffer`. Sources without an
    /// expiry never report expiring.
    fn expires_within(&self, _buffer: Duration) -> bool {
        false
    }

    /// Obtain a fresh token.
    fn refresh(&self) -> Result<()> {
        Err(Error::SessionExpired)
    }
}
