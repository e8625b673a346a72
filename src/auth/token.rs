use secrecy::SecretString;

use super::CredentialSource;
use crate::Result;

/// A pre-obtained access token that never expires from the client's view.
///
/// Refreshing is not possible; when the API starts rejecting the token the
/// caller has to build a new client.
#[derive(Clone)]
pub struct StaticToken {
    token: SecretString,
}

impl StaticToken {
    /// Wrap an access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl CredentialSource for StaticToken {
    fn access_token(&self) -> Result<SecretString> {
        Ok(self.token.clone())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
