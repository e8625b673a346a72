//! OAuth2 authorization-code session for the Wrike API.

use std::io::{BufRead, Write};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use super::CredentialSource;
use crate::client::OAuthConfig;
use crate::{Datacenter, Error, Result};

/// Token state obtained through the OAuth2 authorization-code flow.
///
/// Access tokens are short-lived (about an hour); the session keeps the
/// refresh token and exchanges it for a new access token when asked.
///
/// # Thread Safety
///
/// The token state sits behind a lock, so a session can back a client that
/// is shared between threads.
pub struct OAuthSession {
    http: reqwest::blocking::Client,
    client_id: String,
    client_secret: SecretString,
    config: OAuthConfig,
    inner: RwLock<SessionInner>,
}

struct SessionInner {
    access_token: SecretString,
    refresh_token: Option<SecretString>,
    expires_at: Option<DateTime<Utc>>,
    host: Option<String>,
}

/// First half of the authorization-code flow: the URL to visit and the
/// `state` value the callback must echo back.
pub struct PendingAuthorization {
    client_id: String,
    client_secret: SecretString,
    config: OAuthConfig,
    url: Url,
    state: String,
}

impl OAuthSession {
    /// Start the authorization-code flow.
    pub fn begin(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: OAuthConfig,
    ) -> Result<PendingAuthorization> {
        let client_id = client_id.into();
        let state = Uuid::new_v4().simple().to_string();

        let mut url = Url::parse(&config.authorize_url)?;
        url.query_pairs_mut()
            .append_pair("client_id", &client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &config.redirect_uri)
            .append_pair("state", &state);

        Ok(PendingAuthorization {
            client_id,
            client_secret: SecretString::from(client_secret.into()),
            config,
            url,
            state,
        })
    }

    /// Run the flow on the terminal.
    ///
    /// Prints the authorization URL, blocks until the full callback URL is
    /// entered on stdin, then exchanges the code for a token.
    pub fn authorize_interactive(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: OAuthConfig,
    ) -> Result<Self> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        Self::authorize_with(client_id, client_secret, config, &mut input, &mut output)
    }

    /// Run the flow against arbitrary input and output streams.
    pub fn authorize_with<R: BufRead, W: Write>(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: OAuthConfig,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self> {
        let pending = Self::begin(client_id, client_secret, config)?;

        writeln!(output, "{}", pending.url())?;
        write!(output, "Enter the full callback URL: ")?;
        output.flush()?;

        let mut callback = String::new();
        input.read_line(&mut callback)?;
        pending.complete(callback.trim())
    }

    /// Exchange an authorization code obtained out of band.
    pub fn from_code(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: OAuthConfig,
        code: &str,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = SecretString::from(client_secret.into());
        let http = reqwest::blocking::Client::new();

        let token = exchange_token(
            &http,
            &config.token_url,
            &[
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.expose_secret()),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", config.redirect_uri.as_str()),
            ],
        )?;
        tracing::info!(host = ?token.host, "exchanged authorization code for access token");
        let config = follow_host(config, token.host.as_deref());

        Ok(Self {
            http,
            client_id,
            client_secret,
            config,
            inner: RwLock::new(SessionInner {
                access_token: SecretString::from(token.access_token),
                refresh_token: token.refresh_token.map(SecretString::from),
                expires_at: token.expires_in.map(|secs| Utc::now() + Duration::seconds(secs)),
                host: token.host,
            }),
        })
    }

    /// Endpoints used for refreshing, moved to the token's datacenter when
    /// the exchange reported one.
    pub fn oauth_config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Host the token was issued for, which identifies the datacenter.
    pub fn host(&self) -> Option<String> {
        self.read().host.clone()
    }

    /// When the current access token expires, if the server said.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.read().expires_at
    }

    /// Check if the access token has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_within(Duration::zero())
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialSource for OAuthSession {
    fn access_token(&self) -> Result<SecretString> {
        Ok(self.read().access_token.clone())
    }

    fn expires_within(&self, buffer: Duration) -> bool {
        self.read()
            .expires_at
            .is_some_and(|expires_at| Utc::now() + buffer >= expires_at)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionExpired`] if the server never issued a refresh
    /// token, and [`Error::Authentication`] if the exchange is rejected.
    fn refresh(&self) -> Result<()> {
        let mut inner = self.write();

        let Some(refresh_token) = inner.refresh_token.as_ref() else {
            return Err(Error::SessionExpired);
        };

        let token = exchange_token(
            &self.http,
            &self.config.token_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.expose_secret()),
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.expose_secret()),
            ],
        )?;
        tracing::info!("refreshed access token");

        inner.access_token = SecretString::from(token.access_token);
        inner.expires_at = token.expires_in.map(|secs| Utc::now() + Duration::seconds(secs));
        if let Some(new_refresh) = token.refresh_token {
            inner.refresh_token = Some(SecretString::from(new_refresh));
        }
        if token.host.is_some() {
            inner.host = token.host;
        }
        Ok(())
    }
}

impl PendingAuthorization {
    /// URL the user must open to grant access.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Anti-forgery value expected back in the callback.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Finish the flow with the URL the browser was redirected to.
    pub fn complete(self, callback_url: &str) -> Result<OAuthSession> {
        let code = parse_callback(callback_url, &self.state)?;
        OAuthSession::from_code(
            self.client_id,
            self.client_secret.expose_secret(),
            self.config,
            &code,
        )
    }
}

/// Move Wrike endpoints to the datacenter named by the token's `host`.
///
/// Tokens are only valid against their own datacenter, so a refresh has to
/// go there. Endpoints that are not a Wrike datacenter's are left alone.
fn follow_host(config: OAuthConfig, host: Option<&str>) -> OAuthConfig {
    let target = host.and_then(Datacenter::from_host);
    match (config.datacenter(), target) {
        (Some(current), Some(target)) if current != target => {
            tracing::debug!(from = %current, to = %target, "moving OAuth endpoints to token datacenter");
            config.with_datacenter(target)
        }
        _ => config,
    }
}

/// Extract the authorization code from a callback URL.
fn parse_callback(callback_url: &str, expected_state: &str) -> Result<String> {
    let url = Url::parse(callback_url)
        .map_err(|e| Error::Authentication(format!("Invalid callback URL {callback_url:?}: {e}")))?;

    let mut code = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }

    if let Some(error) = error {
        return Err(Error::Authentication(format!("Authorization denied: {error}")));
    }
    if state.as_deref() != Some(expected_state) {
        return Err(Error::Authentication("State mismatch in callback URL".to_string()));
    }
    code.ok_or_else(|| Error::Authentication("Callback URL carries no code".to_string()))
}

fn exchange_token(
    http: &reqwest::blocking::Client,
    token_url: &str,
    form: &[(&str, &str)],
) -> Result<TokenResponse> {
    let response = http.post(token_url).form(form).send()?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        return Err(Error::Authentication(format!(
            "Token exchange failed ({}): {}",
            status, body
        )));
    }

    Ok(response.json()?)
}

impl std::fmt::Debug for OAuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.read();
        f.debug_struct("OAuthSession")
            .field("client_id", &self.client_id)
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &inner.expires_at)
            .field("host", &inner.host)
            .finish()
    }
}

impl std::fmt::Debug for PendingAuthorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAuthorization")
            .field("url", &self.url.as_str())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    host: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> PendingAuthorization {
        OAuthSession::begin("my-client", "my-secret", OAuthConfig::default()).unwrap()
    }

    #[test]
    fn test_authorization_url() {
        let pending = pending();
        let url = pending.url();
        assert_eq!(url.host_str(), Some("www.wrike.com"));
        assert_eq!(url.path(), "/oauth2/authorize");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("client_id".into(), "my-client".into())));
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&("redirect_uri".into(), "http://localhost".into())));
        assert!(pairs.contains(&("state".into(), pending.state().to_string())));
    }

    #[test]
    fn test_refresh_endpoint_follows_token_host() {
        let config = follow_host(OAuthConfig::default(), Some("app-eu.wrike.com"));
        assert_eq!(config.token_url, "https://app-eu.wrike.com/oauth2/token");
        assert_eq!(config.authorize_url, "https://app-eu.wrike.com/oauth2/authorize");

        let config = follow_host(OAuthConfig::default(), Some("www.wrike.com"));
        assert_eq!(config.token_url, "https://www.wrike.com/oauth2/token");

        let config = follow_host(OAuthConfig::default(), None);
        assert_eq!(config.token_url, "https://www.wrike.com/oauth2/token");
    }

    #[test]
    fn test_custom_endpoints_ignore_token_host() {
        let custom = OAuthConfig::default().with_token_url("http://127.0.0.1:9000/oauth2/token");
        let config = follow_host(custom, Some("app-eu.wrike.com"));
        assert_eq!(config.token_url, "http://127.0.0.1:9000/oauth2/token");
    }

    #[test]
    fn test_states_are_unique() {
        assert_ne!(pending().state(), pending().state());
    }

    #[test]
    fn test_parse_callback() {
        let code = parse_callback("http://localhost/?code=abc123&state=xyz", "xyz").unwrap();
        assert_eq!(code, "abc123");
    }

    #[test]
    fn test_parse_callback_state_mismatch() {
        let err = parse_callback("http://localhost/?code=abc123&state=evil", "xyz").unwrap_err();
        assert!(err.is_auth_error());

        let err = parse_callback("http://localhost/?code=abc123", "xyz").unwrap_err();
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_parse_callback_denied() {
        let err = parse_callback("http://localhost/?error=access_denied&state=xyz", "xyz").unwrap_err();
        assert!(err.to_string().contains("access_denied"));
    }

    #[test]
    fn test_parse_callback_not_a_url() {
        assert!(matches!(
            parse_callback("abc123", "xyz"),
            Err(Error::Authentication(_))
        ));
    }

    #[test]
    fn test_authorize_with_prints_url_and_rejects_empty_input() {
        let mut input = std::io::Cursor::new(Vec::new());
        let mut output = Vec::new();

        let result = OAuthSession::authorize_with(
            "my-client",
            "my-secret",
            OAuthConfig::default(),
            &mut input,
            &mut output,
        );

        assert!(matches!(result, Err(Error::Authentication(_))));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.starts_with("https://www.wrike.com/oauth2/authorize?client_id=my-client"));
        assert!(printed.contains("Enter the full callback URL"));
    }
}
