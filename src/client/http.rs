//! HTTP client implementation for the Wrike API.

use std::sync::{Arc, Mutex};

use chrono::Duration;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::ExposeSecret;

use crate::api::{
    AccountsService, AttachmentsService, CommentsService, ContactsService, FoldersService,
    GroupsService, TasksService, UsersService, VersionService,
};
use crate::auth::{CredentialSource, OAuthSession, StaticToken};
use crate::models::{
    Account, Attachment, ClientHandle, Comment, Contact, Folder, Group, Resource, Task, User,
};
use crate::{Datacenter, Error, Result};

use super::config::ClientConfig;
use super::listing::Listing;
use super::params::Params;
use super::response::{RawResponse, ResponseClass};

/// The main client for interacting with the Wrike API.
///
/// Every call is blocking and goes through a single dispatcher that attaches
/// credentials, resolves paths against the configured base URL, and retries
/// throttling responses (`429`, `503`) according to the
/// [`RetryConfig`](crate::RetryConfig).
///
/// # Example
///
/// ```no_run
/// use wrike_rs::WrikeClient;
///
/// # fn example() -> wrike_rs::Result<()> {
/// let client = WrikeClient::new("client-id", "client-secret", Some("access-token".into()))?;
///
/// if let Some(task) = client.task("IEAGIITRKQAYHYM6")? {
///     println!("{:?} in account {:?}", task.title, task.account()?.map(|a| &a.name));
/// }
///
/// for account in client.accounts()? {
///     println!("{:?}", account?.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct WrikeClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::blocking::Client,
    pub(crate) credentials: Box<dyn CredentialSource>,
    pub(crate) config: ClientConfig,
    last_response: Mutex<Option<RawResponse>>,
}

impl WrikeClient {
    /// Create a client from application credentials.
    ///
    /// With an `access_token` the client is ready immediately. Without one,
    /// this runs the interactive authorization-code flow: it prints the
    /// authorization URL, blocks until the full callback URL is pasted on
    /// stdin, and exchanges the code for a token.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: Option<String>,
    ) -> Result<Self> {
        let config = ClientConfig::default();

        match access_token {
            Some(token) => Self::with_credentials(StaticToken::new(token), config),
            None => {
                let session =
                    OAuthSession::authorize_interactive(client_id, client_secret, config.oauth.clone())?;
                let config = match session.host().as_deref().and_then(Datacenter::from_host) {
                    Some(datacenter) => config.with_datacenter(datacenter),
                    None => config,
                };
                Self::with_credentials(session, config)
            }
        }
    }

    /// Create a client from a pre-obtained access token and custom configuration.
    pub fn with_token(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_credentials(StaticToken::new(access_token), config)
    }

    /// Create a client from any credential source and custom configuration.
    pub fn with_credentials(
        credentials: impl CredentialSource + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(Error::Config("base URL must not be empty".to_string()));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials: Box::new(credentials),
                config,
                last_response: Mutex::new(None),
            }),
        })
    }

    /// Dispatch a GET request and return the raw response.
    ///
    /// `path` may be relative (`"tasks"`) or already absolute
    /// (`"https://www.wrike.com/api/v3/tasks"`); both reach the same URL.
    /// Throttling responses are retried transparently. Any other status is
    /// returned as-is for the caller to interpret.
    pub fn get(&self, path: &str, params: &Params) -> Result<RawResponse> {
        self.inner.dispatch(path, params)
    }

    /// Snapshot of the most recent response received, across all calls.
    ///
    /// Diagnostic only: when the client is shared between threads this is
    /// whichever response arrived last.
    pub fn last_response(&self) -> Option<RawResponse> {
        self.inner.last_response()
    }

    /// The configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Manually refresh the credential source.
    pub fn refresh_credentials(&self) -> Result<()> {
        self.inner.credentials.refresh()
    }

    /// Look up an account by ID.
    pub fn account(&self, account_id: &str) -> Result<Option<Account>> {
        AccountsService::new(self.inner.clone()).get(account_id)
    }

    /// All accounts the current user has access to.
    pub fn accounts(&self) -> Result<Listing<Account>> {
        AccountsService::new(self.inner.clone()).list()
    }

    /// Look up an attachment by ID.
    pub fn attachment(&self, attachment_id: &str) -> Result<Option<Attachment>> {
        AttachmentsService::new(self.inner.clone()).get(attachment_id)
    }

    /// Look up a comment by ID.
    pub fn comment(&self, comment_id: &str) -> Result<Option<Comment>> {
        CommentsService::new(self.inner.clone()).get(comment_id)
    }

    /// All comments in all accounts.
    pub fn comments(&self) -> Result<Listing<Comment>> {
        CommentsService::new(self.inner.clone()).list()
    }

    /// Look up a contact by ID.
    pub fn contact(&self, contact_id: &str) -> Result<Option<Contact>> {
        ContactsService::new(self.inner.clone()).get(contact_id)
    }

    /// All contacts of the current user.
    pub fn contacts(&self) -> Result<Listing<Contact>> {
        ContactsService::new(self.inner.clone()).list()
    }

    /// Look up a folder by ID.
    pub fn folder(&self, folder_id: &str) -> Result<Option<Folder>> {
        FoldersService::new(self.inner.clone()).get(folder_id)
    }

    /// Folders in all accounts, or only those with the given IDs.
    pub fn folders(&self, folder_ids: Option<&[&str]>) -> Result<Listing<Folder>> {
        FoldersService::new(self.inner.clone()).list(folder_ids)
    }

    /// Look up a group by ID.
    pub fn group(&self, group_id: &str) -> Result<Option<Group>> {
        GroupsService::new(self.inner.clone()).get(group_id)
    }

    /// Look up a task by ID.
    pub fn task(&self, task_id: &str) -> Result<Option<Task>> {
        TasksService::new(self.inner.clone()).get(task_id)
    }

    /// Tasks in all accounts, optionally filtered by exact title.
    pub fn tasks(&self, title: Option<&str>) -> Result<Listing<Task>> {
        TasksService::new(self.inner.clone()).list(title)
    }

    /// Look up a user by ID.
    pub fn user(&self, user_id: &str) -> Result<Option<User>> {
        UsersService::new(self.inner.clone()).get(user_id)
    }

    /// API version reported by the server, as `(major, minor)`.
    pub fn version(&self) -> Result<(u32, u32)> {
        VersionService::new(self.inner.clone()).get()
    }
}

/// Resolve `path` against `base`, leaving already-qualified URLs alone.
pub(crate) fn normalize_url(base: &str, path: &str) -> String {
    if path.starts_with(base) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl ClientInner {
    pub(crate) fn handle(self: &Arc<Self>) -> ClientHandle {
        ClientHandle::new(self)
    }

    fn last_response(&self) -> Option<RawResponse> {
        self.last_response
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, response: &RawResponse) {
        *self
            .last_response
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(response.clone());
    }

    /// Refresh credentials that are about to expire.
    fn ensure_credentials_valid(&self) -> Result<()> {
        if self.config.auto_refresh_credentials {
            let buffer = Duration::seconds(self.config.refresh_buffer_secs);
            if self.credentials.expires_within(buffer) {
                tracing::info!("credentials about to expire, refreshing");
                self.credentials.refresh()?;
            }
        }
        Ok(())
    }

    /// One authenticated GET, no retry.
    fn transport(&self, url: &str, params: &Params) -> Result<RawResponse> {
        self.ensure_credentials_valid()?;

        let token = self.credentials.access_token()?;
        let authorization = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;

        let mut request = self
            .http
            .get(url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        let query = params.to_query();
        if !query.is_empty() {
            request = request.query(&query);
        }

        RawResponse::read(request.send()?)
    }

    /// Normalize, send, and retry while the API signals throttling.
    pub(crate) fn dispatch(&self, path: &str, params: &Params) -> Result<RawResponse> {
        let url = normalize_url(&self.config.base_url, path);
        let retry = &self.config.retry;
        let mut retries: u32 = 0;

        loop {
            if retries > 0 {
                let delay = retry.backoff_for_attempt(retries);
                tracing::warn!(%url, retry = retries, ?delay, "throttled, backing off");
                std::thread::sleep(delay);
            }

            tracing::debug!(%url, attempt = retries + 1, "GET");
            let response = self.transport(&url, params)?;
            self.record(&response);

            if !retry.should_retry_status(response.status) {
                return Ok(response);
            }

            if !retry.allows_retry(retries) {
                return Err(Error::RetriesExhausted {
                    attempts: retries + 1,
                    status: response.status,
                });
            }
            retries += 1;
        }
    }

    /// Single-entity lookup: first `data` entry on success, `None` on 404.
    pub(crate) fn fetch_one<T: Resource>(
        self: &Arc<Self>,
        path: &str,
        params: &Params,
    ) -> Result<Option<T>> {
        let response = self.dispatch(path, params)?;

        match response.class() {
            ResponseClass::Success => {
                let handle = self.handle();
                response
                    .data()?
                    .into_iter()
                    .next()
                    .map(|entry| T::from_data(entry, &handle))
                    .transpose()
            }
            ResponseClass::NotFound => {
                tracing::debug!(kind = T::KIND, %path, "not found");
                Ok(None)
            }
            ResponseClass::Throttled | ResponseClass::OtherError => Err(response.to_error()),
        }
    }

    /// Listing: lazy sequence over the `data` array of one response.
    pub(crate) fn fetch_all<T: Resource>(
        self: &Arc<Self>,
        path: &str,
        params: &Params,
    ) -> Result<Listing<T>> {
        let response = self.dispatch(path, params)?;
        Ok(Listing::new(response.data()?, self.handle()))
    }
}

impl Clone for WrikeClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for WrikeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrikeClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.wrike.com/api/v3/";

    #[test]
    fn test_normalize_relative_path() {
        assert_eq!(normalize_url(BASE, "tasks"), "https://www.wrike.com/api/v3/tasks");
        assert_eq!(normalize_url(BASE, "/tasks/T1"), "https://www.wrike.com/api/v3/tasks/T1");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for path in ["tasks", "accounts/IEAGIITR/folders", "version", ""] {
            let once = normalize_url(BASE, path);
            assert_eq!(normalize_url(BASE, &once), once);
            assert_eq!(normalize_url(BASE, &format!("{BASE}{path}")), once);
        }
    }

    #[test]
    fn test_normalize_base_without_trailing_slash() {
        let base = "http://127.0.0.1:8080/api/v3";
        assert_eq!(normalize_url(base, "tasks"), "http://127.0.0.1:8080/api/v3/tasks");
    }

    #[test]
    fn test_client_rejects_empty_base_url() {
        let mut config = ClientConfig::default();
        config.base_url.clear();
        assert!(matches!(
            WrikeClient::with_token("token", config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = WrikeClient::with_token("super-secret-token", ClientConfig::default()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("WrikeClient"));
    }
}
