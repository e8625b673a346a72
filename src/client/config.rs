//! Client configuration options.

use std::time::Duration;

use crate::{Datacenter, Error, Result};

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "WRIKE_API_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "WRIKE_TIMEOUT_SECS";

/// Configuration for the Wrike client.
///
/// # Example
///
/// ```
/// use wrike_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix every relative request path is resolved against
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Retry configuration for throttling responses
    pub retry: RetryConfig,
    /// OAuth endpoints used by the interactive flow
    pub oauth: OAuthConfig,
    /// Whether to refresh credentials that are about to expire
    pub auto_refresh_credentials: bool,
    /// Buffer time (in seconds) before expiry to refresh
    pub refresh_buffer_secs: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Datacenter::default().api_base_url(),
            timeout: Duration::from_secs(30),
            user_agent: format!("wrike-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            oauth: OAuthConfig::default(),
            auto_refresh_credentials: true,
            refresh_buffer_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by `WRIKE_API_BASE_URL` and `WRIKE_TIMEOUT_SECS`
    /// when they are set.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }

        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Target a specific datacenter.
    pub fn with_datacenter(self, datacenter: Datacenter) -> Self {
        Self {
            base_url: datacenter.api_base_url(),
            oauth: self.oauth.with_datacenter(datacenter),
            ..self
        }
    }

    /// Set the API base URL. A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Set the OAuth endpoints.
    pub fn with_oauth(mut self, oauth: OAuthConfig) -> Self {
        self.oauth = oauth;
        self
    }

    /// Enable or disable automatic credential refresh.
    pub fn with_auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh_credentials = enabled;
        self
    }

    /// Set the buffer time before expiry to refresh.
    pub fn with_refresh_buffer(mut self, secs: i64) -> Self {
        self.refresh_buffer_secs = secs;
        self
    }
}

/// How the delay grows between consecutive throttled attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffGrowth {
    /// The delay counter starts at one unit and is squared on each later
    /// retry, advancing before it is squared: `max(1, (n-1)²)` units before
    /// retry `n`, i.e. 1, 1, 4, 9, 16, ...
    #[default]
    Squared,
    /// `initial × n²` before retry `n`: 1, 4, 9, 16, ... units.
    Quadratic,
    /// `initial × 2^(n-1)` before retry `n`: 1, 2, 4, 8, ... units.
    Exponential,
}

/// Configuration for retrying throttled requests.
///
/// The default retries `429` and `503` forever with squared growth, one
/// second per unit. Set [`max_retries`](Self::max_retries) or use
/// [`RetryConfig::bounded`] to put a ceiling on how long a call may block.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries; `None` retries until the throttling stops
    pub max_retries: Option<u32>,
    /// Delay unit for the first retry
    pub initial_backoff: Duration,
    /// Ceiling applied to any single delay
    pub max_backoff: Option<Duration>,
    /// Growth law
    pub growth: BackoffGrowth,
    /// HTTP status codes treated as throttling
    pub retry_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: None,
            initial_backoff: Duration::from_secs(1),
            max_backoff: None,
            growth: BackoffGrowth::Squared,
            retry_statuses: vec![429, 503],
        }
    }
}

impl RetryConfig {
    /// Exponential growth, capped at 30 seconds per delay and 5 retries.
    pub fn bounded() -> Self {
        Self {
            max_retries: Some(5),
            max_backoff: Some(Duration::from_secs(30)),
            growth: BackoffGrowth::Exponential,
            ..Default::default()
        }
    }

    /// Create a configuration with no retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: Some(0),
            ..Default::default()
        }
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = Some(max);
        self
    }

    /// Set the initial backoff duration.
    pub fn with_initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set the maximum backoff duration.
    pub fn with_max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = Some(duration);
        self
    }

    /// Set the growth law.
    pub fn with_growth(mut self, growth: BackoffGrowth) -> Self {
        self.growth = growth;
        self
    }

    /// Replace the set of statuses treated as throttling.
    pub fn with_retry_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.retry_statuses = statuses.into();
        self
    }

    /// Delay to sleep before retry number `retry` (1-based).
    ///
    /// Retry `0` is the original request and never waits.
    pub fn backoff_for_attempt(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }

        let factor = match self.growth {
            BackoffGrowth::Squared => (retry - 1).saturating_mul(retry - 1).max(1),
            BackoffGrowth::Quadratic => retry.saturating_mul(retry),
            BackoffGrowth::Exponential => 1u32.checked_shl(retry - 1).unwrap_or(u32::MAX),
        };
        let delay = self.initial_backoff.saturating_mul(factor);

        match self.max_backoff {
            Some(max) => delay.min(max),
            None => delay,
        }
    }

    /// Check if a status code should be retried.
    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_statuses.contains(&status)
    }

    /// Whether another retry is allowed after `retries` have been spent.
    pub fn allows_retry(&self, retries: u32) -> bool {
        self.max_retries.map_or(true, |max| retries < max)
    }
}

/// OAuth2 endpoints for the authorization-code flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    /// Where the user is sent to grant access
    pub authorize_url: String,
    /// Where codes and refresh tokens are exchanged
    pub token_url: String,
    /// Redirect URI registered for the application
    pub redirect_uri: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self::for_datacenter(Datacenter::default())
    }
}

impl OAuthConfig {
    /// Endpoints of the given datacenter with a `http://localhost` redirect.
    pub fn for_datacenter(datacenter: Datacenter) -> Self {
        Self {
            authorize_url: format!("https://{}/oauth2/authorize", datacenter.host()),
            token_url: format!("https://{}/oauth2/token", datacenter.host()),
            redirect_uri: "http://localhost".to_string(),
        }
    }

    /// Point the endpoints at `datacenter`, keeping the redirect URI.
    pub fn with_datacenter(self, datacenter: Datacenter) -> Self {
        Self {
            redirect_uri: self.redirect_uri,
            ..Self::for_datacenter(datacenter)
        }
    }

    /// Datacenter whose token endpoint this configuration uses, if any.
    pub fn datacenter(&self) -> Option<Datacenter> {
        let url = url::Url::parse(&self.token_url).ok()?;
        let datacenter = Datacenter::from_host(url.host_str()?)?;
        (self.token_url == Self::for_datacenter(datacenter).token_url).then_some(datacenter)
    }

    /// Set the token endpoint.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Set the redirect URI.
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = uri.into();
        self
    }
}
