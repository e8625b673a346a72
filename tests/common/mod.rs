//! Shared harness for the integration tests.
//!
//! The client is blocking, so the mock server runs on a runtime owned by the
//! harness and the client is driven from the plain test thread.

#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use wiremock::{Mock, MockServer, Request};

use wrike_rs::{ClientConfig, RetryConfig, WrikeClient};

pub const TOKEN: &str = "test-token";

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A mock Wrike API. Field order matters: the server shuts down before the
/// runtime it was started on.
pub struct MockApi {
    pub server: MockServer,
    rt: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        init_logging();
        let rt = Runtime::new().expect("failed to build runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    /// Check `.expect(..)` counts now instead of on drop.
    pub fn verify(&self) {
        self.rt.block_on(self.server.verify());
    }

    pub fn received(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn base_url(&self) -> String {
        format!("{}/api/v3/", self.server.uri())
    }

    /// Config pointing at the mock, with millisecond backoff units.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url())
            .with_timeout(Duration::from_secs(5))
            .with_retry(RetryConfig::default().with_initial_backoff(Duration::from_millis(1)))
    }

    pub fn client(&self) -> WrikeClient {
        WrikeClient::with_token(TOKEN, self.config()).expect("failed to build client")
    }
}

/// `{"kind": .., "data": [..]}` body.
pub fn envelope(kind: &str, data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "kind": kind, "data": data })
}
