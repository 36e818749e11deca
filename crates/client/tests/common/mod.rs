//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Splunk client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here talk plain HTTP to the wiremock server's address
//!
//! # What this does NOT handle
//! - Mock setup for individual endpoints (use wiremock directly in tests)

// Re-export test utilities from splunk-sdk
#[allow(unused_imports)]
pub use splunk_sdk::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_sdk::endpoints;
#[allow(unused_imports)]
pub use splunk_sdk::{AuthStrategy, ClientError, Credentials, Scheme, SplunkClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused_imports)]
use secrecy::SecretString;

/// Token used by [`client_for`].
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Build a client pointed at `server` with `credentials`.
#[allow(dead_code)]
pub fn client_with(server: &MockServer, credentials: Credentials) -> SplunkClient {
    let address = server.address();
    SplunkClient::builder()
        .scheme(Scheme::Http)
        .host(address.ip().to_string())
        .port(address.port())
        .credentials(credentials)
        .build()
        .expect("client should build against mock server")
}

/// Build a bearer-token client pointed at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> SplunkClient {
    client_with(server, Credentials::default().with_token(TEST_TOKEN))
}

/// Bearer strategy for calling endpoint functions directly.
#[allow(dead_code)]
pub fn bearer_auth() -> AuthStrategy {
    AuthStrategy::BearerToken {
        token: SecretString::new(TEST_TOKEN.to_string().into()),
    }
}

/// Resolve `path` against the mock server, e.g. `service_url(&server, JOBS_PATH)`.
#[allow(dead_code)]
pub fn service_url(server: &MockServer, path: &str) -> String {
    format!("{}/{}", server.uri(), path)
}
