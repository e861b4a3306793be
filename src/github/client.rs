//! GitHub API client implementation
//!
//! The `GitHubClient` struct is the entry point for all upstream requests.
//! Operations are organized into `impl` blocks across sibling modules:
//! `repositories.rs` for repository resources and `rate_limit.rs` for the
//! caller's quota status.

use crate::config::Credentials;
use crate::constants;
use reqwest::{Client, RequestBuilder};

/// GitHub API client for making authenticated requests
///
/// Holds the HTTP client and the static client credentials; both are cheap
/// to share behind one instance for the process lifetime. No retry or
/// timeout policy of our own is layered on top of the HTTP client defaults.
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
}

impl GitHubClient {
    /// Create a new GitHub client from caller credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
        }
    }

    /// Build an authenticated GET request against the GitHub API
    ///
    /// Credentials ride as `client_id`/`client_secret` query parameters,
    /// the form the upstream accepts for static client credential pairs.
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header("User-Agent", constants::github::DEFAULT_USER_AGENT)
            .query(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
    }
}
