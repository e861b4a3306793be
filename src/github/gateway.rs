//! Upstream gateway seam
//!
//! The aggregation pipeline talks to the repository host through this
//! trait so tests can substitute an in-memory stub without network access.

use super::client::GitHubClient;
use super::types::{RateLimit, TreeEntry};
use anyhow::Result;

/// The upstream repository host as seen by the insight pipeline
#[async_trait::async_trait]
pub trait RepoHost: Send + Sync {
    /// Succeeds iff the upstream answers the repository resource with a
    /// success status
    async fn repo_exists(&self, namespace: &str, repo: &str) -> Result<()>;

    /// Recursive file tree of the default branch
    async fn fetch_tree(&self, namespace: &str, repo: &str) -> Result<Vec<TreeEntry>>;

    /// Raw base64 content of one file
    async fn fetch_file_content(&self, namespace: &str, repo: &str, path: &str) -> Result<String>;

    /// Names of the languages detected in the repository
    async fn fetch_languages(&self, namespace: &str, repo: &str) -> Result<Vec<String>>;

    /// Repository topics as assigned on the host (preview API, best effort)
    async fn fetch_topics(&self, namespace: &str, repo: &str) -> Result<Vec<String>>;

    /// Raw base64 content of the repository README
    async fn fetch_readme(&self, namespace: &str, repo: &str) -> Result<String>;

    /// Current quota status for the credentials in use
    async fn fetch_rate_limit(&self) -> Result<RateLimit>;
}

#[async_trait::async_trait]
impl RepoHost for GitHubClient {
    async fn repo_exists(&self, namespace: &str, repo: &str) -> Result<()> {
        self.check_repo_exists(namespace, repo).await
    }

    async fn fetch_tree(&self, namespace: &str, repo: &str) -> Result<Vec<TreeEntry>> {
        Ok(self.get_tree(namespace, repo).await?.tree)
    }

    async fn fetch_file_content(&self, namespace: &str, repo: &str, path: &str) -> Result<String> {
        self.get_file_content(namespace, repo, path).await
    }

    async fn fetch_languages(&self, namespace: &str, repo: &str) -> Result<Vec<String>> {
        self.get_languages(namespace, repo).await
    }

    async fn fetch_topics(&self, namespace: &str, repo: &str) -> Result<Vec<String>> {
        self.get_topics(namespace, repo).await
    }

    async fn fetch_readme(&self, namespace: &str, repo: &str) -> Result<String> {
        self.get_readme(namespace, repo).await
    }

    async fn fetch_rate_limit(&self) -> Result<RateLimit> {
        self.get_rate_limit().await
    }
}
