//! Common test support utilities and fixtures
//!
//! Provides an in-memory `RepoHost` stub with per-operation call counters
//! so endpoint tests can assert exactly which upstream calls were made.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use repolens::catalog::Catalogs;
use repolens::config::Environment;
use repolens::github::{RateLimit, RepoHost, TreeEntry};
use repolens::server::AppState;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Base64-encode text the way the contents API delivers it
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Counters for upstream calls made by the code under test
#[derive(Default)]
pub struct CallCounts {
    pub exists: AtomicUsize,
    pub tree: AtomicUsize,
    pub contents: AtomicUsize,
    pub languages: AtomicUsize,
    pub topics: AtomicUsize,
    pub readme: AtomicUsize,
    pub rate_limit: AtomicUsize,
}

impl CallCounts {
    /// Total upstream calls across all operations
    pub fn total(&self) -> usize {
        self.exists.load(Ordering::SeqCst)
            + self.tree.load(Ordering::SeqCst)
            + self.contents.load(Ordering::SeqCst)
            + self.languages.load(Ordering::SeqCst)
            + self.topics.load(Ordering::SeqCst)
            + self.readme.load(Ordering::SeqCst)
            + self.rate_limit.load(Ordering::SeqCst)
    }
}

/// In-memory repository host stub
pub struct StubHost {
    pub exists: bool,
    pub tree: Vec<String>,
    /// path -> base64 content
    pub files: HashMap<String, String>,
    pub languages: Vec<String>,
    pub topics: Vec<String>,
    /// base64 README content
    pub readme: String,
    pub rate_limit: RateLimit,
    /// make the languages lookup reject, to exercise aggregation failure
    pub fail_languages: bool,
    pub calls: CallCounts,
}

impl StubHost {
    /// Stub mirroring the Christian-Paul/test-repo reference fixture
    pub fn test_repo() -> Self {
        let manifest = r#"{
            "dependencies": {
                "axios": "^0.16.2",
                "express": "^4.15.3"
            },
            "devDependencies": {
                "babel-preset-es2015": "^6.24.1",
                "mocha": "^3.4.2",
                "nodemon": "^1.11.0"
            }
        }"#;

        Self {
            exists: true,
            tree: vec![
                "README.md".to_string(),
                "package.json".to_string(),
                "lib/server.js".to_string(),
            ],
            files: HashMap::from([("package.json".to_string(), encode_content(manifest))]),
            languages: vec!["JavaScript".to_string()],
            topics: vec![
                "testing".to_string(),
                "open-source".to_string(),
                "collaboration".to_string(),
            ],
            readme: encode_content("This repo is about github and test automation."),
            rate_limit: RateLimit {
                limit: 5000,
                remaining: 4999,
                reset: 1507699708,
                used: 1,
            },
            fail_languages: false,
            calls: CallCounts::default(),
        }
    }
}

#[async_trait]
impl RepoHost for StubHost {
    async fn repo_exists(&self, _namespace: &str, _repo: &str) -> Result<()> {
        self.calls.exists.fetch_add(1, Ordering::SeqCst);
        if self.exists {
            Ok(())
        } else {
            Err(anyhow!("Repository lookup failed (404 Not Found)"))
        }
    }

    async fn fetch_tree(&self, _namespace: &str, _repo: &str) -> Result<Vec<TreeEntry>> {
        self.calls.tree.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .tree
            .iter()
            .map(|path| TreeEntry { path: path.clone() })
            .collect())
    }

    async fn fetch_file_content(
        &self,
        _namespace: &str,
        _repo: &str,
        path: &str,
    ) -> Result<String> {
        self.calls.contents.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("Failed to get file content for '{}'", path))
    }

    async fn fetch_languages(&self, _namespace: &str, _repo: &str) -> Result<Vec<String>> {
        self.calls.languages.fetch_add(1, Ordering::SeqCst);
        if self.fail_languages {
            Err(anyhow!(
                "Failed to get repository languages (502 Bad Gateway)"
            ))
        } else {
            Ok(self.languages.clone())
        }
    }

    async fn fetch_topics(&self, _namespace: &str, _repo: &str) -> Result<Vec<String>> {
        self.calls.topics.fetch_add(1, Ordering::SeqCst);
        Ok(self.topics.clone())
    }

    async fn fetch_readme(&self, _namespace: &str, _repo: &str) -> Result<String> {
        self.calls.readme.fetch_add(1, Ordering::SeqCst);
        Ok(self.readme.clone())
    }

    async fn fetch_rate_limit(&self) -> Result<RateLimit> {
        self.calls.rate_limit.fetch_add(1, Ordering::SeqCst);
        Ok(self.rate_limit.clone())
    }
}

/// Wrap a stub host in app state the way `main` does for the real client
pub fn stub_state(host: StubHost) -> Arc<AppState<StubHost>> {
    Arc::new(AppState {
        host,
        catalogs: Catalogs::standard().expect("standard catalogs"),
        environment: Environment::Development,
    })
}
