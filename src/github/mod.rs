//! GitHub API integration module
//!
//! This module provides the upstream gateway for the insight pipeline.
//! It follows a modular design where different API endpoints are organized
//! into separate sub-modules for better maintainability and organization.
//!
//! ## Architecture
//!
//! - [`client`]: Core GitHub client with credential handling
//! - [`gateway`]: The [`RepoHost`] trait seam the rest of the crate talks to
//! - [`repositories`]: Repository resource operations (existence, tree,
//!   contents, languages, topics, README)
//! - [`rate_limit`]: The caller's API quota status
//! - [`types`]: Wire-format data structures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repolens::config::Credentials;
//! use repolens::github::{GitHubClient, RepoHost};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new(Credentials {
//!     client_id: "id".to_string(),
//!     client_secret: "secret".to_string(),
//! });
//!
//! client.repo_exists("octocat", "Hello-World").await?;
//! let languages = client.fetch_languages("octocat", "Hello-World").await?;
//! println!("languages: {:?}", languages);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod gateway;
pub mod rate_limit;
pub mod repositories;
pub mod types;

// Re-export commonly used items for convenience
pub use client::GitHubClient;
pub use gateway::RepoHost;
pub use types::{PackageManifest, RateLimit, TreeEntry};
