//! Repolens - an HTTP service surfacing GitHub repository insights

pub mod catalog;
pub mod config;
pub mod constants;
pub mod github;
pub mod insights;
pub mod server;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use catalog::Catalogs;
pub use config::{Credentials, Environment, Settings};
pub use github::{GitHubClient, RepoHost};
pub use insights::RepoInfo;
pub use server::AppState;
