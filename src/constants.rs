//! Central constants for the repolens service

/// Default values for GitHub API access
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("repolens/", env!("CARGO_PKG_VERSION"));

    /// Accept header required by the topics preview API
    pub const TOPICS_PREVIEW_ACCEPT: &str = "application/vnd.github.mercy-preview+json";

    /// File name of the package manifests scanned for dependencies
    pub const MANIFEST_FILENAME: &str = "package.json";
}

/// Default values for the HTTP server
pub mod server {
    /// Port used when neither --port nor PORT is provided
    pub const DEFAULT_PORT: u16 = 8000;

    /// Directory served as static assets at the site root
    pub const PUBLIC_DIR: &str = "public";
}

/// Default values for configuration
pub mod config {
    /// Default local credentials file used outside production
    pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.yaml";

    /// Environment variable selecting the runtime environment
    pub const ENV_VAR: &str = "APP_ENV";
}
