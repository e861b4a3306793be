//! Settings resolution
//!
//! Settings are resolved once at startup and passed by reference from then
//! on; nothing consults the environment at request time.

use crate::constants;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime environment, selected by the APP_ENV variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Read the environment selection from the process environment
    pub fn from_env() -> Self {
        match std::env::var(constants::config::ENV_VAR) {
            Ok(value) if value == "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Static client credentials passed through to the upstream API
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Read credentials from CLIENT_ID and CLIENT_SECRET
    pub fn from_env() -> Result<Self> {
        let client_id =
            std::env::var("CLIENT_ID").context("CLIENT_ID must be set in production")?;
        let client_secret =
            std::env::var("CLIENT_SECRET").context("CLIENT_SECRET must be set in production")?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// Load credentials from a local YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file '{}'", path))?;
        let credentials: Credentials = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse credentials file '{}'", path))?;
        Ok(credentials)
    }
}

/// Resolved process configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub credentials: Credentials,
    pub port: u16,
}

impl Settings {
    /// Resolve settings for the given environment
    ///
    /// Production reads credentials from the process environment; every
    /// other environment loads them from a local YAML file.
    pub fn load(environment: Environment, credentials_path: &str, port: u16) -> Result<Self> {
        let credentials = match environment {
            Environment::Production => Credentials::from_env()?,
            Environment::Development => Credentials::from_file(credentials_path)?,
        };

        Ok(Self {
            environment,
            credentials,
            port,
        })
    }
}
