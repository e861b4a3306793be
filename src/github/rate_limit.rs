//! Rate-limit API operations

use super::client::GitHubClient;
use super::types::{RateLimit, RateLimitResponse};
use crate::constants::github::API_BASE;
use anyhow::{Context, Result};

impl GitHubClient {
    /// Get the current quota status for the credentials in use
    pub async fn get_rate_limit(&self) -> Result<RateLimit> {
        let url = format!("{}/rate_limit", API_BASE);
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let payload: RateLimitResponse = response
                .json()
                .await
                .context("Failed to parse rate limit response")?;
            Ok(payload.rate)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Failed to get rate limit ({}): {}",
                status,
                error_text
            ))
        }
    }
}
