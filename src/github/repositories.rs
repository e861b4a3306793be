//! GitHub repository resource operations
//!
//! Every operation is a single authenticated GET: build the request, check
//! for a success status, deserialize the payload. Non-success statuses are
//! collapsed into errors carrying the status and body text for the logs;
//! nothing here retries.

use super::client::GitHubClient;
use super::types::{ContentResponse, TopicsResponse, TreeResponse};
use crate::constants::github::{API_BASE, TOPICS_PREVIEW_ACCEPT};
use anyhow::{Context, Result};
use std::collections::HashMap;

impl GitHubClient {
    /// Check that a repository exists upstream
    ///
    /// Succeeds iff the repository resource answers with a success status;
    /// the payload itself is not consumed.
    pub async fn check_repo_exists(&self, namespace: &str, repo: &str) -> Result<()> {
        let url = format!("{}/repos/{}/{}", API_BASE, namespace, repo);
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Repository lookup failed ({}): {}",
                status,
                error_text
            ))
        }
    }

    /// Get the recursive file tree of the default branch
    ///
    /// `HEAD` resolves to whatever the repository's default branch is.
    pub async fn get_tree(&self, namespace: &str, repo: &str) -> Result<TreeResponse> {
        let url = format!("{}/repos/{}/{}/git/trees/HEAD", API_BASE, namespace, repo);
        let response = self.get(&url).query(&[("recursive", "1")]).send().await?;

        if response.status().is_success() {
            let tree: TreeResponse = response
                .json()
                .await
                .context("Failed to parse tree response")?;
            Ok(tree)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Failed to get repository tree ({}): {}",
                status,
                error_text
            ))
        }
    }

    /// Get the raw base64 content of one file
    pub async fn get_file_content(&self, namespace: &str, repo: &str, path: &str) -> Result<String> {
        let url = format!("{}/repos/{}/{}/contents/{}", API_BASE, namespace, repo, path);
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let content: ContentResponse = response
                .json()
                .await
                .context("Failed to parse contents response")?;
            Ok(content.content)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Failed to get file content for '{}' ({}): {}",
                path,
                status,
                error_text
            ))
        }
    }

    /// Get the names of the languages detected in a repository
    ///
    /// The upstream maps language name to byte count; only the key set is
    /// consumed downstream.
    pub async fn get_languages(&self, namespace: &str, repo: &str) -> Result<Vec<String>> {
        let url = format!("{}/repos/{}/{}/languages", API_BASE, namespace, repo);
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let languages: HashMap<String, u64> = response
                .json()
                .await
                .context("Failed to parse languages response")?;
            Ok(languages.into_keys().collect())
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Failed to get repository languages ({}): {}",
                status,
                error_text
            ))
        }
    }

    /// Get repository topics as assigned on the host
    ///
    /// Still a preview API upstream: it requires a special accept header
    /// and may change or break independent of this service.
    pub async fn get_topics(&self, namespace: &str, repo: &str) -> Result<Vec<String>> {
        let url = format!("{}/repos/{}/{}/topics", API_BASE, namespace, repo);
        let response = self
            .get(&url)
            .header("Accept", TOPICS_PREVIEW_ACCEPT)
            .send()
            .await?;

        if response.status().is_success() {
            let topics: TopicsResponse = response
                .json()
                .await
                .context("Failed to parse topics response")?;
            Ok(topics.names)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Failed to get repository topics ({}): {}",
                status,
                error_text
            ))
        }
    }

    /// Get the raw base64 content of the repository README
    pub async fn get_readme(&self, namespace: &str, repo: &str) -> Result<String> {
        let url = format!("{}/repos/{}/{}/readme", API_BASE, namespace, repo);
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let content: ContentResponse = response
                .json()
                .await
                .context("Failed to parse readme response")?;
            Ok(content.content)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Failed to get repository readme ({}): {}",
                status,
                error_text
            ))
        }
    }
}
