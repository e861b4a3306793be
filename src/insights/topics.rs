//! README topic inference
//!
//! Tests decoded README text against the topic catalog's word-bounded
//! patterns. Presence is binary; there is no scoring or ranking.

use crate::catalog::Catalogs;
use crate::github::RepoHost;
use crate::utils::encoding;
use anyhow::Result;
use std::collections::HashSet;

/// Decode a base64 README and report which catalog topics it mentions
///
/// Matching is case-sensitive and requires each topic to be bounded by
/// non-word characters on both sides.
pub fn identify_readme_topics(
    readme_base64: &str,
    catalogs: &Catalogs,
) -> Result<HashSet<String>> {
    let readme = encoding::decode_base64_text(readme_base64)?;
    Ok(catalogs.matching_topics(&readme))
}

/// Fetch a repository README and infer its topics
pub async fn detect_readme_topics<H>(
    host: &H,
    namespace: &str,
    repo: &str,
    catalogs: &Catalogs,
) -> Result<HashSet<String>>
where
    H: RepoHost + ?Sized,
{
    let raw = host.fetch_readme(namespace, repo).await?;
    identify_readme_topics(&raw, catalogs)
}
