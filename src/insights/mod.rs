//! Repository insight aggregation
//!
//! Fans the five independent lookups — dependency scan, languages, host
//! topics, README topic inference, rate limit — out concurrently and joins
//! them into one response payload.
//!
//! - [`dependencies`]: manifest discovery and popular-dependency detection
//! - [`topics`]: README topic inference

pub mod dependencies;
pub mod topics;

use crate::catalog::Catalogs;
use crate::github::{RateLimit, RepoHost};
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;

/// Aggregated repository metadata returned by the API
///
/// The four detected fields are sets: duplicates are impossible by
/// construction and member order carries no meaning.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfo {
    pub dependencies: HashSet<String>,
    pub languages: HashSet<String>,
    pub topics: HashSet<String>,
    pub read_me_topics: HashSet<String>,
    pub rate_limit: RateLimit,
}

/// Collect all insights for a repository already confirmed to exist
///
/// The five lookups run concurrently; the first failure fails the whole
/// aggregation and no partial result is produced. In-flight sibling
/// requests are not actively canceled, merely no longer observed.
pub async fn aggregate<H>(
    host: &H,
    namespace: &str,
    repo: &str,
    catalogs: &Catalogs,
) -> Result<RepoInfo>
where
    H: RepoHost + ?Sized,
{
    let (dependencies, languages, topics, read_me_topics, rate_limit) = tokio::try_join!(
        dependencies::detect_dependencies(host, namespace, repo, catalogs),
        collect_languages(host, namespace, repo),
        collect_topics(host, namespace, repo),
        topics::detect_readme_topics(host, namespace, repo, catalogs),
        host.fetch_rate_limit(),
    )?;

    Ok(RepoInfo {
        dependencies,
        languages,
        topics,
        read_me_topics,
        rate_limit,
    })
}

async fn collect_languages<H>(host: &H, namespace: &str, repo: &str) -> Result<HashSet<String>>
where
    H: RepoHost + ?Sized,
{
    Ok(host
        .fetch_languages(namespace, repo)
        .await?
        .into_iter()
        .collect())
}

async fn collect_topics<H>(host: &H, namespace: &str, repo: &str) -> Result<HashSet<String>>
where
    H: RepoHost + ?Sized,
{
    Ok(host
        .fetch_topics(namespace, repo)
        .await?
        .into_iter()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_info_serializes_with_expected_keys() {
        let info = RepoInfo {
            dependencies: HashSet::new(),
            languages: HashSet::new(),
            topics: HashSet::new(),
            read_me_topics: HashSet::new(),
            rate_limit: RateLimit {
                limit: 5000,
                remaining: 4999,
                reset: 1507699708,
                used: 1,
            },
        };

        let value = serde_json::to_value(&info).unwrap();
        let keys: HashSet<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        let expected: HashSet<&str> =
            ["dependencies", "languages", "topics", "readMeTopics", "rateLimit"]
                .into_iter()
                .collect();
        assert_eq!(keys, expected);
    }
}
