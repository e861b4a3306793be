//! Popular-dependency detection
//!
//! Locates package manifests in a repository tree, decodes each one and
//! reports which catalog packages it declares, as runtime or development
//! dependencies.

use crate::catalog::Catalogs;
use crate::constants::github::MANIFEST_FILENAME;
use crate::github::{PackageManifest, RepoHost};
use crate::utils::encoding;
use anyhow::{Context, Result};
use futures::future::try_join_all;
use std::collections::HashSet;

/// True when the final path segment is exactly the manifest filename
///
/// Stricter than substring containment: `sub/package.json` matches,
/// `old-package.json` and `package.json.bak` do not.
pub fn is_manifest_path(path: &str) -> bool {
    path.rsplit('/').next() == Some(MANIFEST_FILENAME)
}

/// Union of declared runtime and development dependencies across all
/// manifests, filtered down to catalog members
pub fn identify_dependencies(
    manifests: &[PackageManifest],
    catalogs: &Catalogs,
) -> HashSet<String> {
    let mut detected = HashSet::new();

    for manifest in manifests {
        let declared = manifest
            .dependencies
            .keys()
            .chain(manifest.dev_dependencies.keys());
        for name in declared {
            if catalogs.is_popular_dependency(name) {
                detected.insert(name.clone());
            }
        }
    }

    detected
}

/// Scan a repository for popular dependencies
///
/// Fetches the recursive tree, then every matching manifest concurrently.
/// A manifest that fails to fetch, decode or parse fails the whole scan;
/// there is no per-file isolation.
pub async fn detect_dependencies<H>(
    host: &H,
    namespace: &str,
    repo: &str,
    catalogs: &Catalogs,
) -> Result<HashSet<String>>
where
    H: RepoHost + ?Sized,
{
    let tree = host.fetch_tree(namespace, repo).await?;
    let manifest_paths: Vec<&str> = tree
        .iter()
        .map(|entry| entry.path.as_str())
        .filter(|path| is_manifest_path(path))
        .collect();

    let contents = try_join_all(
        manifest_paths
            .iter()
            .map(|path| host.fetch_file_content(namespace, repo, path)),
    )
    .await?;

    let manifests = contents
        .iter()
        .map(|raw| {
            let bytes = encoding::decode_base64(raw)?;
            serde_json::from_slice::<PackageManifest>(&bytes)
                .context("Failed to parse package manifest")
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(identify_dependencies(&manifests, catalogs))
}
