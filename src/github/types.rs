//! GitHub API wire types
//!
//! Thin deserialize targets for the handful of upstream payloads this
//! service consumes. Fields the service never reads are not modeled.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a recursive git tree listing; only the path is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    pub path: String,
}

/// Recursive tree listing response
#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeEntry>,
}

/// Contents API response; `content` is base64 with embedded line breaks
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    pub content: String,
}

/// Topics API response (mercy preview)
#[derive(Debug, Deserialize)]
pub struct TopicsResponse {
    pub names: Vec<String>,
}

/// The upstream `rate` object, passed through to callers untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
    #[serde(default)]
    pub used: u64,
}

/// Rate-limit API response envelope
#[derive(Debug, Deserialize)]
pub struct RateLimitResponse {
    pub rate: RateLimit,
}

/// A parsed package manifest
///
/// Only the two dependency maps are consumed, and of those only the key
/// sets; version specs stay opaque since manifests in the wild put
/// anything from semver ranges to URLs there.
#[derive(Debug, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, serde_json::Value>,
}
