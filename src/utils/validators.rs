//! Request input validation
//!
//! Centralized syntax checks for the two path parameters, applied before
//! any upstream call is made.

use once_cell::sync::Lazy;
use regex::Regex;

/// GitHub username shape: alphanumeric with single interior hyphens, no
/// hyphen at either end. Length is checked separately because the upstream
/// rule counts 2..=39 characters including hyphens.
static NAMESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9](?:-?[a-zA-Z0-9])*$").expect("namespace pattern"));

/// Any character outside this class makes a repository name invalid.
static REPO_NAME_REJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("repo name pattern"));

const NAMESPACE_MIN_LEN: usize = 2;
const NAMESPACE_MAX_LEN: usize = 39;

/// Enumeration of possible request validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Namespace does not follow GitHub username syntax
    InvalidNamespace(String),
    /// Repository name contains a disallowed character
    InvalidRepoName(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidNamespace(_) => write!(f, "Invalid GitHub Namespace"),
            ValidationError::InvalidRepoName(_) => write!(f, "Invalid GitHub Repo Name"),
        }
    }
}

/// Validates a GitHub namespace (user or organization name)
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    let length = namespace.chars().count();
    if length < NAMESPACE_MIN_LEN
        || length > NAMESPACE_MAX_LEN
        || !NAMESPACE_PATTERN.is_match(namespace)
    {
        return Err(ValidationError::InvalidNamespace(namespace.to_string()));
    }
    Ok(())
}

/// Validates a GitHub repository name
pub fn validate_repo_name(name: &str) -> Result<(), ValidationError> {
    if REPO_NAME_REJECT.is_match(name) {
        return Err(ValidationError::InvalidRepoName(name.to_string()));
    }
    Ok(())
}

/// Validates both path parameters, namespace first
///
/// The first failure short-circuits; the repository name is not inspected
/// when the namespace is already invalid.
pub fn validate_repo_identity(namespace: &str, name: &str) -> Result<(), ValidationError> {
    validate_namespace(namespace)?;
    validate_repo_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_namespace_accepts_plain_names() {
        assert!(validate_namespace("octocat").is_ok());
        assert!(validate_namespace("Christian-Paul").is_ok());
        assert!(validate_namespace("a1").is_ok());
        assert!(validate_namespace("UPPER-case-OK").is_ok());
    }

    #[test]
    fn test_validate_namespace_rejects_underscores() {
        assert_eq!(
            validate_namespace("Christian_Paul"),
            Err(ValidationError::InvalidNamespace("Christian_Paul".to_string()))
        );
    }

    #[test]
    fn test_validate_namespace_rejects_hyphen_placement() {
        assert!(validate_namespace("-octocat").is_err());
        assert!(validate_namespace("octocat-").is_err());
        assert!(validate_namespace("octo--cat").is_err());
    }

    #[test]
    fn test_validate_namespace_length_bounds() {
        assert!(validate_namespace("a").is_err());
        assert!(validate_namespace(&"a".repeat(39)).is_ok());
        assert!(validate_namespace(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_namespace_rejects_other_characters() {
        assert!(validate_namespace("octo.cat").is_err());
        assert!(validate_namespace("octo cat").is_err());
        assert!(validate_namespace("").is_err());
    }

    #[test]
    fn test_validate_repo_name_accepts_allowed_characters() {
        assert!(validate_repo_name("test-repo").is_ok());
        assert!(validate_repo_name("my_repo.v2").is_ok());
        assert!(validate_repo_name("Repo123").is_ok());
    }

    #[test]
    fn test_validate_repo_name_rejects_disallowed_characters() {
        assert_eq!(
            validate_repo_name("test$repo"),
            Err(ValidationError::InvalidRepoName("test$repo".to_string()))
        );
        assert!(validate_repo_name("repo/name").is_err());
        assert!(validate_repo_name("repo name").is_err());
    }

    #[test]
    fn test_validate_repo_identity_checks_namespace_first() {
        // both parameters invalid: the namespace failure wins
        let result = validate_repo_identity("bad_namespace", "bad$name");
        assert!(matches!(result, Err(ValidationError::InvalidNamespace(_))));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::InvalidNamespace("x".to_string());
        assert_eq!(format!("{}", error), "Invalid GitHub Namespace");

        let error = ValidationError::InvalidRepoName("x".to_string());
        assert_eq!(format!("{}", error), "Invalid GitHub Repo Name");
    }
}
