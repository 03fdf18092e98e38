//! Destination repository resolution.
//!
//! The owner and repository name are resolved independently:
//!
//! - owner: `REPO_OWNER`, then `GITHUB_REPOSITORY_OWNER`, then the legacy
//!   `repo_owner` field
//! - repo: `REPO_NAME`, then the part after the first `/` of
//!   `GITHUB_REPOSITORY`, then the legacy `repo_name` field
//!
//! Unlike the token, a missing target is fatal at resolution time: there is
//! no meaningful degraded mode for "publish an issue somewhere".

use crate::env::{Environment, non_empty};
use crate::error::{ConfigError, Result};
use crate::file::FileConfig;

/// The destination repository for published issues.
///
/// Both fields are guaranteed non-empty; construction goes through
/// [`Target::new`] or [`resolve_target`].
///
/// # Examples
///
/// ```
/// use dailypapers_config::Target;
///
/// let target = Target::new("octocat", "papers").unwrap();
/// assert_eq!(target.owner(), "octocat");
/// assert_eq!(target.repo(), "papers");
/// assert_eq!(target.full_name(), "octocat/papers");
///
/// assert!(Target::new("", "papers").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    owner: String,
    repo: String,
}

impl Target {
    /// Creates a target from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTarget`] if either part is empty after
    /// trimming.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self> {
        let owner = owner.into().trim().to_string();
        let repo = repo.into().trim().to_string();

        if owner.is_empty() || repo.is_empty() {
            return Err(ConfigError::InvalidTarget(
                "owner and repo must both be non-empty".to_string(),
            ));
        }

        Ok(Self { owner, repo })
    }

    /// Returns the repository owner.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the full repository name in `"owner/repo"` format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Resolves the destination repository from the prioritized sources.
///
/// # Errors
///
/// Returns [`ConfigError::MissingTarget`] when either the owner or the
/// repository name remains empty after every source has been consulted.
/// This happens before any network call is made.
///
/// # Examples
///
/// ```
/// use dailypapers_config::{Environment, resolve_target};
///
/// let env = Environment {
///     actions_repository: Some("octocat/papers".to_string()),
///     actions_owner: Some("octocat".to_string()),
///     ..Default::default()
/// };
///
/// let target = resolve_target(&env, None).unwrap();
/// assert_eq!(target.full_name(), "octocat/papers");
/// ```
pub fn resolve_target(env: &Environment, file: Option<&FileConfig>) -> Result<Target> {
    let owner = env
        .owner_override
        .as_deref()
        .or(env.actions_owner.as_deref())
        .or_else(|| file.and_then(|f| f.repo_owner.as_deref()))
        .and_then(non_empty);

    let repo = env
        .repo_override
        .clone()
        .or_else(|| repo_from_combined(env.actions_repository.as_deref()))
        .or_else(|| file.and_then(|f| f.repo_name.as_deref().and_then(non_empty)));

    match (owner, repo) {
        (Some(owner), Some(repo)) => Target::new(owner, repo),
        _ => Err(ConfigError::MissingTarget),
    }
}

/// Extracts the repository name from a combined `owner/repo` value.
///
/// Splits on the first `/` and takes what follows; a value without a slash
/// yields `None` so resolution falls through to the legacy source.
fn repo_from_combined(combined: Option<&str>) -> Option<String> {
    combined
        .and_then(|value| value.split_once('/'))
        .and_then(|(_, repo)| non_empty(repo))
}
