//! GitHub token resolution.
//!
//! The token is resolved with the following fallback chain:
//!
//! 1. `GH_TOKEN` - a user-managed PAT or fine-grained token
//! 2. `GITHUB_TOKEN` - the token GitHub Actions injects automatically
//! 3. `token` from the legacy config file
//!
//! The first non-empty, trimmed value wins. A fully absent token is NOT an
//! error at resolution time: nothing destructive has happened yet, and
//! flows that never build a request should not be blocked. The publisher
//! raises the configuration error at the point of use instead.

use secrecy::SecretString;

use crate::env::{Environment, non_empty};
use crate::file::FileConfig;

/// Resolves the GitHub token from the prioritized sources.
///
/// The token is wrapped in [`SecretString`] immediately so it cannot leak
/// through `Debug` output downstream.
///
/// # Examples
///
/// ```
/// use dailypapers_config::{Environment, resolve_token};
/// use secrecy::ExposeSecret;
///
/// let env = Environment {
///     user_token: Some("ghp_mine".to_string()),
///     actions_token: Some("ghs_actions".to_string()),
///     ..Default::default()
/// };
///
/// // The user-managed token outranks the Actions token.
/// let token = resolve_token(&env, None).unwrap();
/// assert_eq!(token.expose_secret(), "ghp_mine");
/// ```
#[must_use]
pub fn resolve_token(env: &Environment, file: Option<&FileConfig>) -> Option<SecretString> {
    env.user_token
        .as_deref()
        .or(env.actions_token.as_deref())
        .or_else(|| file.and_then(|f| f.token.as_deref()))
        .and_then(non_empty)
        .map(SecretString::from)
}
