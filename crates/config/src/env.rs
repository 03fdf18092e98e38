//! One-shot snapshot of the process environment.
//!
//! All environment access happens here, once, at process start. The
//! resulting [`Environment`] value is passed explicitly to the resolvers
//! and to [`Settings::resolve`](crate::Settings::resolve), which keeps
//! deep call paths free of hidden `std::env` lookups and makes resolution
//! trivially testable.

/// User-managed personal access token.
pub const ENV_USER_TOKEN: &str = "GH_TOKEN";
/// Token GitHub Actions injects automatically.
pub const ENV_ACTIONS_TOKEN: &str = "GITHUB_TOKEN";
/// Explicit repository owner override.
pub const ENV_OWNER: &str = "REPO_OWNER";
/// Owner GitHub Actions injects automatically.
pub const ENV_ACTIONS_OWNER: &str = "GITHUB_REPOSITORY_OWNER";
/// Explicit repository name override.
pub const ENV_REPO: &str = "REPO_NAME";
/// Combined `owner/repo` value GitHub Actions injects automatically.
pub const ENV_ACTIONS_REPOSITORY: &str = "GITHUB_REPOSITORY";
/// API base URL override, mainly for GitHub Enterprise installs.
pub const ENV_API_BASE: &str = "GITHUB_API";
/// Default assignee login.
pub const ENV_USERNAME: &str = "GITHUB_USERNAME";
/// Listing page the pipeline scrapes.
pub const ENV_FEED_URL: &str = "NEW_SUB_URL";
/// Keyword filter list, as a JSON array or a comma/semicolon list.
pub const ENV_KEYWORD_LIST: &str = "KEYWORD_LIST";
/// Single summarizer API key; takes precedence over the key list.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Summarizer API key list, same formats as the keyword list.
pub const ENV_OPENAI_API_KEYS: &str = "OPENAI_API_KEYS";
/// Summary language (`zh` or `en`).
pub const ENV_LANGUAGE: &str = "LANGUAGE";

/// A snapshot of the environment variables dailypapers reads.
///
/// Each field holds the trimmed value of one variable, with unset and
/// whitespace-only values collapsed to `None`. Construct via
/// [`Environment::from_process`] in the binary, or build a value directly
/// in tests.
///
/// # Examples
///
/// ```
/// use dailypapers_config::Environment;
///
/// let env = Environment {
///     user_token: Some("ghp_xxx".to_string()),
///     ..Default::default()
/// };
/// assert!(env.actions_token.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `GH_TOKEN` - user-managed token, highest credential priority.
    pub user_token: Option<String>,
    /// `GITHUB_TOKEN` - Actions-provided token.
    pub actions_token: Option<String>,
    /// `REPO_OWNER` - explicit owner override.
    pub owner_override: Option<String>,
    /// `GITHUB_REPOSITORY_OWNER` - Actions-provided owner.
    pub actions_owner: Option<String>,
    /// `REPO_NAME` - explicit repository name override.
    pub repo_override: Option<String>,
    /// `GITHUB_REPOSITORY` - Actions-provided `owner/repo` pair.
    pub actions_repository: Option<String>,
    /// `GITHUB_API` - API base URL override.
    pub api_base: Option<String>,
    /// `GITHUB_USERNAME` - default assignee login.
    pub username: Option<String>,
    /// `NEW_SUB_URL` - listing page the pipeline scrapes.
    pub feed_url: Option<String>,
    /// `KEYWORD_LIST` - raw keyword filter list.
    pub keyword_list: Option<String>,
    /// `OPENAI_API_KEY` - single summarizer key.
    pub openai_api_key: Option<String>,
    /// `OPENAI_API_KEYS` - raw summarizer key list.
    pub openai_api_keys: Option<String>,
    /// `LANGUAGE` - summary language.
    pub language: Option<String>,
}

impl Environment {
    /// Captures the relevant variables from the process environment.
    ///
    /// This is the only place the crate touches `std::env`.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            user_token: read(ENV_USER_TOKEN),
            actions_token: read(ENV_ACTIONS_TOKEN),
            owner_override: read(ENV_OWNER),
            actions_owner: read(ENV_ACTIONS_OWNER),
            repo_override: read(ENV_REPO),
            actions_repository: read(ENV_ACTIONS_REPOSITORY),
            api_base: read(ENV_API_BASE),
            username: read(ENV_USERNAME),
            feed_url: read(ENV_FEED_URL),
            keyword_list: read(ENV_KEYWORD_LIST),
            openai_api_key: read(ENV_OPENAI_API_KEY),
            openai_api_keys: read(ENV_OPENAI_API_KEYS),
            language: read(ENV_LANGUAGE),
        }
    }
}

/// Reads one variable, trimming it and collapsing empty values to `None`.
fn read(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| non_empty(&value))
}

/// Trims a raw value, returning `None` if nothing remains.
///
/// Used by the resolvers as well, so a config file containing
/// `"token": "  "` behaves exactly like an absent field.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_collapses() {
        assert_eq!(non_empty("  ghp_xxx  "), Some("ghp_xxx".to_string()));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty("\towner\n"), Some("owner".to_string()));
    }

    #[test]
    fn default_environment_is_empty() {
        let env = Environment::default();
        assert!(env.user_token.is_none());
        assert!(env.actions_repository.is_none());
        assert!(env.keyword_list.is_none());
    }
}
