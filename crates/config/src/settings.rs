//! Pipeline settings.
//!
//! The scraping, filtering, and summarization stages live outside this
//! repository, but their configuration surface is resolved here alongside
//! the publishing credentials so a scheduled run has exactly one place to
//! read from. Values come from the environment first, then the legacy
//! config file, then a built-in default.

use crate::env::{Environment, non_empty};
use crate::file::FileConfig;

/// Default listing page for newly submitted papers.
pub const DEFAULT_FEED_URL: &str = "https://arxiv.org/list/cs/new";

/// Default summary language.
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Default keyword filter when nothing is configured.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    vec!["remote sensing".to_string()]
}

/// Resolved settings for the paper-collection pipeline.
///
/// # Examples
///
/// ```
/// use dailypapers_config::{Environment, Settings};
///
/// let env = Environment {
///     keyword_list: Some("SAR; hyperspectral".to_string()),
///     ..Default::default()
/// };
///
/// let settings = Settings::resolve(&env, None);
/// assert_eq!(settings.keywords, vec!["SAR", "hyperspectral"]);
/// assert_eq!(settings.language, "zh");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Listing page the pipeline scrapes.
    pub feed_url: String,
    /// Keywords a paper must match to be published.
    pub keywords: Vec<String>,
    /// Summarizer API keys, tried in order. Empty disables summarization
    /// without blocking the rest of the run.
    pub openai_api_keys: Vec<String>,
    /// Summary language (`zh` or `en`).
    pub language: String,
    /// Default assignee login for published issues.
    pub username: Option<String>,
}

impl Settings {
    /// Resolves pipeline settings from the environment and the legacy file.
    #[must_use]
    pub fn resolve(env: &Environment, file: Option<&FileConfig>) -> Self {
        let feed_url = env
            .feed_url
            .clone()
            .or_else(|| file.and_then(|f| f.feed_url.as_deref().and_then(non_empty)))
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let keywords = env
            .keyword_list
            .as_deref()
            .map(split_list)
            .filter(|list| !list.is_empty())
            .or_else(|| file.and_then(|f| f.keywords.clone()).filter(|list| !list.is_empty()))
            .unwrap_or_else(default_keywords);

        let language = env
            .language
            .clone()
            .or_else(|| file.and_then(|f| f.language.as_deref().and_then(non_empty)))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let username = env
            .username
            .clone()
            .or_else(|| file.and_then(|f| f.username.as_deref().and_then(non_empty)));

        Self {
            feed_url,
            keywords,
            openai_api_keys: resolve_openai_keys(env),
            language,
            username,
        }
    }
}

/// Merges the single-key and list-form summarizer key variables.
///
/// The single key, when set, comes first; the list follows with any copy of
/// the single key removed.
fn resolve_openai_keys(env: &Environment) -> Vec<String> {
    let list = env
        .openai_api_keys
        .as_deref()
        .map(split_list)
        .unwrap_or_default();

    match env.openai_api_key.as_deref().and_then(non_empty) {
        Some(single) => {
            let mut keys = vec![single.clone()];
            keys.extend(list.into_iter().filter(|k| *k != single));
            keys
        }
        None => list,
    }
}

/// Parses a list-valued setting.
///
/// Two input forms are accepted:
///
/// 1. a JSON array: `["kw1", "kw2"]`
/// 2. a comma- or semicolon-separated string: `kw1,kw2` or `kw1;kw2`
///
/// Entries are trimmed and empty entries dropped. Malformed JSON falls back
/// to the separator form rather than erroring.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if raw.starts_with('[') {
        if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(raw) {
            return values
                .into_iter()
                .map(|value| match value {
                    serde_json::Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .filter(|entry| !entry.is_empty())
                .collect();
        }
    }

    raw.replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
