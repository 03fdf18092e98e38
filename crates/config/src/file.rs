//! The legacy configuration file, an optional secondary source.
//!
//! Earlier versions of dailypapers kept everything in a checked-in config
//! file. That file is still honored as the lowest-priority source: the
//! resolvers consult it only after the environment yields nothing. Its
//! absence is normal and never an error.
//!
//! # File Formats
//!
//! Both JSON5 (`.json5`, comments and trailing commas allowed) and plain
//! JSON (`.json`) are accepted.
//!
//! # File Locations
//!
//! Discovery searches in the following order:
//!
//! 1. Local: `./dailypapers.json5` or `./dailypapers.json`
//! 2. User: `~/.config/dailypapers/config.json5` or
//!    `~/.config/dailypapers/config.json`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for locally, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["dailypapers.json5", "dailypapers.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "dailypapers";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// The legacy configuration file contents.
///
/// Every field is optional; the resolvers fall back to whichever fields are
/// present. Unknown fields are ignored so old files keep loading.
///
/// # Examples
///
/// ```
/// use dailypapers_config::FileConfig;
///
/// let file: FileConfig = serde_json::from_str(
///     r#"{"repo_owner": "octocat", "repo_name": "papers"}"#,
/// ).unwrap();
/// assert_eq!(file.repo_owner.as_deref(), Some("octocat"));
/// assert!(file.token.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Default assignee login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Personal access token, lowest credential priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Destination repository owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_owner: Option<String>,

    /// Destination repository name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,

    /// Listing page the pipeline scrapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// Keyword filter list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Summary language (`zh` or `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl FileConfig {
    /// Loads the legacy config file from the default locations.
    ///
    /// Returns `Ok(None)` when no file exists anywhere on the search path.
    ///
    /// # Errors
    ///
    /// Returns an error only if a file is found but cannot be read or
    /// parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dailypapers_config::FileConfig;
    ///
    /// # fn example() -> dailypapers_config::Result<()> {
    /// match FileConfig::discover()? {
    ///     Some(file) => println!("legacy config found: {file:?}"),
    ///     None => println!("no legacy config, environment only"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn discover() -> Result<Option<Self>> {
        match find_config_file() {
            Some(path) => Ok(Some(Self::load_from(&path)?)),
            None => Ok(None),
        }
    }

    /// Loads the legacy config from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        // JSON5 parser handles both JSON5 and JSON
        serde_json5::from_str(&content).map_err(ConfigError::from)
    }
}

/// Finds the legacy configuration file path, if any.
///
/// Searches the local directory first, then the user config directory.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let app_config_dir = config_dir.join(USER_CONFIG_DIR);
        for name in USER_CONFIG_FILE_NAMES {
            let path = app_config_dir.join(name);
            if path.exists() {
                return Some(path);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dailypapers.json");
        std::fs::write(
            &path,
            r#"{"token": "ghp_legacy", "repo_owner": "octocat", "repo_name": "papers"}"#,
        )
        .unwrap();

        let file = FileConfig::load_from(&path).unwrap();
        assert_eq!(file.token.as_deref(), Some("ghp_legacy"));
        assert_eq!(file.repo_owner.as_deref(), Some("octocat"));
        assert_eq!(file.repo_name.as_deref(), Some("papers"));
        assert!(file.username.is_none());
    }

    #[test]
    fn load_json5_file_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dailypapers.json5");
        std::fs::write(
            &path,
            r#"
            {
                // kept from the old setup
                repo_owner: "octocat",
                repo_name: "papers",
                keywords: ["remote sensing", "SAR"],
                language: "en",  // trailing comma below
            }
            "#,
        )
        .unwrap();

        let file = FileConfig::load_from(&path).unwrap();
        assert_eq!(file.repo_owner.as_deref(), Some("octocat"));
        assert_eq!(
            file.keywords,
            Some(vec!["remote sensing".to_string(), "SAR".to_string()])
        );
        assert_eq!(file.language.as_deref(), Some("en"));
    }

    #[test]
    fn load_nonexistent_file_fails() {
        let result = FileConfig::load_from("/nonexistent/dailypapers.json5");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn load_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dailypapers.json");
        std::fs::write(&path, "not valid json").unwrap();

        assert!(matches!(
            FileConfig::load_from(&path),
            Err(ConfigError::ParseJson5(_))
        ));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let file: FileConfig = serde_json::from_str(
            r#"{"repo_owner": "octocat", "new_sub_url": "kept from an old schema"}"#,
        )
        .unwrap();
        assert_eq!(file.repo_owner.as_deref(), Some("octocat"));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file: FileConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(file, FileConfig::default());
    }
}
