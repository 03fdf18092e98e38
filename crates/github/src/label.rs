//! Label provisioning.
//!
//! Issues are created with labels attached, and GitHub rejects an issue
//! whose labels do not exist. This module extends [`GitHubClient`] with an
//! idempotent existence-then-create pass over a label list, run before
//! every issue creation:
//!
//! - a lookup answering 200 means the label exists and is skipped
//! - a definitive 404 triggers a create with the default color
//! - a create answering 422 `already_exists` means a concurrent run won
//!   the race; that outcome is tolerated
//! - every other status on either call is fatal

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use dailypapers_config::Target;

use crate::client::GitHubClient;
use crate::error::{Error, Result};

/// Color given to labels this crate creates, hex without `#`.
pub const DEFAULT_LABEL_COLOR: &str = "ededed";

/// A GitHub label as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The label name, unique within a repository.
    pub name: String,
    /// The hex color code (without `#`).
    pub color: String,
    /// The label description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for creating a label.
#[derive(Debug, Serialize)]
struct CreateLabelRequest<'a> {
    name: &'a str,
    color: &'a str,
}

impl GitHubClient {
    /// Looks up a label by name.
    ///
    /// Returns `Ok(None)` on a definitive 404.
    ///
    /// # Errors
    ///
    /// Any status other than 200 or 404 is an [`Error::UnexpectedStatus`].
    #[instrument(skip(self), fields(repo = %target.full_name(), label = %name))]
    pub async fn get_label(&self, target: &Target, name: &str) -> Result<Option<Label>> {
        // Label names may contain spaces or '/'
        let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
        let route = format!(
            "/repos/{}/{}/labels/{encoded}",
            target.owner(),
            target.repo()
        );

        match self.inner().get(&route, None::<&()>).await {
            Ok(label) => Ok(Some(label)),
            Err(err) if status_of(&err) == Some(404) => Ok(None),
            Err(err) => Err(Error::unexpected("GET", &route, err)),
        }
    }

    /// Creates a label with the default color.
    ///
    /// Returns `Ok(None)` when the API answers 422 `already_exists`, i.e. a
    /// concurrent run created the label between our lookup and this call.
    ///
    /// # Errors
    ///
    /// A 422 that is not `already_exists` is a genuine validation failure
    /// and fatal, as is any other unexpected status.
    #[instrument(skip(self), fields(repo = %target.full_name(), label = %name))]
    pub async fn create_label(&self, target: &Target, name: &str) -> Result<Option<Label>> {
        let route = format!("/repos/{}/{}/labels", target.owner(), target.repo());
        let body = CreateLabelRequest {
            name,
            color: DEFAULT_LABEL_COLOR,
        };

        match self.inner().post(&route, Some(&body)).await {
            Ok(label) => {
                debug!("created label");
                Ok(Some(label))
            }
            Err(err) if is_already_exists(&err) => {
                debug!("label already exists, concurrent creator won");
                Ok(None)
            }
            Err(err) => Err(Error::unexpected("POST", &route, err)),
        }
    }

    /// Ensures every named label exists, in caller order.
    ///
    /// Empty and whitespace-only names are skipped. The pass is sequential;
    /// this path runs once per scheduled invocation and is not
    /// performance-sensitive.
    ///
    /// # Errors
    ///
    /// Returns the first fatal lookup or creation error; labels after it
    /// are not processed.
    #[instrument(skip(self, names), fields(repo = %target.full_name(), count = names.len()))]
    pub async fn ensure_labels(&self, target: &Target, names: &[String]) -> Result<()> {
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            if self.get_label(target, name).await?.is_some() {
                debug!(label = %name, "label exists");
                continue;
            }

            if self.create_label(target, name).await?.is_none() {
                warn!(label = %name, "lost label creation race to a concurrent run");
            }
        }

        Ok(())
    }
}

/// Extracts the HTTP status from an octocrab API error, if any.
fn status_of(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}

/// Whether an error is the tolerated 422 for a label that already exists.
///
/// The response body is inspected rather than trusting the status alone, so
/// a genuine validation failure (bad name, bad color) still surfaces.
fn is_already_exists(err: &octocrab::Error) -> bool {
    let octocrab::Error::GitHub { source, .. } = err else {
        return false;
    };

    source.status_code.as_u16() == 422
        && source.errors.as_ref().is_some_and(|errors| {
            errors
                .iter()
                .any(|e| e.get("code").and_then(|c| c.as_str()) == Some("already_exists"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_deserialize_without_description() {
        let json = r#"{"name": "DailyPapers", "color": "ededed"}"#;
        let label: Label = serde_json::from_str(json).unwrap();

        assert_eq!(label.name, "DailyPapers");
        assert_eq!(label.color, "ededed");
        assert!(label.description.is_none());
    }

    #[test]
    fn label_deserialize_ignores_extra_api_fields() {
        let json = r#"{
            "id": 1,
            "node_id": "LA_test",
            "url": "https://api.github.com/repos/octocat/papers/labels/DailyPapers",
            "name": "DailyPapers",
            "color": "ededed",
            "default": false,
            "description": "daily paper alerts"
        }"#;
        let label: Label = serde_json::from_str(json).unwrap();

        assert_eq!(label.name, "DailyPapers");
        assert_eq!(label.description.as_deref(), Some("daily paper alerts"));
    }

    #[test]
    fn create_label_request_body_shape() {
        let body = CreateLabelRequest {
            name: "DailyPapers",
            color: DEFAULT_LABEL_COLOR,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "DailyPapers", "color": "ededed"})
        );
    }
}
