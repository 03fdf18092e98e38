//! Issue creation.
//!
//! [`NewIssue`] is the shape the pipeline hands over per paper: a title,
//! the abstract/summary as the body, an optional assignee, and the label
//! names to attach. The raw creation call lives here; the orderly
//! ensure-labels-then-create-then-maybe-degrade flow is the publisher's
//! job (see [`crate::publish`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use dailypapers_config::Target;

use crate::client::GitHubClient;
use crate::error::{Error, Result};

/// An issue to be published.
///
/// # Examples
///
/// ```
/// use dailypapers_github::NewIssue;
///
/// let issue = NewIssue::new("New remote sensing paper")
///     .with_body("abstract...")
///     .with_label("DailyPapers");
///
/// assert_eq!(issue.title, "New remote sensing paper");
/// assert_eq!(issue.labels, vec!["DailyPapers"]);
/// assert!(issue.assignee.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    /// The issue title. Must be non-empty at publish time.
    pub title: String,
    /// The issue body; empty is allowed.
    pub body: String,
    /// Login to assign the issue to, if any.
    pub assignee: Option<String>,
    /// Label names to attach, in order. Not deduplicated here.
    pub labels: Vec<String>,
}

impl NewIssue {
    /// Creates an issue with the given title and nothing else.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the issue body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the assignee login.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Replaces the label list.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a single label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }
}

/// Request body for creating an issue.
///
/// `assignees` and `labels` are omitted entirely when absent; GitHub
/// treats an explicit empty array differently from a missing key in some
/// permission setups.
#[derive(Debug, Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignees: Option<[&'a str; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [String]>,
}

/// The fields of a created issue this crate cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    /// The issue number within the repository.
    pub number: u64,
    /// The issue's public URL.
    pub html_url: String,
}

impl GitHubClient {
    /// Creates an issue, expecting a 201.
    ///
    /// `labels` is the attempt-specific label set: `None` omits the key
    /// from the payload entirely, which is how the degraded retry asks for
    /// a label-less issue.
    ///
    /// # Errors
    ///
    /// Any non-201 answer is an [`Error::UnexpectedStatus`] carrying the
    /// response status; the publisher inspects it to decide on the single
    /// degraded retry.
    #[instrument(
        skip(self, issue, labels),
        fields(repo = %target.full_name(), title = %issue.title, labeled = labels.is_some())
    )]
    pub async fn create_issue(
        &self,
        target: &Target,
        issue: &NewIssue,
        labels: Option<&[String]>,
    ) -> Result<CreatedIssue> {
        let route = format!("/repos/{}/{}/issues", target.owner(), target.repo());
        let body = CreateIssueRequest {
            title: &issue.title,
            body: &issue.body,
            assignees: issue.assignee.as_deref().map(|login| [login]),
            labels,
        };

        let created: CreatedIssue = self
            .inner()
            .post(&route, Some(&body))
            .await
            .map_err(|err| Error::unexpected("POST", &route, err))?;

        debug!(number = created.number, "created issue");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_all_fields() {
        let issue = NewIssue::new("title")
            .with_body("body")
            .with_assignee("octocat")
            .with_labels(["a", "b"])
            .with_label("c");

        assert_eq!(issue.title, "title");
        assert_eq!(issue.body, "body");
        assert_eq!(issue.assignee.as_deref(), Some("octocat"));
        assert_eq!(issue.labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn request_omits_absent_assignees_and_labels() {
        let body = CreateIssueRequest {
            title: "t",
            body: "",
            assignees: None,
            labels: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"title": "t", "body": ""}));
    }

    #[test]
    fn request_includes_labels_when_present() {
        let labels = vec!["DailyPapers".to_string()];
        let body = CreateIssueRequest {
            title: "t",
            body: "abstract...",
            assignees: None,
            labels: Some(&labels),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "t",
                "body": "abstract...",
                "labels": ["DailyPapers"],
            })
        );
    }

    #[test]
    fn request_wraps_assignee_into_an_array() {
        let body = CreateIssueRequest {
            title: "t",
            body: "",
            assignees: Some(["octocat"]),
            labels: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["assignees"], serde_json::json!(["octocat"]));
    }

    #[test]
    fn created_issue_deserializes_from_api_shape() {
        let json = r#"{
            "id": 1,
            "number": 42,
            "title": "t",
            "html_url": "https://github.com/octocat/papers/issues/42",
            "state": "open"
        }"#;
        let created: CreatedIssue = serde_json::from_str(json).unwrap();
        assert_eq!(created.number, 42);
        assert_eq!(
            created.html_url,
            "https://github.com/octocat/papers/issues/42"
        );
    }
}
