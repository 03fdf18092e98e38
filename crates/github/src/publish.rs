//! The issue publisher.
//!
//! One workflow: ensure the requested labels exist, create the issue, and
//! if GitHub rejects the labeled creation as unprocessable, retry exactly
//! once without labels. A labeled paper alert that loses its labels is
//! still worth filing; a dropped alert is not.

use tracing::{info, instrument, warn};

use dailypapers_config::{Environment, FileConfig, Target, resolve_target, resolve_token};

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use crate::issue::NewIssue;

/// HTTP status for a creation request rejected by validation.
const STATUS_UNPROCESSABLE: u16 = 422;

/// The two creation attempts, in degradation order.
///
/// `WithLabels` transitions to `WithoutLabels` on a tolerated validation
/// failure; `WithoutLabels` is terminal, so a second failure propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    WithLabels,
    WithoutLabels,
}

/// Publishes issues to one destination repository.
///
/// # Examples
///
/// ```no_run
/// use dailypapers_config::{Environment, FileConfig};
/// use dailypapers_github::{NewIssue, Publisher};
///
/// # async fn example() -> dailypapers_github::Result<()> {
/// let env = Environment::from_process();
/// let file = FileConfig::discover()?;
/// let publisher = Publisher::from_sources(&env, file.as_ref())?;
///
/// let issue = NewIssue::new("New remote sensing paper")
///     .with_body("abstract...")
///     .with_label("DailyPapers");
///
/// let url = publisher.publish(&issue).await?;
/// println!("filed at {url}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Publisher {
    client: GitHubClient,
    target: Target,
}

impl Publisher {
    /// Creates a publisher from an already-built client and target.
    #[must_use]
    pub fn new(client: GitHubClient, target: Target) -> Self {
        Self { client, target }
    }

    /// Creates a publisher from the configuration sources.
    ///
    /// Target resolution happens here, before any network call; a missing
    /// owner or repository aborts immediately. A missing token does not:
    /// it only fails once [`publish`](Self::publish) builds a request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no destination repository can be
    /// resolved, or an [`Error::Api`] if the client cannot be built.
    pub fn from_sources(env: &Environment, file: Option<&FileConfig>) -> Result<Self> {
        let target = resolve_target(env, file)?;
        let token = resolve_token(env, file);

        let client = match env.api_base.as_deref() {
            Some(base) => GitHubClient::with_base_uri(base, token)?,
            None => GitHubClient::new(token)?,
        };

        Ok(Self::new(client, target))
    }

    /// Returns the destination repository.
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Publishes one issue and returns its public URL.
    ///
    /// Steps, in order:
    ///
    /// 1. Reject unauthenticated use ([`Error::MissingToken`]) and empty
    ///    titles ([`Error::EmptyTitle`]) before any network call.
    /// 2. Ensure every requested label exists (see
    ///    [`GitHubClient::ensure_labels`]).
    /// 3. Create the issue, attaching labels when any were requested.
    /// 4. If the labeled creation is rejected with a 422, retry exactly
    ///    once with labels omitted. Any other failure, or a failure of the
    ///    label-less attempt, propagates.
    ///
    /// # Errors
    ///
    /// Everything outside the single tolerated degradation is fatal for
    /// this invocation: the call either files exactly one issue or
    /// reports an error.
    #[instrument(skip(self, issue), fields(repo = %self.target.full_name(), title = %issue.title))]
    pub async fn publish(&self, issue: &NewIssue) -> Result<String> {
        if !self.client.is_authenticated() {
            return Err(Error::MissingToken);
        }
        if issue.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        self.client.ensure_labels(&self.target, &issue.labels).await?;

        let mut attempt = if issue.labels.is_empty() {
            Attempt::WithoutLabels
        } else {
            Attempt::WithLabels
        };

        loop {
            let labels = match attempt {
                Attempt::WithLabels => Some(issue.labels.as_slice()),
                Attempt::WithoutLabels => None,
            };

            match self.client.create_issue(&self.target, issue, labels).await {
                Ok(created) => {
                    info!(url = %created.html_url, "published issue");
                    return Ok(created.html_url);
                }
                Err(err)
                    if attempt == Attempt::WithLabels
                        && err.status() == Some(STATUS_UNPROCESSABLE) =>
                {
                    warn!(error = %err, "labeled creation rejected, retrying without labels");
                    attempt = Attempt::WithoutLabels;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailypapers_config::Environment;

    #[test]
    fn from_sources_requires_a_target() {
        let err = Publisher::from_sources(&Environment::default(), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn from_sources_tolerates_a_missing_token() {
        let env = Environment {
            actions_owner: Some("octocat".to_string()),
            actions_repository: Some("octocat/papers".to_string()),
            ..Default::default()
        };

        let publisher = Publisher::from_sources(&env, None).unwrap();
        assert_eq!(publisher.target().full_name(), "octocat/papers");
    }

    #[tokio::test]
    async fn publish_without_token_fails_before_any_request() {
        let env = Environment {
            actions_owner: Some("octocat".to_string()),
            actions_repository: Some("octocat/papers".to_string()),
            // Unroutable base so an accidental request would error loudly
            api_base: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        };
        let publisher = Publisher::from_sources(&env, None).unwrap();

        let err = publisher
            .publish(&NewIssue::new("Test Issue"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingToken));
    }

    #[tokio::test]
    async fn publish_rejects_empty_titles() {
        let env = Environment {
            user_token: Some("ghp_test".to_string()),
            actions_owner: Some("octocat".to_string()),
            actions_repository: Some("octocat/papers".to_string()),
            api_base: Some("http://127.0.0.1:1".to_string()),
            ..Default::default()
        };
        let publisher = Publisher::from_sources(&env, None).unwrap();

        let err = publisher.publish(&NewIssue::new("  ")).await.unwrap_err();
        assert!(matches!(err, Error::EmptyTitle));
    }
}
