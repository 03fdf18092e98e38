//! Error types for GitHub API operations.

/// Errors that can occur while publishing an issue.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A network-level or client-level failure talking to the GitHub API.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The API answered with a status outside the expected set for a call.
    ///
    /// Carries the request method, URL, status, and the response message so
    /// a failed scheduled run can be diagnosed from its log alone.
    #[error("{method} {url} returned HTTP {status}: {message}")]
    UnexpectedStatus {
        /// The HTTP method of the failed request.
        method: &'static str,
        /// The request URL (API route).
        url: String,
        /// The response status code.
        status: u16,
        /// The message from the response body.
        message: String,
    },

    /// No token was available when an authenticated request was built.
    ///
    /// Token resolution itself never fails; the absence only becomes an
    /// error here, at the point of use.
    #[error(
        "missing GitHub token: set GH_TOKEN, or rely on GITHUB_TOKEN under GitHub Actions"
    )]
    MissingToken,

    /// The issue to publish has an empty title.
    #[error("issue title must not be empty")]
    EmptyTitle,

    /// Target or credential resolution failed.
    #[error(transparent)]
    Config(#[from] dailypapers_config::ConfigError),
}

impl Error {
    /// Classifies an octocrab error for a call, keeping API-level responses
    /// diagnosable and passing transport errors through unchanged.
    pub(crate) fn unexpected(method: &'static str, url: &str, err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::UnexpectedStatus {
                method,
                url: url.to_string(),
                status: source.status_code.as_u16(),
                message: source.message,
            },
            other => Self::Api(other),
        }
    }

    /// Returns the HTTP status code of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Api(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            _ => None,
        }
    }
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_display_carries_diagnostics() {
        let err = Error::UnexpectedStatus {
            method: "POST",
            url: "/repos/octocat/papers/issues".to_string(),
            status: 500,
            message: "boom".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("POST"));
        assert!(rendered.contains("/repos/octocat/papers/issues"));
        assert!(rendered.contains("500"));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn unexpected_status_exposes_status() {
        let err = Error::UnexpectedStatus {
            method: "GET",
            url: "/x".to_string(),
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn missing_token_has_no_status() {
        assert_eq!(Error::MissingToken.status(), None);
    }

    #[test]
    fn missing_token_display_names_the_variables() {
        let rendered = Error::MissingToken.to_string();
        assert!(rendered.contains("GH_TOKEN"));
        assert!(rendered.contains("GITHUB_TOKEN"));
    }
}
