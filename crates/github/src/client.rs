//! GitHub API client implementation.

use std::time::Duration;

use http::header::HeaderName;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Default GitHub API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// The API version sent with every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Fixed per-request timeout; a call exceeding it is fatal for the run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API client with optional authentication.
///
/// A client without a token can still be constructed, so that flows which
/// never issue a request are not blocked by a missing credential; the
/// publisher rejects unauthenticated use at publish time.
///
/// # Security
///
/// Tokens are taken as [`SecretString`] to prevent accidental logging or
/// exposure in debug output.
///
/// # Examples
///
/// ```no_run
/// use dailypapers_github::GitHubClient;
/// use secrecy::SecretString;
///
/// # fn example() -> dailypapers_github::Result<()> {
/// let token = SecretString::from("ghp_your_token".to_string());
/// let client = GitHubClient::new(Some(token))?;
/// assert!(client.is_authenticated());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    inner: Octocrab,
    /// Whether this client was built with a token.
    authenticated: bool,
}

impl GitHubClient {
    /// Creates a client against the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns an error if the octocrab client fails to initialize.
    #[instrument(skip(token), fields(authenticated = token.is_some()))]
    pub fn new(token: Option<SecretString>) -> Result<Self> {
        Self::with_base_uri(GITHUB_API_BASE, token)
    }

    /// Creates a client against a specific API base URL.
    ///
    /// Used for GitHub Enterprise installs (via the `GITHUB_API` variable)
    /// and for pointing tests at a local mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is invalid or the octocrab client
    /// fails to initialize.
    #[instrument(skip(token), fields(base_uri = %base_uri, authenticated = token.is_some()))]
    pub fn with_base_uri(base_uri: &str, token: Option<SecretString>) -> Result<Self> {
        debug!("creating GitHub client");

        let mut builder = Octocrab::builder()
            .base_uri(base_uri)
            .map_err(Error::Api)?
            .add_header(
                HeaderName::from_static("x-github-api-version"),
                GITHUB_API_VERSION.to_string(),
            )
            .set_connect_timeout(Some(REQUEST_TIMEOUT))
            .set_read_timeout(Some(REQUEST_TIMEOUT));

        let authenticated = token.is_some();
        if let Some(token) = &token {
            builder = builder.personal_token(token.expose_secret());
        }

        Ok(Self {
            inner: builder.build().map_err(Error::Api)?,
            authenticated,
        })
    }

    /// Returns whether this client was built with a token.
    ///
    /// This reflects construction-time state only; it does not verify that
    /// the token is still valid.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns a reference to the underlying octocrab client.
    #[must_use]
    pub fn inner(&self) -> &Octocrab {
        &self.inner
    }
}
