//! GitHub API client for dailypapers.
//!
//! This crate is the publishing half of dailypapers: given the resolved
//! credentials and target repository, it files one issue per selected
//! paper, creating any missing labels first and degrading to a label-less
//! issue when GitHub rejects the labeled creation.
//!
//! # Overview
//!
//! - [`GitHubClient`]: octocrab-backed API client with optional
//!   authentication and a fixed per-request timeout
//! - [`NewIssue`] and [`CreatedIssue`]: the issue to file and the fields
//!   of the API's answer this crate cares about
//! - [`Publisher`]: the single `publish` workflow - label provisioning,
//!   creation, and the one degraded retry
//! - [`Error`]: error types carrying method, URL, and status for
//!   diagnosability
//!
//! # Tolerated failures
//!
//! Two API answers are treated as expected outcomes rather than errors:
//!
//! - a label creation answering 422 `already_exists` (a concurrent run
//!   created it between our lookup and create)
//! - an issue creation answering 422 while labels were attached, which
//!   triggers exactly one retry without labels
//!
//! Everything else - timeouts, unexpected statuses, missing configuration -
//! is fatal for the invocation.
//!
//! # Examples
//!
//! ```no_run
//! use dailypapers_config::{Environment, FileConfig};
//! use dailypapers_github::{NewIssue, Publisher};
//!
//! # async fn example() -> dailypapers_github::Result<()> {
//! let env = Environment::from_process();
//! let file = FileConfig::discover()?;
//!
//! let publisher = Publisher::from_sources(&env, file.as_ref())?;
//! let url = publisher
//!     .publish(
//!         &NewIssue::new("New remote sensing paper")
//!             .with_body("abstract...")
//!             .with_label("DailyPapers"),
//!     )
//!     .await?;
//! println!("filed at {url}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod issue;
pub mod label;
pub mod publish;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use issue::{CreatedIssue, NewIssue};
pub use label::{DEFAULT_LABEL_COLOR, Label};
pub use publish::Publisher;
