//! Configuration for the dailypapers application.
//!
//! This crate determines where issues go and how the API is authenticated,
//! from a prioritized set of sources, plus the settings consumed by the
//! paper-collection pipeline.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`env`]: A one-shot snapshot of the relevant process environment
//! - [`file`]: The legacy configuration file, an optional secondary source
//! - [`auth`]: GitHub token resolution
//! - [`target`]: Destination repository resolution
//! - [`settings`]: Pipeline settings (feed URL, keywords, summarizer keys)
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Every value is resolved from the highest-priority non-empty source:
//!
//! 1. Explicit environment overrides (`GH_TOKEN`, `REPO_OWNER`, `REPO_NAME`, ...)
//! 2. Values GitHub Actions injects automatically (`GITHUB_TOKEN`,
//!    `GITHUB_REPOSITORY_OWNER`, `GITHUB_REPOSITORY`)
//! 3. The legacy config file (`./dailypapers.json5` or
//!    `~/.config/dailypapers/config.json5`), if present
//!
//! The environment is read exactly once, into an [`Environment`] value that
//! is passed explicitly to the resolvers; nothing in this crate reads
//! `std::env` after startup.
//!
//! # Examples
//!
//! ```no_run
//! use dailypapers_config::{Environment, FileConfig, resolve_target, resolve_token};
//!
//! # fn example() -> dailypapers_config::Result<()> {
//! let env = Environment::from_process();
//! let file = FileConfig::discover()?;
//!
//! // Fatal if no owner/repo can be determined from any source.
//! let target = resolve_target(&env, file.as_ref())?;
//! println!("publishing to {}", target.full_name());
//!
//! // A missing token is not an error here; it only becomes fatal when a
//! // request is actually built.
//! let token = resolve_token(&env, file.as_ref());
//! println!("authenticated: {}", token.is_some());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod env;
pub mod error;
pub mod file;
pub mod settings;
pub mod target;

// Re-export primary types at crate root for convenience
pub use auth::resolve_token;
pub use env::Environment;
pub use error::{ConfigError, Result};
pub use file::FileConfig;
pub use settings::Settings;
pub use target::{Target, resolve_target};
