//! dailypapers - files newly submitted arXiv papers as GitHub issues.
//!
//! The scheduled pipeline (scraping, keyword filtering, summarization)
//! calls [`Publisher::publish`] once per selected paper. Running this
//! binary directly performs a smoke-test publish against the configured
//! repository, which is the quickest way to verify a token and target
//! before wiring up the schedule.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use dailypapers_config::{Environment, FileConfig, Settings};
use dailypapers_github::{NewIssue, Publisher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let env = Environment::from_process();
    let file = FileConfig::discover()?;

    let settings = Settings::resolve(&env, file.as_ref());
    debug!(
        feed = %settings.feed_url,
        keywords = settings.keywords.len(),
        language = %settings.language,
        summarizer_keys = settings.openai_api_keys.len(),
        "pipeline settings resolved"
    );

    let publisher = Publisher::from_sources(&env, file.as_ref())?;

    let issue = NewIssue::new("Test Issue")
        .with_body("Hello from dailypapers")
        .with_label("DailyPapers");
    let url = publisher.publish(&issue).await?;

    println!("Successfully created issue \"{}\" {url}", issue.title);
    Ok(())
}
