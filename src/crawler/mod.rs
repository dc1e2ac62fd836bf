//! Crawler module for concurrent page fetching and link discovery
//!
//! This module contains the core crawling logic, including:
//! - The shared frontier and its drain-detection protocol
//! - HTTP fetching behind an injectable capability
//! - HTML link extraction
//! - The worker loop and overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod worker;

pub use coordinator::{Coordinator, CrawlReport};
pub use fetcher::{build_http_client, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::Frontier;
pub use parser::{HtmlLinkExtractor, LinkExtractor};

use crate::config::CrawlConfig;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl: it validates the
/// configuration, launches the worker pool, and returns the set of discovered
/// URLs once the site is exhausted or the page budget is hit.
///
/// # Example
///
/// ```no_run
/// use websweep::config::CrawlConfig;
/// use websweep::crawler::crawl;
///
/// # async fn example() -> websweep::Result<()> {
/// let config = CrawlConfig::new("https://example.com/");
/// let report = crawl(config).await?;
/// println!("Discovered {} pages", report.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
