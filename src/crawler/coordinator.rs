//! Crawler coordinator - main crawl orchestration logic
//!
//! The coordinator owns the shared crawl context (frontier, budget state,
//! classifier and the injected fetch/parse capabilities), seeds the frontier with
//! the normalized start URL, launches the worker pool, waits for every worker to
//! finish, and assembles the final report.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::task::JoinSet;
use url::Url;

use crate::config::{validate, CrawlConfig};
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::{HtmlLinkExtractor, LinkExtractor};
use crate::crawler::worker::run_worker;
use crate::state::CrawlState;
use crate::url::UrlClassifier;
use crate::SweepError;

/// Everything the workers share, exposed only through synchronized operations
pub(crate) struct CrawlContext {
    pub frontier: Frontier,
    pub state: CrawlState,
    pub classifier: UrlClassifier,
    pub fetcher: Arc<dyn Fetcher>,
    pub extractor: Arc<dyn LinkExtractor>,
    /// Same-site JavaScript files: logged, never fetched
    pub scripts: Mutex<BTreeSet<String>>,
    pub fetch_failures: AtomicUsize,
}

/// Outcome of a crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Every same-site URL admitted to the frontier, sorted
    ///
    /// Includes URLs that were admitted but never fetched because the page budget
    /// ran out first.
    pub pages: Vec<String>,

    /// Same-site JavaScript file URLs discovered along the way, sorted
    pub scripts: Vec<String>,

    /// Number of pages actually fetched (budget slots consumed)
    pub pages_fetched: usize,

    /// Per-page fetch failures recovered during the run
    pub fetch_failures: usize,

    /// True when the run ended because the page budget was exhausted
    pub budget_exhausted: bool,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: CrawlConfig,
    seed: Url,
    ctx: Arc<CrawlContext>,
}

impl Coordinator {
    /// Creates a coordinator with the production HTTP fetcher and HTML extractor
    ///
    /// # Errors
    ///
    /// Fails before any crawling begins when the configuration is invalid
    /// (malformed start URL, zero workers, nonsensical page budget) or the HTTP
    /// client cannot be built.
    pub fn new(config: CrawlConfig) -> Result<Self, SweepError> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new()?);
        let extractor: Arc<dyn LinkExtractor> = Arc::new(HtmlLinkExtractor::new());
        Self::with_collaborators(config, fetcher, extractor)
    }

    /// Creates a coordinator with injected fetch and parse capabilities
    ///
    /// This is the seam tests use to drive the full coordinator against a
    /// scripted page graph.
    pub fn with_collaborators(
        config: CrawlConfig,
        fetcher: Arc<dyn Fetcher>,
        extractor: Arc<dyn LinkExtractor>,
    ) -> Result<Self, SweepError> {
        let seed = validate(&config)?;
        let classifier = UrlClassifier::new(&seed)?;

        let ctx = Arc::new(CrawlContext {
            frontier: Frontier::new(),
            state: CrawlState::new(config.max_pages),
            classifier,
            fetcher,
            extractor,
            scripts: Mutex::new(BTreeSet::new()),
            fetch_failures: AtomicUsize::new(0),
        });

        Ok(Self { config, seed, ctx })
    }

    /// Runs the crawl to completion and returns the discovered URL set
    ///
    /// The run ends exactly when the page budget is exhausted or the frontier is
    /// permanently drained; either way every worker has reached its end state
    /// before this returns.
    pub async fn run(&mut self) -> Result<CrawlReport, SweepError> {
        let started = Instant::now();
        let budget = if self.config.max_pages < 0 {
            "unlimited".to_string()
        } else {
            self.config.max_pages.to_string()
        };
        tracing::info!(
            "Starting crawl of {} ({} workers, page budget {})",
            self.seed,
            self.config.num_workers,
            budget
        );

        // The seed goes through the same admission path as discovered links so it
        // participates in the dedup invariant.
        self.ctx.frontier.try_admit(self.seed.as_str());

        let mut workers = JoinSet::new();
        for worker_id in 0..self.config.num_workers {
            let ctx = Arc::clone(&self.ctx);
            workers.spawn(run_worker(ctx, worker_id));
        }

        while let Some(joined) = workers.join_next().await {
            joined?;
        }

        let report = CrawlReport {
            pages: self.ctx.frontier.admitted_urls(),
            scripts: self.ctx.scripts.lock().unwrap().iter().cloned().collect(),
            pages_fetched: self.ctx.state.pages_crawled(),
            fetch_failures: self.ctx.fetch_failures.load(Ordering::Relaxed),
            budget_exhausted: self.ctx.state.is_stopped(),
        };

        tracing::info!(
            "Crawl completed: {} pages fetched, {} URLs discovered, {} failures in {:?}",
            report.pages_fetched,
            report.pages.len(),
            report.fetch_failures,
            started.elapsed()
        );

        Ok(report)
    }
}
