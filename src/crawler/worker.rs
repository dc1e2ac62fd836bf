//! The worker loop
//!
//! Each worker cycles through: take a URL from the frontier, reserve a budget
//! slot, fetch, extract and classify links, admit the same-site ones, repeat. A
//! worker is done when the budget is exhausted or the frontier reports a full
//! drain. Fetching and parsing happen outside any lock; only frontier admission
//! and slot reservation are synchronized operations.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use url::Url;

use crate::crawler::coordinator::CrawlContext;
use crate::crawler::fetcher::is_html_content_type;
use crate::url::UrlClass;

/// Runs one worker until the crawl stops or drains
pub(crate) async fn run_worker(ctx: Arc<CrawlContext>, worker_id: usize) {
    tracing::debug!("Worker {} started", worker_id);

    loop {
        if ctx.state.is_stopped() {
            tracing::debug!("Worker {} exiting: page budget exhausted", worker_id);
            break;
        }

        let Some(url) = ctx.frontier.take().await else {
            tracing::debug!("Worker {} exiting: frontier drained", worker_id);
            break;
        };

        // Reserve before fetching; the denial doubles as the global stop signal,
        // so remaining frontier content is abandoned by every worker.
        if !ctx.state.try_reserve_slot() {
            ctx.frontier.task_done();
            tracing::debug!("Worker {} exiting: no budget slot left", worker_id);
            break;
        }

        process_page(&ctx, &url).await;
        ctx.frontier.task_done();

        let crawled = ctx.state.pages_crawled();
        if crawled % 10 == 0 {
            tracing::info!(
                "Progress: {} pages fetched, {} pending, {} admitted",
                crawled,
                ctx.frontier.pending_count(),
                ctx.frontier.admitted_count()
            );
        }
    }
}

/// Fetches one page and feeds its links back into the frontier
///
/// Fetch failures are recorded and skipped; the URL stays admitted so it is never
/// retried. Non-HTML responses consume their slot but yield no links.
async fn process_page(ctx: &CrawlContext, url: &str) {
    tracing::debug!("Crawling {}", url);

    let page = match ctx.fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            ctx.fetch_failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!("Fetch failed: {}", e);
            return;
        }
    };

    if !is_html_content_type(&page.content_type) {
        tracing::debug!(
            "No link extraction for {} (content-type '{}')",
            url,
            page.content_type
        );
        return;
    }

    // Resolve links against the address that actually served the content
    let Ok(base) = Url::parse(&page.final_url).or_else(|_| Url::parse(url)) else {
        tracing::warn!("Unusable base URL for {}", url);
        return;
    };

    for href in ctx.extractor.extract_links(&page.body) {
        match ctx.classifier.classify(&href, &base) {
            UrlClass::SameSite(link) => {
                if link.path().ends_with(".js") {
                    let newly_seen = ctx.scripts.lock().unwrap().insert(link.to_string());
                    if newly_seen {
                        tracing::info!("Found JS file: {}", link);
                    }
                } else if ctx.frontier.try_admit(link.as_str()) {
                    tracing::trace!("Admitted {}", link);
                }
            }
            UrlClass::CrossSite => tracing::trace!("Dropping cross-site link {}", href),
            UrlClass::NonHttp => tracing::trace!("Dropping non-http link {}", href),
            UrlClass::Invalid => tracing::debug!("Ignoring malformed link '{}'", href),
        }
    }
}
