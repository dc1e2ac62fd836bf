use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Shared crawl progress: pages fetched, page budget, and the stop flag
///
/// All workers share one `CrawlState`. The budget is enforced by reserving a slot
/// *before* fetching: without the up-front reservation, N workers could each observe
/// `pages_crawled < max_pages` and all proceed, overshooting the limit. The first
/// worker to be denied a slot flips the stop flag for everyone, so no separate
/// polling is needed.
///
/// Invariants: `stopped` never reverts to false, and `pages_crawled` never exceeds
/// the budget when one is set.
#[derive(Debug)]
pub struct CrawlState {
    pages_crawled: AtomicUsize,
    max_pages: Option<usize>,
    stopped: AtomicBool,
}

impl CrawlState {
    /// Creates crawl state with the given page budget
    ///
    /// A negative `max_pages` means unlimited, matching the CLI's `-1` convention.
    pub fn new(max_pages: i64) -> Self {
        let max_pages = if max_pages < 0 {
            None
        } else {
            Some(max_pages as usize)
        };

        Self {
            pages_crawled: AtomicUsize::new(0),
            max_pages,
            stopped: AtomicBool::new(false),
        }
    }

    /// Atomically claims permission to fetch one more page
    ///
    /// Returns true and counts the page when the budget allows it. Returns false
    /// once the budget is exhausted, setting the stop flag as a side effect so
    /// every other worker winds down without fetching further.
    pub fn try_reserve_slot(&self) -> bool {
        let Some(max) = self.max_pages else {
            self.pages_crawled.fetch_add(1, Ordering::SeqCst);
            return true;
        };

        // SeqCst keeps the counter and the stop flag in one total order across
        // workers; see the completion checks this pairs with in the frontier.
        let mut crawled = self.pages_crawled.load(Ordering::SeqCst);
        loop {
            if crawled >= max {
                self.stopped.store(true, Ordering::SeqCst);
                return false;
            }
            match self.pages_crawled.compare_exchange(
                crawled,
                crawled + 1,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(actual) => crawled = actual,
            }
        }
    }

    /// Returns true once the page budget has been exhausted
    ///
    /// Workers check this to exit early without reserving a slot.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Number of pages fetched (slots reserved) so far
    pub fn pages_crawled(&self) -> usize {
        self.pages_crawled.load(Ordering::SeqCst)
    }
}
