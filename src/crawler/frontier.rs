//! The crawl frontier: pending URLs, the dedup set, and drain detection
//!
//! The frontier is the single point of coordination between workers:
//! - `try_admit` is the only deduplication mechanism in the crawl; a URL enters the
//!   admitted set at most once, at the moment it is first enqueued
//! - `take` hands out pending URLs in FIFO order and decides when the crawl is
//!   drained
//! - `task_done` closes the window during which a worker may still produce new links
//!
//! A worker that finds the queue empty must not conclude the crawl is over: another
//! worker mid-fetch may be about to enqueue links. The frontier therefore counts
//! workers "active" between a successful `take` and the matching `task_done`, and
//! only reports drain when the queue is empty with zero active workers.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct FrontierInner {
    /// URLs waiting to be fetched, FIFO
    queue: VecDeque<String>,
    /// Every URL ever admitted (visited-or-pending); this is the result set
    admitted: HashSet<String>,
    /// Workers between `take` and `task_done`
    active: usize,
}

/// Thread-safe work queue of pending URLs plus the set of all URLs ever admitted
#[derive(Debug, Default)]
pub struct Frontier {
    inner: Mutex<FrontierInner>,
    wake: Notify,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically admits a URL if it has never been seen before
    ///
    /// Returns true and enqueues the URL when it is new; returns false with no other
    /// effect when it was already admitted. The check-and-insert happens under one
    /// lock, so concurrent workers discovering the same link admit it exactly once.
    pub fn try_admit(&self, url: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if !inner.admitted.insert(url.to_string()) {
            return false;
        }
        inner.queue.push_back(url.to_string());
        drop(inner);

        self.wake.notify_one();
        true
    }

    /// Pops the next pending URL in FIFO order, waiting for more work if needed
    ///
    /// Returns `None` only when the frontier is permanently drained: the queue is
    /// empty and no worker is active, so nobody can produce more work. While other
    /// workers are active, an empty queue parks the caller until either new work is
    /// admitted or the last active worker finishes.
    ///
    /// A successful take marks the caller active; it must call [`task_done`] once
    /// its link admissions for that URL are complete.
    ///
    /// [`task_done`]: Frontier::task_done
    pub async fn take(&self) -> Option<String> {
        loop {
            // Register for a wakeup before inspecting the queue; anything admitted
            // after this point will wake us even if it lands between the emptiness
            // check and the await below.
            let notified = self.wake.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut inner = self.inner.lock().unwrap();
                if let Some(url) = inner.queue.pop_front() {
                    inner.active += 1;
                    return Some(url);
                }
                if inner.active == 0 {
                    drop(inner);
                    // Drained: wake every parked peer so they observe it too
                    self.wake.notify_waiters();
                    return None;
                }
            }

            notified.await;
        }
    }

    /// Marks the caller's current work item complete
    ///
    /// Must be called exactly once per successful `take`, after any child links have
    /// been admitted. When the last active worker finishes with the queue empty, all
    /// parked workers are woken to observe the drain.
    pub fn task_done(&self) {
        let mut inner = self.inner.lock().unwrap();
        debug_assert!(inner.active > 0, "task_done without a matching take");
        inner.active = inner.active.saturating_sub(1);
        if inner.active == 0 && inner.queue.is_empty() {
            drop(inner);
            self.wake.notify_waiters();
        }
    }

    /// Number of URLs waiting to be fetched (observability only)
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    /// Number of workers currently holding a taken URL (observability only)
    pub fn active_count(&self) -> usize {
        self.inner.lock().unwrap().active
    }

    /// Total number of URLs ever admitted
    pub fn admitted_count(&self) -> usize {
        self.inner.lock().unwrap().admitted.len()
    }

    /// Sorted snapshot of every URL ever admitted
    pub fn admitted_urls(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        let mut urls: Vec<String> = inner.admitted.iter().cloned().collect();
        urls.sort();
        urls
    }
}
