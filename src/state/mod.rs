//! State module for tracking crawl progress
//!
//! This module provides the shared counters and flags that coordinate the worker
//! pool: how many pages have been fetched, whether the page budget is exhausted,
//! and the stop signal derived from it.

mod crawl_state;

pub use crawl_state::CrawlState;
