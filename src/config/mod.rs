//! Configuration module for websweep
//!
//! A crawl run is configured entirely from the command line; this module holds
//! the typed configuration and its startup validation.

mod types;
mod validation;

pub use types::CrawlConfig;
pub use validation::validate;
