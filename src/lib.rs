//! Websweep: concurrent same-site URL discovery
//!
//! This crate implements a web crawler that starts from a seed address, discovers
//! every reachable URL on the same domain (subdomains included), and reports the
//! complete set of discovered pages.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for websweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Worker task failed: {0}")]
    WorkerPanic(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// All of these are startup failures: they are surfaced to the caller before any
/// crawling begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid start URL '{url}': {reason}")]
    InvalidStartUrl { url: String, reason: String },

    #[error("Number of workers must be at least 1")]
    InvalidWorkerCount,

    #[error("max-pages must be -1 (unlimited) or >= 0, got {0}")]
    InvalidMaxPages(i64),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Unsupported URL scheme: {0}")]
    InvalidScheme(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Result type alias for websweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, Coordinator, CrawlReport};
pub use state::CrawlState;
pub use url::{is_same_site, normalize_url, UrlClass, UrlClassifier};
