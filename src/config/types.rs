use std::path::PathBuf;

/// Configuration for a crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The URL to start crawling from
    pub start_url: String,

    /// Maximum number of pages to fetch; -1 means unlimited
    pub max_pages: i64,

    /// Number of concurrent worker tasks
    pub num_workers: usize,

    /// Where to write the discovered URL list; stdout when absent
    pub output_file: Option<PathBuf>,
}

impl CrawlConfig {
    /// Creates a configuration with the default worker count and no page budget
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            max_pages: -1,
            num_workers: 5,
            output_file: None,
        }
    }
}
