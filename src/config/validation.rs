use url::Url;

use crate::config::types::CrawlConfig;
use crate::url::normalize_url;
use crate::ConfigError;

/// Validates a crawl configuration and returns the normalized seed URL
///
/// All failures here are fatal startup errors: they are reported before any
/// crawling begins.
pub fn validate(config: &CrawlConfig) -> Result<Url, ConfigError> {
    if config.num_workers < 1 {
        return Err(ConfigError::InvalidWorkerCount);
    }

    if config.max_pages < -1 {
        return Err(ConfigError::InvalidMaxPages(config.max_pages));
    }

    let seed = Url::parse(&config.start_url).map_err(|e| ConfigError::InvalidStartUrl {
        url: config.start_url.clone(),
        reason: e.to_string(),
    })?;

    if seed.scheme() != "http" && seed.scheme() != "https" {
        return Err(ConfigError::InvalidStartUrl {
            url: config.start_url.clone(),
            reason: format!("unsupported scheme '{}'", seed.scheme()),
        });
    }

    if seed.host_str().is_none() {
        return Err(ConfigError::InvalidStartUrl {
            url: config.start_url.clone(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(normalize_url(seed))
}
