//! URL handling module for websweep
//!
//! This module provides URL normalization, same-site matching, and the link
//! classifier that decides which discovered hrefs are eligible for crawling.

mod domain;
mod normalize;

use ::url::Url;

use crate::UrlError;

// Re-export main functions
pub use domain::is_same_site;
pub use normalize::normalize_url;

/// Classification of a raw link discovered on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlClass {
    /// Link stays on the crawl's root domain (or a subdomain of it); carries the
    /// normalized URL that the frontier deduplicates on
    SameSite(Url),
    /// Valid HTTP(S) link pointing at another domain
    CrossSite,
    /// Non-HTTP scheme such as `mailto:`, `javascript:` or `tel:`
    NonHttp,
    /// Malformed or otherwise unusable link
    Invalid,
}

impl UrlClass {
    /// Returns true if the link may be admitted to the frontier
    pub fn is_same_site(&self) -> bool {
        matches!(self, Self::SameSite(_))
    }
}

/// Classifies raw hrefs against the crawl's root domain
///
/// The classifier owns the normalization and domain-matching rules: everything
/// upstream of the frontier's string-equality deduplication. It is constructed once
/// per run from the normalized seed URL.
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    root_host: String,
}

impl UrlClassifier {
    /// Creates a classifier rooted at the given URL's host
    ///
    /// # Errors
    ///
    /// Returns `UrlError::MissingHost` if the URL has no host component.
    pub fn new(root: &Url) -> Result<Self, UrlError> {
        let root_host = root
            .host_str()
            .ok_or(UrlError::MissingHost)?
            .to_lowercase();
        Ok(Self { root_host })
    }

    /// The root host this classifier matches against
    pub fn root_host(&self) -> &str {
        &self.root_host
    }

    /// Classifies a raw href found on the page at `base`
    ///
    /// Relative hrefs are resolved against `base` before classification. Same-site
    /// links come back normalized, ready for frontier admission; everything else is
    /// reported by category so the caller can decide how loudly to drop it.
    pub fn classify(&self, href: &str, base: &Url) -> UrlClass {
        let href = href.trim();
        if href.is_empty() {
            return UrlClass::Invalid;
        }

        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(_) => return UrlClass::Invalid,
        };

        if resolved.scheme() != "http" && resolved.scheme() != "https" {
            return UrlClass::NonHttp;
        }

        let normalized = normalize_url(resolved);
        match normalized.host_str() {
            Some(host) if is_same_site(host, &self.root_host) => UrlClass::SameSite(normalized),
            Some(_) => UrlClass::CrossSite,
            None => UrlClass::Invalid,
        }
    }
}
