//! HTML link extraction
//!
//! This module defines the parse capability the workers depend on: given page
//! content, yield the raw link strings found in it. Resolution against the page's
//! base URL and same-site filtering belong to the classifier, not here.

use scraper::{Html, Selector};

/// The injected link extraction capability
///
/// Returns raw href/src values exactly as they appear in the markup; relative
/// links, fragments and exotic schemes are all passed through for the classifier
/// to sort out.
pub trait LinkExtractor: Send + Sync {
    fn extract_links(&self, html: &str) -> Vec<String>;
}

/// Production extractor built on `scraper`
///
/// Collects `<a href>` values plus `<script src>` values; the latter feed the
/// JavaScript file log rather than the page frontier.
#[derive(Debug, Default, Clone)]
pub struct HtmlLinkExtractor;

impl HtmlLinkExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        if let Ok(selector) = Selector::parse("a[href]") {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    links.push(href.to_string());
                }
            }
        }

        if let Ok(selector) = Selector::parse("script[src]") {
            for element in document.select(&selector) {
                if let Some(src) = element.value().attr("src") {
                    links.push(src.to_string());
                }
            }
        }

        links
    }
}
