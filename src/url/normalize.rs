use url::Url;

/// Normalizes a URL to the form the frontier deduplicates on
///
/// # Normalization Steps
///
/// 1. Remove the fragment (everything after #)
/// 2. Remove the query string
/// 3. Keep scheme, host, port and path as parsed
///
/// The `url` parser has already lowercased the host and dropped default ports, so
/// two spellings of the same page collapse to one string. Equality of normalized
/// strings is the crawl's definition of "same URL".
///
/// # Examples
///
/// ```
/// use url::Url;
/// use websweep::url::normalize_url;
///
/// let url = Url::parse("https://EXAMPLE.COM/page?utm_source=x#top").unwrap();
/// assert_eq!(normalize_url(url).as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(mut url: Url) -> Url {
    url.set_fragment(None);
    url.set_query(None);
    url
}
