/// Checks whether a host belongs to the crawl's root domain
///
/// A host is same-site when it equals the root host exactly or is a subdomain of it.
/// The subdomain check requires a `.` boundary: `sub.a.test` matches root `a.test`,
/// `evila.test` does not.
///
/// Both arguments are expected lowercase (the `url` parser lowercases hosts).
///
/// # Examples
///
/// ```
/// use websweep::url::is_same_site;
///
/// assert!(is_same_site("a.test", "a.test"));
/// assert!(is_same_site("sub.a.test", "a.test"));
/// assert!(!is_same_site("evila.test", "a.test"));
/// ```
pub fn is_same_site(host: &str, root_host: &str) -> bool {
    host == root_host || host.ends_with(&format!(".{}", root_host))
}
