//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the real
//! HTTP fetcher through the full crawl cycle end-to-end.

use websweep::config::CrawlConfig;
use websweep::crawler::Coordinator;
use websweep::output::write_url_list;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a crawl configuration rooted at the mock server
fn create_test_config(base_url: &str, max_pages: i64, num_workers: usize) -> CrawlConfig {
    CrawlConfig {
        start_url: format!("{}/", base_url),
        max_pages,
        num_workers,
        output_file: None,
    }
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, route: &str, body: &str, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            // `set_body_raw` sets the body and its Content-Type together; using
            // `set_body_string` would force Content-Type to text/plain and clobber
            // any `insert_header("content-type", ...)` applied afterward.
            ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html"),
        )
        .expect(expected_hits)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_discovers_all_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Index links to both pages; page1 links to page2 again so the dedup
    // invariant is exercised (each page must still be fetched exactly once).
    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/page1">One</a><a href="/page2">Two</a></body></html>"#,
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page1",
        r#"<html><body><a href="/page2">Two again</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/page2", r#"<html><body>Done</body></html>"#, 1).await;

    let config = create_test_config(&base_url, -1, 5);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.pages.len(), 3);
    assert!(report.pages.contains(&format!("{}/", base_url)));
    assert!(report.pages.contains(&format!("{}/page1", base_url)));
    assert!(report.pages.contains(&format!("{}/page2", base_url)));
    assert_eq!(report.pages_fetched, 3);
    assert_eq!(report.fetch_failures, 0);
    assert!(!report.budget_exhausted);

    // Wiremock verifies the .expect(1) counts when the server drops
}

#[tokio::test]
async fn test_fetch_failure_does_not_abort_the_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/broken">Broken</a><a href="/ok">Ok</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/ok", r#"<html><body>Fine</body></html>"#, 1).await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // attempted once, never retried
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, -1, 3);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.fetch_failures, 1);
    assert_eq!(report.pages_fetched, 3);
    // The failed URL stays in the result set: it was admitted, just not parsable
    assert!(report.pages.contains(&format!("{}/broken", base_url)));
    assert!(report.pages.contains(&format!("{}/ok", base_url)));
}

#[tokio::test]
async fn test_budget_stops_the_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="/p{}">p{}</a>"#, i, i))
        .collect();
    mount_page(
        &mock_server,
        "/",
        &format!("<html><body>{}</body></html>", links),
        1,
    )
    .await;
    for i in 1..=5 {
        // At most one page beyond the index fits in the budget
        Mock::given(method("GET"))
            .and(path(format!("/p{}", i)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body>leaf</body></html>")
                    .insert_header("content-type", "text/html"),
            )
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(&base_url, 2, 4);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.pages_fetched, 2);
    assert!(report.budget_exhausted);

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording is on");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_non_html_response_yields_no_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/data.json">Data</a></body></html>"#,
        1,
    )
    .await;

    // The JSON body smuggles an anchor; it must not be parsed for links
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"html": "<a href=\"/hidden\">x</a>"}"#)
                .insert_header("content-type", "application/json"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, -1, 3);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.pages.len(), 2);
    assert!(!report.pages.contains(&format!("{}/hidden", base_url)));
    assert_eq!(report.pages_fetched, 2);
}

#[tokio::test]
async fn test_script_sources_are_logged_not_fetched() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><script src="/static/app.js"></script></head><body></body></html>"#,
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/static/app.js"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&base_url, -1, 2);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.scripts, vec![format!("{}/static/app.js", base_url)]);
    assert_eq!(report.pages.len(), 1);
}

#[tokio::test]
async fn test_output_file_roundtrip() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/about">About</a></body></html>"#,
        1,
    )
    .await;
    mount_page(&mock_server, "/about", r#"<html><body>About</body></html>"#, 1).await;

    let config = create_test_config(&base_url, -1, 2);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("urls.txt");
    write_url_list(&report, &out_path).expect("write failed");

    let contents = std::fs::read_to_string(&out_path).expect("read failed");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), report.pages.len());
    for (line, url) in lines.iter().zip(report.pages.iter()) {
        assert_eq!(line, url);
    }
}
