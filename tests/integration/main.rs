//! Integration test harness for the crawler

mod crawl_tests;
