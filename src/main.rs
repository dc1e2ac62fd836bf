//! Websweep main entry point
//!
//! This is the command-line interface for the websweep same-site URL crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use websweep::config::CrawlConfig;
use websweep::crawler::Coordinator;
use websweep::output::{print_report, write_url_list};

/// Websweep: concurrent same-site URL discovery
///
/// Crawls a website from a seed address with a pool of concurrent workers and
/// reports every reachable URL on the same domain, subdomains included.
#[derive(Parser, Debug)]
#[command(name = "websweep")]
#[command(version)]
#[command(about = "Discover every same-site URL reachable from a seed address", long_about = None)]
struct Cli {
    /// The URL to start crawling from
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Maximum number of pages to fetch (-1 for unlimited)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    max_pages: i64,

    /// Number of concurrent workers
    #[arg(long, default_value_t = 5)]
    num_workers: usize,

    /// Write the discovered URLs to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    output_file: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = CrawlConfig {
        start_url: cli.start_url,
        max_pages: cli.max_pages,
        num_workers: cli.num_workers,
        output_file: cli.output_file,
    };

    // Startup failures (bad seed URL, zero workers) surface here, before any
    // crawling begins, and exit non-zero.
    let mut coordinator = Coordinator::new(config.clone())?;
    let report = coordinator.run().await?;

    match &config.output_file {
        Some(path) => {
            write_url_list(&report, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Saved {} URLs to {}", report.pages.len(), path.display());
            if !report.scripts.is_empty() {
                println!("Found {} JavaScript files", report.scripts.len());
            }
        }
        None => print_report(&report),
    }

    if report.budget_exhausted {
        tracing::info!("Stopped at the page budget; the site may have more pages");
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("websweep=info,warn"),
            1 => EnvFilter::new("websweep=debug,info"),
            2 => EnvFilter::new("websweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
