//! Output module for reporting crawl results
//!
//! The result set is written one URL per line, either to a file or to stdout.
//! JavaScript files discovered along the way are reported in a separate stdout
//! section; the output file itself stays strictly one page URL per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::crawler::CrawlReport;
use crate::Result;

/// Writes the discovered page URLs to a file, one per line
///
/// The list is already sorted by the coordinator, so the output is stable for a
/// given run.
pub fn write_url_list(report: &CrawlReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for url in &report.pages {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()?;

    Ok(())
}

/// Prints the crawl results to stdout
pub fn print_report(report: &CrawlReport) {
    println!("All found URLs:");
    for url in &report.pages {
        println!("{}", url);
    }

    if !report.scripts.is_empty() {
        println!("\nFound JavaScript files:");
        for url in &report.scripts {
            println!("{}", url);
        }
    }
}
