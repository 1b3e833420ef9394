// src/report.rs
// =============================================================================
// Everything the user gets to see about a crawl.
//
// - BrokenLink: one failed page, with the page that linked to it
// - CrawlReport: what a crawl run returns
// - print_attempt: the colored "Testing <url> -> OK" line per fetch
// - print_table / write_csv / to_json: the final report in its three forms
// - write_report_if_broken: the CSV file, only when something is broken
//
// The CSV has the header `Origin,Target,Error` and one row per broken link,
// in the order the crawler found them.
// =============================================================================

use crate::error::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// A link that could not be followed
//
// The serde renames give the CSV its column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// The page the link was found on
    #[serde(rename = "Origin")]
    pub origin: String,
    /// The URL that failed
    #[serde(rename = "Target")]
    pub target: String,
    /// Why it failed, e.g. "Fail: 404 Not Found"
    #[serde(rename = "Error")]
    pub error_message: String,
}

// The result of one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Broken links, in the order they were found
    pub broken: Vec<BrokenLink>,
    /// How many distinct pages were requested
    pub pages_fetched: usize,
    /// True if --max-pages stopped the crawl before it ran out of links
    pub truncated: bool,
}

impl CrawlReport {
    pub fn has_broken_links(&self) -> bool {
        !self.broken.is_empty()
    }
}

// Prints one line per fetch attempt
//
//   Testing http://example.com/ -> OK
//   Testing http://example.com/missing -> Fail: 404 Not Found
pub fn print_attempt(url: &str, failure: Option<&str>) {
    match failure {
        None => println!("Testing {} -> {}", url, "OK".green()),
        Some(message) => println!("Testing {} -> {}", url, message.red()),
    }
}

// Prints the line for a page that redirected off the crawl's host
pub fn print_off_host_redirect(url: &str, location: &str) {
    println!(
        "Testing {} -> {}",
        url,
        format!("Redirects to {} (other host, not followed)", location).yellow()
    );
}

// Writes the report as CSV to any writer
pub fn write_csv_to<W: Write>(writer: W, broken: &[BrokenLink]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if broken.is_empty() {
        // serialize() only emits the header together with the first row
        csv_writer.write_record(["Origin", "Target", "Error"])?;
    }
    for link in broken {
        csv_writer.serialize(link)?;
    }
    csv_writer.flush()?;
    Ok(())
}

// Writes the report to a CSV file, replacing it if it exists
pub fn write_csv(path: &Path, broken: &[BrokenLink]) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(file, broken)
}

// Writes the CSV report to `path` only if the crawl found broken links
//
// Returns whether a file was written. A clean crawl leaves `path` alone, so
// an old report from a previous run is not overwritten with an empty one.
pub fn write_report_if_broken(path: &Path, report: &CrawlReport) -> Result<bool> {
    if !report.has_broken_links() {
        return Ok(false);
    }
    write_csv(path, &report.broken)?;
    Ok(true)
}

pub fn to_json(broken: &[BrokenLink]) -> Result<String> {
    Ok(serde_json::to_string_pretty(broken)?)
}

// Prints the broken links as a human-readable table
pub fn print_table(report: &CrawlReport) {
    if report.broken.is_empty() {
        println!("{} No broken links found", "✓".green().bold());
    } else {
        println!("{:<50} {:<50} {}", "ORIGIN", "TARGET", "ERROR");
        println!("{}", "=".repeat(130));

        for link in &report.broken {
            println!(
                "{:<50} {:<50} {}",
                truncate(&link.origin, 50),
                truncate(&link.target, 50),
                link.error_message.red()
            );
        }
        println!();
    }

    println!("📊 Summary:");
    println!("   📋 Pages fetched: {}", report.pages_fetched);
    println!("   ❌ Broken: {}", report.broken.len());
    if report.truncated {
        println!("   {} Crawl stopped early at the page limit", "⚠".yellow());
    }
}

// Shortens a URL for display, keeping it within `width` characters
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
