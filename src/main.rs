// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (--version exits right here)
// 2. Set up logging
// 3. Crawl the website
// 4. Print the summary and write the CSV report if anything is broken
// 5. Exit with proper code (0 = no broken links, 1 = broken links, 2 = error)
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use link_warden::cli::Cli;
use link_warden::report::{print_table, to_json, write_report_if_broken};
use link_warden::{parse_seed, CrawlConfig, Crawler};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// One request at a time, so a single-threaded runtime is all we need
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err   = bad input or the report could not be written
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let start = Instant::now();

    let seed = parse_seed(&cli.website).context("cannot crawl the given website")?;
    let config = CrawlConfig::from(&cli);

    if config.accept_invalid_certs {
        warn!("TLS certificate verification is disabled (--insecure)");
    }

    println!("🔍 Crawling {}", seed);

    let crawler = Crawler::new(seed, &config).context("failed to set up the crawler")?;
    let report = crawler.run().await;

    println!();
    println!("Task completed");
    println!("{:.2}s elapsed", start.elapsed().as_secs_f64());
    println!();

    print_table(&report);

    let written = write_report_if_broken(&cli.output, &report)
        .with_context(|| format!("failed to write report to {}", cli.output.display()))?;
    if written {
        info!(path = %cli.output.display(), rows = report.broken.len(), "report written");
        println!("📄 Report written to {}", cli.output.display());
    }

    if cli.json {
        println!("{}", to_json(&report.broken)?);
    }

    Ok(if report.has_broken_links() { 1 } else { 0 })
}

// Sets up the tracing subscriber based on -v / -q
//
// RUST_LOG still wins if it is set.
fn setup_logging(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "link_warden=info,warn",
            1 => "link_warden=debug,info",
            _ => "link_warden=trace,debug",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
