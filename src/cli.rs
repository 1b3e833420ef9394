// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool takes a single required input, the website to crawl, plus a few
// options that tune the crawl and the report. `--version` comes for free from
// the #[command(version)] attribute and prints the version instead of
// crawling.
// =============================================================================

use crate::config::DEFAULT_TIMEOUT_SECS;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-warden",
    version,
    about = "Crawl a website and report its broken links",
    long_about = "link-warden starts at a URL, follows every link that stays on the same host, \
                  and requests each page once. Pages that fail to load or answer with anything \
                  other than 200 OK are written to a CSV report."
)]
pub struct Cli {
    /// Website URL or host to crawl (e.g., http://www.example.com)
    ///
    /// A bare host such as www.example.com is crawled over http://
    #[arg(short, long, value_name = "URL")]
    pub website: String,

    /// Timeout for each request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Accept invalid TLS certificates (self-signed, expired, wrong host)
    ///
    /// Off by default. With this flag the crawler can no longer tell who it
    /// is talking to, so only use it against hosts you control.
    #[arg(long)]
    pub insecure: bool,

    /// Stop after fetching this many pages
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Where to write the CSV report (only written if broken links are found)
    #[arg(short, long, value_name = "PATH", default_value = "result.csv")]
    pub output: PathBuf,

    /// Also print the broken links as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Where do the flag names come from?
//    - clap turns field names into kebab-case flags: max_pages -> --max-pages
//    - #[arg(short)] adds the one-letter form from the first letter: -w, -o
//
// 2. What is ArgAction::Count?
//    - Counts how many times a flag appears, so -vv gives verbose == 2
//
// 3. Why is max_pages an Option<usize>?
//    - No default value means "no limit"
//    - None if the flag is missing, Some(n) if the user passed --max-pages n
//
// 4. Why doesn't `--version` need a field?
//    - #[command(version)] makes clap print the Cargo.toml version and exit
//      before checking that --website was given
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_is_required() {
        let result = Cli::try_parse_from(["link-warden"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["link-warden", "-w", "example.com"]);
        assert_eq!(cli.website, "example.com");
        assert_eq!(cli.timeout, 10);
        assert!(!cli.insecure);
        assert_eq!(cli.max_pages, None);
        assert_eq!(cli.output, PathBuf::from("result.csv"));
        assert!(!cli.json);
    }

    #[test]
    fn test_version_flag_short_circuits() {
        let err = Cli::try_parse_from(["link-warden", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["link-warden", "-w", "example.com", "-q", "-v"]);
        assert!(result.is_err());
    }
}
