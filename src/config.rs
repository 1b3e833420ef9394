// src/config.rs
// =============================================================================
// Crawl settings.
//
// There is no config file: everything comes from the command line. The CLI
// struct (src/cli.rs) is converted into a CrawlConfig so the crawler never
// depends on clap, and tests can build a config by hand.
// =============================================================================

use crate::cli::Cli;
use std::time::Duration;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of redirects followed for a single fetch
pub const MAX_REDIRECTS: usize = 10;

/// Bodies larger than this are cut off before link extraction
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Timeout for a single GET, connect + body
    pub timeout: Duration,

    /// Skip TLS certificate verification.
    ///
    /// Lets the crawler get through self-signed or internal certificates, at
    /// the cost of not knowing who answered. Only enabled by `--insecure`.
    pub accept_invalid_certs: bool,

    /// Stop after this many pages have been fetched
    pub max_pages: Option<usize>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
            max_pages: None,
            user_agent: default_user_agent(),
        }
    }
}

impl From<&Cli> for CrawlConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            timeout: Duration::from_secs(cli.timeout),
            accept_invalid_certs: cli.insecure,
            max_pages: cli.max_pages,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
