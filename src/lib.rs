// src/lib.rs
// =============================================================================
// link-warden: crawls one website and reports its broken links.
//
// The binary (src/main.rs) is a thin wrapper around this library:
// - crawl: the Crawler, URL resolution and the same-host scope
// - checker: fetching pages and extracting their links
// - report: broken link records and how they are printed and saved
// - cli / config: command-line flags and the settings built from them
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod error;
pub mod report;

pub use config::CrawlConfig;
pub use crawl::{parse_seed, Crawler};
pub use error::{CrawlError, ResolveError, ScopeError};
pub use report::{BrokenLink, CrawlReport};
