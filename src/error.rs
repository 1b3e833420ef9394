// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// main.rs uses anyhow for glue code, but the pieces underneath return typed
// errors so callers can decide what to do with each case:
// - ResolveError: a link could not be turned into an absolute URL (skip it)
// - ScopeError: the seed URL cannot define a host scope (fatal)
// - CrawlError: anything that stops a run or its report from being produced
// =============================================================================

use thiserror::Error;

// Why resolving an href failed
//
// None of these are ever reported as broken links. The crawler just drops
// the href and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The href was empty or only whitespace
    #[error("empty link reference")]
    Empty,

    /// The href could not be parsed as a URI reference
    #[error("malformed link {href:?}: {source}")]
    MalformedHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// The page URL we resolve against could not be parsed
    #[error("malformed base URL {base:?}: {source}")]
    MalformedBase {
        base: String,
        #[source]
        source: url::ParseError,
    },
}

// Why a seed URL cannot be used to start a crawl
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("invalid website URL {input:?}: {source}")]
    InvalidSeed {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {0:?}, only http and https can be crawled")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    NoHost(String),
}

// Errors that abort a run or its report
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Scope(#[from] ScopeError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
