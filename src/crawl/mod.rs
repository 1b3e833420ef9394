// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - resolve: href + page URL -> absolute URL (or a reason to skip it)
// - scope: decides which URLs are on the host we are crawling
// - queue: the Crawler, which walks the site and collects broken links
//
// This file also turns the user's --website value into a seed URL.
// =============================================================================

mod queue;
mod resolve;
mod scope;

pub use queue::Crawler;
pub use resolve::{resolve, resolve_against};
pub use scope::HostScope;

use crate::error::ScopeError;
use scope::is_crawlable_scheme;
use url::Url;

// Parses the --website value into the seed URL
//
// Accepts full URLs and bare hosts:
//   "https://example.com/docs" -> https://example.com/docs
//   "www.example.com"          -> http://www.example.com/
pub fn parse_seed(input: &str) -> Result<Url, ScopeError> {
    let input = input.trim();

    // Without "://" the url crate would read "localhost:8080" as a URL with
    // the scheme "localhost"
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    let mut url = Url::parse(&candidate).map_err(|source| ScopeError::InvalidSeed {
        input: input.to_string(),
        source,
    })?;

    if !is_crawlable_scheme(url.scheme()) {
        return Err(ScopeError::UnsupportedScheme(url.scheme().to_string()));
    }
    if url.host_str().is_none() {
        return Err(ScopeError::NoHost(url.to_string()));
    }

    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_seed() {
        let seed = parse_seed("https://example.com/docs").unwrap();
        assert_eq!(seed.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_bare_host_seed_gets_http() {
        let seed = parse_seed("www.example.com").unwrap();
        assert_eq!(seed.as_str(), "http://www.example.com/");
    }

    #[test]
    fn test_bare_host_with_port_and_path() {
        let seed = parse_seed("localhost:8080/start").unwrap();
        assert_eq!(seed.as_str(), "http://localhost:8080/start");
    }

    #[test]
    fn test_unsupported_scheme_is_rejected() {
        assert_eq!(
            parse_seed("ftp://example.com/"),
            Err(ScopeError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn test_garbage_seed_is_rejected() {
        assert!(matches!(
            parse_seed("http://[::1"),
            Err(ScopeError::InvalidSeed { .. })
        ));
        assert!(parse_seed("").is_err());
    }
}
