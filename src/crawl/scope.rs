// src/crawl/scope.rs
// =============================================================================
// The same-host scope filter.
//
// A crawl never leaves the host it started on. Links to other hosts are still
// discovered (they show up in debug logs) but never fetched.
//
// "Same host" means the same host name and the same explicit port. The url
// crate already lowercases host names and drops default ports, so
// http://Example.com:80/ and https://example.com/ are both in scope for a
// crawl seeded at http://example.com/, while http://example.com:8080/ is not.
//
// The scope ignores the scheme, but the visited set does not: a site that
// links to both http://example.com/a and https://example.com/a gets /a
// fetched twice, once per scheme. That is deliberate. The two can really
// differ (a broken TLS setup, an http-only redirect), and each is reported
// separately.
// =============================================================================

use crate::error::ScopeError;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostScope {
    host: String,
    port: Option<u16>,
}

impl HostScope {
    pub fn from_seed(seed: &Url) -> Result<Self, ScopeError> {
        let host = seed
            .host_str()
            .ok_or_else(|| ScopeError::NoHost(seed.to_string()))?;
        Ok(Self {
            host: host.to_string(),
            port: seed.port(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// True if `url` may be fetched during this crawl
    pub fn contains(&self, url: &Url) -> bool {
        is_crawlable_scheme(url.scheme())
            && url.host_str() == Some(self.host.as_str())
            && url.port() == self.port
    }
}

pub(crate) fn is_crawlable_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(seed: &str) -> HostScope {
        HostScope::from_seed(&Url::parse(seed).unwrap()).unwrap()
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_same_host_is_in_scope() {
        let scope = scope("http://example.com/start");
        assert!(scope.contains(&url("http://example.com/other/page")));
        assert!(scope.contains(&url("http://EXAMPLE.com/")));
        assert!(scope.contains(&url("https://example.com/secure")));
    }

    #[test]
    fn test_other_host_is_out_of_scope() {
        let scope = scope("http://example.com/");
        assert!(!scope.contains(&url("http://other-host.com/x")));
        assert!(!scope.contains(&url("http://www.example.com/")));
        assert!(!scope.contains(&url("http://sub.example.com/")));
    }

    #[test]
    fn test_port_is_part_of_the_scope() {
        let scope = scope("http://127.0.0.1:8080/");
        assert!(scope.contains(&url("http://127.0.0.1:8080/a")));
        assert!(!scope.contains(&url("http://127.0.0.1:9090/a")));
        assert!(!scope.contains(&url("http://127.0.0.1/a")));
    }

    #[test]
    fn test_non_http_schemes_are_out_of_scope() {
        let scope = scope("http://example.com/");
        assert!(!scope.contains(&url("ftp://example.com/file")));
        assert!(!scope.contains(&url("mailto:admin@example.com")));
    }

    #[test]
    fn test_seed_without_host_is_rejected() {
        let result = HostScope::from_seed(&url("file:///tmp/index.html"));
        assert!(matches!(result, Err(ScopeError::NoHost(_))));
    }
}
