// src/crawl/resolve.rs
// =============================================================================
// Turns an href found on a page into an absolute URL.
//
// Resolution follows RFC 3986, which is what url::Url::join implements:
//   base = "http://example.com/a/b/"
//   href = "../z"                 -> "http://example.com/a/z"
//   href = "/about"               -> "http://example.com/about"
//   href = "//cdn.example.com/x"  -> "http://cdn.example.com/x"
//   href = "#top"                 -> "http://example.com/a/b/"
//
// The fragment is always dropped: it never reaches the server, so page#a and
// page#b are the same page as far as the visited set is concerned.
// =============================================================================

use crate::error::ResolveError;
use url::Url;

/// Resolves `href` against the URL string of the page it was found on
pub fn resolve(href: &str, base: &str) -> Result<Url, ResolveError> {
    let base_url = Url::parse(base).map_err(|source| ResolveError::MalformedBase {
        base: base.to_string(),
        source,
    })?;
    resolve_against(href, &base_url)
}

/// Same as [`resolve`], with a base that is already parsed
pub fn resolve_against(href: &str, base: &Url) -> Result<Url, ResolveError> {
    // An empty href points back at the page itself. Treat it as no link at all
    // rather than as a target
    let href = href.trim();
    if href.is_empty() {
        return Err(ResolveError::Empty);
    }

    let mut absolute = base.join(href).map_err(|source| ResolveError::MalformedHref {
        href: href.to_string(),
        source,
    })?;
    absolute.set_fragment(None);
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(href: &str, base: &str) -> String {
        resolve(href, base).unwrap().to_string()
    }

    #[test]
    fn test_root_relative_link() {
        assert_eq!(resolved("/about", "http://example.com/x/y"), "http://example.com/about");
    }

    #[test]
    fn test_parent_relative_link() {
        assert_eq!(resolved("../z", "http://example.com/a/b/"), "http://example.com/a/z");
    }

    #[test]
    fn test_document_relative_link() {
        assert_eq!(resolved("c", "http://example.com/a/b"), "http://example.com/a/c");
    }

    #[test]
    fn test_protocol_relative_link() {
        assert_eq!(
            resolved("//cdn.example.com/lib.js", "https://example.com/"),
            "https://cdn.example.com/lib.js"
        );
    }

    #[test]
    fn test_absolute_link_is_normalized() {
        assert_eq!(resolved("HTTP://Other.COM", "http://example.com/"), "http://other.com/");
        assert_eq!(resolved("http://example.com:80/x", "https://a.com/"), "http://example.com/x");
    }

    #[test]
    fn test_fragment_is_dropped() {
        assert_eq!(resolved("#top", "http://example.com/page"), "http://example.com/page");
        assert_eq!(
            resolved("/docs#install", "http://example.com/page"),
            "http://example.com/docs"
        );
    }

    #[test]
    fn test_query_is_kept() {
        assert_eq!(
            resolved("?page=2", "http://example.com/list?page=1"),
            "http://example.com/list?page=2"
        );
    }

    #[test]
    fn test_malformed_href_is_invalid() {
        let result = resolve("http://[::1", "http://example.com/");
        assert!(matches!(result, Err(ResolveError::MalformedHref { .. })));
    }

    #[test]
    fn test_malformed_base_is_invalid() {
        let result = resolve("/about", "not a url");
        assert!(matches!(result, Err(ResolveError::MalformedBase { .. })));
    }

    #[test]
    fn test_empty_href_is_invalid() {
        assert_eq!(resolve("", "http://example.com/"), Err(ResolveError::Empty));
        assert_eq!(resolve("   ", "http://example.com/"), Err(ResolveError::Empty));
    }

    #[test]
    fn test_other_schemes_resolve_without_host() {
        // Not our job to filter these, but they must not panic
        let mailto = resolve("mailto:someone@example.com", "http://example.com/").unwrap();
        assert_eq!(mailto.scheme(), "mailto");
        assert!(mailto.host_str().is_none());
    }
}
