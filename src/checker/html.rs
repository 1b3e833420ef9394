// src/checker/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever never fails: broken markup is repaired the way a browser would,
// and a body that isn't HTML at all just produces a document with no <a>
// tags. So extraction is best effort and can't return an error.
//
// The hrefs come back exactly as written in the page. Turning them into
// absolute URLs is the resolver's job (src/crawl/resolve.rs).
// =============================================================================

use scraper::{Html, Selector};

// Extracts the href value of every <a> tag, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs", "#top"]
pub fn extract_links(html: &str) -> Vec<String> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);

    // The selector is a constant, so parsing can only fail if we typo it
    let selector = Selector::parse("a[href]").expect("a[href] is a valid selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does "a[href]" select?
//    - Every <a> element that has an href attribute, whatever its value
//    - <a name="top"> without an href is skipped
//
// 2. Why return Vec<String> instead of Vec<&str>?
//    - The strings borrow from `document`, which is dropped when we return
//    - Owned Strings outlive the parsed HTML
//
// 3. What do filter_map and map(str::to_string) do?
//    - filter_map keeps only the Some(...) values: elements with an href
//    - str::to_string is a function path, the same as |s| s.to_string()
// -----------------------------------------------------------------------------
