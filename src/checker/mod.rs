// src/checker/mod.rs
// =============================================================================
// This module contains the two leaf capabilities the crawler relies on.
//
// Submodules:
// - http: Fetches a page and classifies the response
// - html: Extracts href values from a page body
//
// Neither keeps any crawl state: the visited set and the report live in
// src/crawl/. The HTTP client does take the crawl's HostScope, so its
// redirect policy never leaves the host.
// =============================================================================

mod html;
mod http;

pub use html::extract_links;
pub use http::{build_client, fetch_page, FetchOutcome};
