// src/checker/http.rs
// =============================================================================
// This module fetches pages and decides whether they are broken.
//
// Key functionality:
// - Builds the one HTTP client a crawl run uses (timeout, redirects, TLS)
// - Issues a GET for a page and keeps the body so links can be extracted
// - Classifies the result: 200, any other status, an off-host redirect, or a
//   transport error
// - Turns reqwest errors into short, human-readable causes
//
// Unlike a plain link checker we can't use HEAD requests here: the crawler
// needs the body of every page to find the next links to follow.
//
// Redirects are followed only while they stay on the crawl's host. A redirect
// that leaves the host is not followed; the 3xx comes back to us and is
// treated like a link to another site: seen, never fetched, never reported.
// =============================================================================

use crate::config::{CrawlConfig, MAX_BODY_BYTES, MAX_REDIRECTS};
use crate::crawl::HostScope;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::redirect::{Action, Attempt, Policy};
use reqwest::{Client, Response, StatusCode};
use std::error::Error as _;
use tracing::debug;
use url::Url;

// The ways a fetch can end
#[derive(Debug)]
pub enum FetchOutcome {
    /// 200 OK, with the response body
    Ok { final_url: Url, body: String },
    /// Any status other than 200. The body is whatever the server sent
    /// (often empty) and is still scanned for links
    HttpStatus {
        status: StatusCode,
        final_url: Url,
        body: String,
    },
    /// The server redirected us to another host, which we don't follow
    OffHostRedirect { status: StatusCode, location: Url },
    /// No response at all: DNS, refused connection, TLS, timeout...
    Transport(reqwest::Error),
}

impl FetchOutcome {
    /// The text stored in the report for a failed fetch, None otherwise
    pub fn failure_message(&self) -> Option<String> {
        match self {
            FetchOutcome::Ok { .. } | FetchOutcome::OffHostRedirect { .. } => None,
            FetchOutcome::HttpStatus { status, .. } => Some(format!("Fail: {}", status)),
            FetchOutcome::Transport(error) => Some(describe_transport_error(error)),
        }
    }

    /// The body to extract links from. Off-host redirects and transport
    /// errors have none
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchOutcome::Ok { body, .. } | FetchOutcome::HttpStatus { body, .. } => Some(body),
            FetchOutcome::OffHostRedirect { .. } | FetchOutcome::Transport(_) => None,
        }
    }

    /// Where the body actually came from, after same-host redirects.
    /// Relative links on the page resolve against this, not the URL we asked for
    pub fn final_url(&self) -> Option<&Url> {
        match self {
            FetchOutcome::Ok { final_url, .. } | FetchOutcome::HttpStatus { final_url, .. } => {
                Some(final_url)
            }
            FetchOutcome::OffHostRedirect { .. } | FetchOutcome::Transport(_) => None,
        }
    }
}

// Builds the HTTP client for a crawl run
//
// The client is created once and reused for every page (connection pooling).
// Its redirect policy only follows hops that stay inside `scope`.
pub fn build_client(config: &CrawlConfig, scope: HostScope) -> Result<Client, reqwest::Error> {
    let policy = Policy::custom(move |attempt| follow_within(&scope, attempt));

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .redirect(policy)
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()
}

fn follow_within(scope: &HostScope, attempt: Attempt) -> Action {
    if attempt.previous().len() > MAX_REDIRECTS {
        attempt.error("too many redirects")
    } else if scope.contains(attempt.url()) {
        attempt.follow()
    } else {
        attempt.stop()
    }
}

// GETs a page and classifies the response
//
// Only exactly 200 counts as OK. A 204 or a 206 is reported like a 404,
// which is what you want when hunting for pages that don't render.
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return FetchOutcome::Transport(e),
    };

    let status = response.status();
    let mut final_url = response.url().clone();
    final_url.set_fragment(None);

    // A 3xx that survived the redirect policy was stopped because it leaves
    // the host. Without a usable Location it's just an odd status code
    if status.is_redirection() {
        if let Some(location) = redirect_location(&response) {
            return FetchOutcome::OffHostRedirect { status, location };
        }
    }

    let body = read_body(response, url).await;

    if status == StatusCode::OK {
        FetchOutcome::Ok { final_url, body }
    } else {
        FetchOutcome::HttpStatus {
            status,
            final_url,
            body,
        }
    }
}

fn redirect_location(response: &Response) -> Option<Url> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    response.url().join(location).ok()
}

// Reads the body if it could contain links
//
// Images, archives and other binaries are skipped without downloading them,
// and anything else is cut off at MAX_BODY_BYTES. A body that can't be read
// (connection dropped mid-way) just means we find no links on that page.
async fn read_body(mut response: Response, url: &str) -> String {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_ascii_lowercase);

    if let Some(content_type) = content_type {
        if !may_contain_links(&content_type) {
            debug!(%url, %content_type, "not reading body");
            return String::new();
        }
    }

    let mut bytes = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                bytes.extend_from_slice(&chunk);
                if bytes.len() >= MAX_BODY_BYTES {
                    debug!(%url, limit = MAX_BODY_BYTES, "body too large, truncating");
                    bytes.truncate(MAX_BODY_BYTES);
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!(%url, error = %e, "could not read response body");
                return String::new();
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

// Servers label HTML in many ways (text/html, application/xhtml+xml, and
// text/plain from misconfigured ones), so anything textual gets parsed
fn may_contain_links(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || content_type.contains("html")
        || content_type.contains("xml")
}

// Describes a transport error for the report
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Connection refused
// - SSL certificate issues
// - Too many redirects
//
// The top-level message ("error sending request for url ...") hides the
// interesting part, so for anything we don't recognise we walk the source
// chain and join it.
fn describe_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        return "Fail: Request timed out".to_string();
    }
    if error.is_redirect() {
        return "Fail: Too many redirects".to_string();
    }

    let chain = error_chain(error);
    if error.is_connect() {
        format!("Fail: Connection failed: {}", chain)
    } else {
        format!("Fail: {}", chain)
    }
}

fn error_chain(error: &reqwest::Error) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper and reqwest often repeat the same text one level down
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a redirect Policy?
//    - reqwest follows 3xx responses on its own
//    - Policy::custom lets us look at every hop before it happens
//    - attempt.follow() = go there, attempt.stop() = hand us the 3xx,
//      attempt.error() = fail the request
//
// 2. Why `move` in the closure?
//    - The policy lives inside the Client, possibly longer than this function
//    - move transfers ownership of `scope` into the closure
//
// 3. Why read the body with chunk() instead of text()?
//    - text() downloads everything before returning
//    - chunk() hands us the body piece by piece, so we can stop at a limit
//
// 4. What is from_utf8_lossy?
//    - Turns bytes into a string, replacing invalid UTF-8 with U+FFFD
//    - A page in a legacy encoding still gives us its ASCII hrefs
// -----------------------------------------------------------------------------
