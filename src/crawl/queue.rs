// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself.
//
// How it works:
// 1. Start with the seed URL on a work-list (its origin is itself)
// 2. Pop an item; skip it if already visited, otherwise mark it visited
// 3. GET the page; record a broken link if it failed or wasn't a 200
//    (a redirect to another host is neither followed nor reported)
// 4. Extract the links from whatever body came back
// 5. Resolve each link and queue the ones that are unvisited and on our host
// 6. Repeat until the work-list is empty (or the page cap is hit)
//
// The work-list is a stack, so the crawl is depth-first: the first link on a
// page is followed all the way down before the second one is looked at. This
// is the same order a recursive crawl(origin, target) would produce, without
// the recursion.
//
// Termination: a URL goes into the visited set before it is fetched and is
// never fetched again, so even a site where every page links to every other
// page finishes after one fetch per distinct URL.
// =============================================================================

use crate::checker::{build_client, extract_links, fetch_page, FetchOutcome};
use crate::config::CrawlConfig;
use crate::crawl::resolve::resolve_against;
use crate::crawl::scope::HostScope;
use crate::error::Result;
use crate::report::{print_attempt, print_off_host_redirect, BrokenLink, CrawlReport};
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};
use url::Url;

// A page waiting to be fetched
#[derive(Debug, Clone)]
struct CrawlItem {
    /// The page the link was found on
    origin: String,
    /// The absolute URL to fetch
    target: Url,
}

// One crawl run
//
// Everything that changes during a crawl lives here, so two crawlers (two
// tests, for instance) never share a visited set or a report.
pub struct Crawler {
    client: Client,
    seed: Url,
    scope: HostScope,
    visited: HashSet<String>,
    broken: Vec<BrokenLink>,
    max_pages: Option<usize>,
}

impl Crawler {
    pub fn new(seed: Url, config: &CrawlConfig) -> Result<Self> {
        let scope = HostScope::from_seed(&seed)?;
        let client = build_client(config, scope.clone())?;

        Ok(Self {
            client,
            seed,
            scope,
            visited: HashSet::new(),
            broken: Vec::new(),
            max_pages: config.max_pages,
        })
    }

    // Crawls everything reachable from the seed and returns the report
    pub async fn run(mut self) -> CrawlReport {
        info!(seed = %self.seed, host = self.scope.host(), "starting crawl");

        let mut stack = vec![CrawlItem {
            origin: self.seed.to_string(),
            target: self.seed.clone(),
        }];
        let mut truncated = false;
        let mut pages_fetched = 0;

        while let Some(item) = stack.pop() {
            let target = item.target.to_string();

            // A page can be queued several times before its first visit
            // (two links to it on the same page, or from a sibling subtree)
            if self.visited.contains(&target) {
                trace!(%target, "already visited");
                continue;
            }

            if let Some(max) = self.max_pages {
                if pages_fetched >= max {
                    warn!(max_pages = max, "page limit reached, stopping crawl");
                    truncated = true;
                    break;
                }
            }

            self.visited.insert(target.clone());

            let outcome = fetch_page(&self.client, &target).await;
            pages_fetched += 1;

            if let FetchOutcome::OffHostRedirect { location, .. } = &outcome {
                print_off_host_redirect(&target, location.as_str());
                continue;
            }

            let failure = outcome.failure_message();
            print_attempt(&target, failure.as_deref());

            if let Some(message) = failure {
                self.record_broken(&item.origin, &target, message);
            }

            // Transport errors have no body, so nothing to follow
            let Some(body) = outcome.body() else {
                continue;
            };

            // After a same-host redirect (/docs -> /docs/) relative links
            // resolve against where the page really is. The final URL is
            // marked visited too, so a direct link to it isn't fetched again
            let base = match outcome.final_url() {
                Some(final_url) if final_url != &item.target => {
                    if self.scope.contains(final_url) {
                        self.visited.insert(final_url.to_string());
                    }
                    final_url
                }
                _ => &item.target,
            };

            let children = self.discover(&target, base, body);
            // Reversed so the first link on the page is popped first
            stack.extend(children.into_iter().rev());
        }

        info!(
            pages = pages_fetched,
            broken = self.broken.len(),
            "crawl finished"
        );

        CrawlReport {
            broken: self.broken,
            pages_fetched,
            truncated,
        }
    }

    // Finds the links on a page that should be crawled next
    //
    // `origin` is the URL we fetched, `base` is where the body came from
    fn discover(&self, origin: &str, base: &Url, body: &str) -> Vec<CrawlItem> {
        let mut items = Vec::new();

        for href in extract_links(body) {
            let absolute = match resolve_against(&href, base) {
                Ok(url) => url,
                Err(e) => {
                    debug!(page = %origin, error = %e, "skipping link");
                    continue;
                }
            };

            if self.visited.contains(absolute.as_str()) {
                continue;
            }

            if !self.scope.contains(&absolute) {
                debug!(page = %origin, link = %absolute, "out of scope, not following");
                continue;
            }

            items.push(CrawlItem {
                origin: origin.to_string(),
                target: absolute,
            });
        }

        items
    }

    fn record_broken(&mut self, origin: &str, target: &str, message: String) {
        self.broken.push(BrokenLink {
            origin: origin.to_string(),
            target: target.to_string(),
            error_message: message,
        });
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Vec as a stack instead of recursion?
//    - A recursive async fn needs boxing, and a deep site could blow the stack
//    - push() / pop() on a Vec gives the same depth-first order for free
//
// 2. Why check `visited` twice (in discover() and after pop())?
//    - discover() avoids queueing pages we already fetched
//    - the check after pop() catches pages queued twice before either fetch
//
// 3. What is `let ... else`?
//    - `let Some(body) = outcome.body() else { continue; };` binds body if the
//      pattern matches and runs the else block (which must leave the loop
//      iteration) if it doesn't
//
// 4. Why does run() take `mut self` instead of `&mut self`?
//    - A Crawler is good for exactly one run; consuming it moves the report
//      out without cloning
// -----------------------------------------------------------------------------
