// src/crawl/engine.rs
// =============================================================================
// This module implements the recursive, depth-bounded crawl.
//
// How it works:
// 1. Skip the URL if it is deeper than max_depth or already visited
// 2. Claim it in the visited set, then fetch it (with a hard timeout)
// 3. Extract links from the page, drop self-links, keep the first N
// 4. Below max_depth: crawl every kept link concurrently, one level deeper
//    At max_depth: list the kept links as unexplored leaves
// 5. Return the page as a node with its children in page order
//
// Failures stay where they happen:
// - a timeout turns the node into a plain empty leaf
// - any other fetch failure sets the node's `error` and stops that branch
// - siblings and ancestors are never affected
//
// Rust concepts:
// - BoxFuture: An async fn cannot call itself directly (its future would
//   have infinite size), so the recursive step returns a boxed future
// - join_all: Runs futures concurrently, returns results in input order
// - Arc<dyn Fetcher>: Shared ownership of a trait object
// =============================================================================

use futures::future::{join_all, BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

use super::node::{CrawlNode, VisitedSet};
use crate::config::CrawlConfig;
use crate::page::{extract_links, Fetcher};

pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    // Crawls from a seed URL and returns the whole tree
    //
    // The seed is expected to be a valid absolute URL (the CLI and the HTTP
    // endpoint check that). It is normalized the same way extracted links
    // are, so "https://example.com" and a link to "/" compare equal.
    //
    // A fresh visited set is created here and dropped when the crawl ends.
    pub async fn run(&self, seed: &str) -> CrawlNode {
        let root = normalize_seed(seed);
        let visited = VisitedSet::new();

        info!(
            seed = %root,
            max_depth = self.config.max_depth,
            max_links = self.config.max_links_per_page,
            "starting crawl"
        );

        let tree = self.crawl(root, 0, &visited).await;

        info!(url = %tree.url, visited = visited.len(), "crawl finished");
        tree
    }

    // One step of the crawl: builds the node for `url` at `depth`
    pub fn crawl<'a>(
        &'a self,
        url: String,
        depth: usize,
        visited: &'a VisitedSet,
    ) -> BoxFuture<'a, CrawlNode> {
        async move {
            if depth > self.config.max_depth {
                debug!(%url, depth, "beyond max depth, not fetching");
                return CrawlNode::leaf(url);
            }

            if !visited.try_claim(&url) {
                debug!(%url, depth, "already visited");
                return CrawlNode::leaf(url);
            }

            let budget = self.config.fetch_timeout;
            let page = match timeout(budget, self.fetcher.fetch(&url, budget)).await {
                Ok(Ok(page)) => page,
                Ok(Err(e)) if e.is_timeout() => {
                    debug!(%url, depth, "fetch timed out");
                    return CrawlNode::leaf(url);
                }
                Err(_) => {
                    debug!(%url, depth, "fetch exceeded its time budget");
                    return CrawlNode::leaf(url);
                }
                Ok(Err(e)) => {
                    warn!(%url, depth, error = %e, "fetch failed");
                    return CrawlNode::failed(url, e.to_string());
                }
            };

            let links = self.select_links(&page.body, &url);
            debug!(%url, depth, status = page.status, links = links.len(), "page fetched");

            let children = if depth < self.config.max_depth {
                join_all(
                    links
                        .into_iter()
                        .map(|link| self.crawl(link, depth + 1, visited)),
                )
                .await
            } else {
                // Frontier: discovered here, never fetched
                links.into_iter().map(CrawlNode::leaf).collect()
            };

            CrawlNode::branch(url, children)
        }
        .boxed()
    }

    // Links of one page that become children: no self-links, at most
    // max_links_per_page, in page order. Repeats are kept.
    fn select_links(&self, body: &str, page_url: &str) -> Vec<String> {
        extract_links(body, page_url)
            .into_iter()
            .filter(|link| link != page_url)
            .take(self.config.max_links_per_page)
            .collect()
    }
}

fn normalize_seed(seed: &str) -> String {
    match Url::parse(seed.trim()) {
        Ok(url) => url.to_string(),
        Err(_) => seed.to_string(),
    }
}
