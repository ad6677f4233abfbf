// src/page/mod.rs
// =============================================================================
// Everything the crawler needs to know about a single page.
//
// Submodules:
// - fetch: Downloads a URL (the Fetcher trait and its reqwest implementation)
// - html: Pulls absolute http/https links out of an HTML body
//
// The crawl engine (src/crawl/) is built on top of these two and never
// touches reqwest or scraper directly.
// =============================================================================

mod fetch;
mod html;

pub use fetch::{FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use html::extract_links;
