// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Recursion from a seed URL, bounded by max_depth
// - One visited set per crawl, so every URL is fetched at most once
// - At most max_links_per_page links followed from each page
// - Child pages of one parent are fetched concurrently
// - A failing page never aborts the rest of the crawl
//
// The result is a tree (CrawlNode) that mirrors where each link was found.
// =============================================================================

mod engine;
mod node;
mod seed;

#[cfg(test)]
pub(crate) mod mock;

pub use engine::Crawler;
pub use node::CrawlNode;
pub use seed::{validate_seed, SeedError};
