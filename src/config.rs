// src/config.rs
// =============================================================================
// Crawl limits and server settings.
//
// The defaults here are the crawler's fixed behavior:
// - depths 0, 1 and 2 are fetched, nothing deeper
// - at most 10 links are kept per page
// - every request gets 5 seconds
//
// The CLI (src/cli.rs) can override each of them, either with a flag or an
// environment variable.
// =============================================================================

use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_MAX_LINKS_PER_PAGE: usize = 10;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Compatible; LinkCrawler/1.0)";

/// Limits applied to a single crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Deepest level that is still fetched (the seed is depth 0)
    pub max_depth: usize,
    /// How many links are kept from one page, in document order
    pub max_links_per_page: usize,
    /// Hard budget for a single fetch
    pub fetch_timeout: Duration,
    /// Sent as the User-Agent header on every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_links_per_page: DEFAULT_MAX_LINKS_PER_PAGE,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_links(mut self, max_links_per_page: usize) -> Self {
        self.max_links_per_page = max_links_per_page;
        self
    }

    pub fn with_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}

/// Where `link-crawler serve` listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
