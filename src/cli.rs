// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The crawl limits can come from three places, highest priority first:
// 1. A flag:                 --max-depth 1
// 2. An environment variable: LINK_CRAWLER_MAX_DEPTH=1
// 3. The built-in default (see src/config.rs)
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use crate::config::{
    CrawlConfig, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LINKS_PER_PAGE,
};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "link-crawler",
    version,
    about = "Recursively discover the links of a website and show them as a tree",
    long_about = "link-crawler fetches a page, follows the links it finds a few levels deep, \
                  and prints the result as a tree. It can also run as a small HTTP service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and print its link tree
    ///
    /// Example: link-crawler crawl https://example.com --max-depth 1
    Crawl {
        /// Seed URL to start from (e.g., https://example.com)
        url: String,

        /// Output the tree as JSON instead of an indented tree
        #[arg(long, conflicts_with = "flat")]
        json: bool,

        /// Output every discovered URL on its own line
        #[arg(long)]
        flat: bool,

        #[command(flatten)]
        limits: CrawlLimits,
    },

    /// Serve the crawler over HTTP (POST /api/crawl)
    Serve {
        /// Address to bind
        #[arg(long, env = "LINK_CRAWLER_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "LINK_CRAWLER_PORT", default_value_t = 3000)]
        port: u16,

        #[command(flatten)]
        limits: CrawlLimits,
    },
}

// Flags shared by both subcommands
#[derive(Args, Debug, Clone)]
pub struct CrawlLimits {
    /// Deepest level that is fetched (the seed is depth 0)
    #[arg(long, env = "LINK_CRAWLER_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Links followed per page, first ones on the page win
    #[arg(long, env = "LINK_CRAWLER_MAX_LINKS", default_value_t = DEFAULT_MAX_LINKS_PER_PAGE)]
    pub max_links: usize,

    /// Per-request timeout in milliseconds
    #[arg(
        long,
        env = "LINK_CRAWLER_TIMEOUT_MS",
        default_value_t = DEFAULT_FETCH_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,
}

impl CrawlLimits {
    pub fn to_config(&self) -> CrawlConfig {
        CrawlConfig::default()
            .with_max_depth(self.max_depth)
            .with_max_links(self.max_links)
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_defaults() {
        let cli = Cli::try_parse_from(["link-crawler", "crawl", "https://example.com"]).unwrap();
        match cli.command {
            Commands::Crawl { url, json, flat, limits } => {
                assert_eq!(url, "https://example.com");
                assert!(!json);
                assert!(!flat);
                assert_eq!(limits.to_config(), CrawlConfig::default());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_crawl_overrides() {
        let cli = Cli::try_parse_from([
            "link-crawler",
            "crawl",
            "https://example.com",
            "--json",
            "--max-depth",
            "1",
            "--max-links",
            "3",
            "--timeout-ms",
            "250",
        ])
        .unwrap();
        let Commands::Crawl { json, limits, .. } = cli.command else {
            panic!("expected crawl");
        };
        assert!(json);
        let config = limits.to_config();
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.max_links_per_page, 3);
        assert_eq!(config.fetch_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from([
            "link-crawler",
            "crawl",
            "https://example.com",
            "--timeout-ms",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_and_flat_conflict() {
        let result =
            Cli::try_parse_from(["link-crawler", "crawl", "https://example.com", "--json", "--flat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serve_config() {
        let cli =
            Cli::try_parse_from(["link-crawler", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        let Commands::Serve { host, port, limits } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 8080);
        assert_eq!(limits.max_depth, DEFAULT_MAX_DEPTH);
    }
}
