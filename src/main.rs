// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (to stderr, filtered by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = clean tree, 1 = some pages failed, 2 = error)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - crawl limits and server settings
mod crawl;    // src/crawl/ - the recursive crawl engine
mod page;     // src/page/ - fetching pages and extracting links
mod report;   // src/report.rs - printing crawl trees
mod server;   // src/server/ - HTTP endpoint

use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{CrawlConfig, ServerConfig};
use crate::crawl::{validate_seed, Crawler};
use crate::page::HttpFetcher;
use crate::report::CrawlSummary;

#[tokio::main]
async fn main() {
    // Logs go to stderr so `--json` output on stdout stays machine-readable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = crawl finished, no page failed
//   Ok(1) = crawl finished, at least one page failed
//   Err   = invalid input or startup failure (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            url,
            json,
            flat,
            limits,
        } => handle_crawl(&url, json, flat, limits.to_config()).await,
        Commands::Serve { host, port, limits } => {
            let crawler = build_crawler(limits.to_config())?;
            server::serve(&ServerConfig { host, port }, crawler).await?;
            Ok(0)
        }
    }
}

fn build_crawler(config: CrawlConfig) -> Result<Arc<Crawler>> {
    let fetcher = HttpFetcher::new(&config.user_agent)?;
    Ok(Arc::new(Crawler::new(Arc::new(fetcher), config)))
}

// Handles the 'crawl' subcommand
async fn handle_crawl(url: &str, json: bool, flat: bool, config: CrawlConfig) -> Result<i32> {
    let seed = validate_seed(url)?;

    if !json {
        eprintln!("🔍 Crawling: {}", seed);
        eprintln!(
            "📊 Max depth: {}, links per page: {}",
            config.max_depth, config.max_links_per_page
        );
    }

    let crawler = build_crawler(config)?;
    let tree = crawler.run(&seed).await;
    let summary = CrawlSummary::of(&tree);

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else if flat {
        println!("{}", report::flatten_urls(&tree));
    } else {
        print!("{}", report::render_tree(&tree));
        println!();
        println!("{}", report::render_summary(&summary));
    }

    if summary.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}
