// src/crawl/seed.rs
// =============================================================================
// Checks a user-supplied seed URL before any crawl starts.
//
// Both boundaries (the CLI and POST /api/crawl) go through here, so a bad
// seed is always rejected up front and never shows up inside a tree.
//
// Rust concepts:
// - Result<T, E>: Either the normalized URL or the reason it was rejected
// - thiserror: The error messages double as the HTTP 400 response text
// =============================================================================

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format")]
    Invalid,

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Parses and normalizes a seed URL. Only http and https are crawled.
pub fn validate_seed(input: &str) -> Result<String, SeedError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(SeedError::Missing);
    }

    let url = Url::parse(input).map_err(|_| SeedError::Invalid)?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(SeedError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().is_none() {
        return Err(SeedError::Invalid);
    }

    Ok(url.to_string())
}
