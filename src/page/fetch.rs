// src/page/fetch.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - The `Fetcher` trait: "give me the body of this URL within this timeout"
// - `HttpFetcher`: the real implementation, built on reqwest
// - `FetchError`: why a fetch failed (timeout, bad status, connection, ...)
//
// The crawl engine only ever talks to the trait, so tests can swap in a
// scripted fetcher and never touch the network.
//
// Rust concepts:
// - Traits: Shared behavior that several types can implement
// - async-trait: Lets trait methods be async
// - thiserror: Derives Display/Error for our error enum
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

// A successfully downloaded page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code (always 2xx for a page that made it here)
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

// Everything that can go wrong while fetching one URL
//
// Timeouts get their own variant because the crawl engine treats them
// differently from every other failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout)
    }
}

// Categorizes reqwest errors into our own variants
//
// The order matters: a timeout during connect is still a timeout.
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else if error.is_body() || error.is_decode() {
            FetchError::Body(error.to_string())
        } else {
            FetchError::Other(error.to_string())
        }
    }
}

/// Something that can download a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError>;
}

// The real fetcher. Client is cheap to clone (it's an Arc internally), and
// reusing one client gives us connection pooling across the whole crawl.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        debug!(url, timeout_ms = timeout.as_millis() as u64, "fetching page");

        let response = self.client.get(url).timeout(timeout).send().await?;

        // Anything outside 2xx is a failed fetch, the body is not parsed
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawl engine becomes testable without a network
//    - Tests implement Fetcher with canned pages, delays and failures
//    - Box<dyn Fetcher> / Arc<dyn Fetcher> lets us pick at runtime
//
// 2. What does #[async_trait] do?
//    - Trait objects with async methods need their futures boxed
//    - The macro rewrites `async fn` into a method returning a boxed future
//
// 3. Why impl From<reqwest::Error> for FetchError?
//    - The ? operator calls From::from on the error automatically
//    - So `send().await?` turns a reqwest error into our FetchError
//
// 4. Why is the timeout passed per call?
//    - The limit belongs to the crawl (CrawlConfig), not to the client
//    - reqwest's RequestBuilder::timeout covers connect + headers + body
// -----------------------------------------------------------------------------
