// src/crawl/mock.rs
// =============================================================================
// A scripted Fetcher for tests (compiled only under #[cfg(test)]).
//
// It serves canned pages, can delay or fail any URL, and records:
// - how often each URL was requested
// - the most requests that were ever in progress at the same moment
//
// Rust concepts:
// - Atomics: Lock-free counters shared between concurrent fetches
// - Drop: A guard that decrements the in-flight count even when the
//   fetch future is cancelled by a timeout
// =============================================================================

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::page::{FetchError, FetchedPage, Fetcher};

#[derive(Debug, Clone)]
enum Reply {
    Html(String),
    Fail(FetchError),
}

#[derive(Debug, Clone)]
struct MockPage {
    reply: Reply,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: HashMap<String, MockPage>,
    calls: Mutex<HashMap<String, usize>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

// Counts one fetch as in progress for as long as it lives
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            MockPage {
                reply: Reply::Html(html.into()),
                delay: None,
            },
        );
        self
    }

    pub fn slow_page(mut self, url: &str, html: impl Into<String>, delay: Duration) -> Self {
        self.pages.insert(
            url.to_string(),
            MockPage {
                reply: Reply::Html(html.into()),
                delay: Some(delay),
            },
        );
        self
    }

    pub fn failing(mut self, url: &str, error: FetchError) -> Self {
        self.pages.insert(
            url.to_string(),
            MockPage {
                reply: Reply::Fail(error),
                delay: None,
            },
        );
        self
    }

    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls.lock().get(url).copied().unwrap_or(0)
    }

    pub fn total_fetches(&self) -> usize {
        self.calls.lock().values().sum()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<FetchedPage, FetchError> {
        *self.calls.lock().entry(url.to_string()).or_insert(0) += 1;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        // Unknown URLs behave like a missing page
        let Some(page) = self.pages.get(url).cloned() else {
            return Err(FetchError::Status(404));
        };

        if let Some(delay) = page.delay {
            tokio::time::sleep(delay).await;
        }

        match page.reply {
            Reply::Html(body) => Ok(FetchedPage { status: 200, body }),
            Reply::Fail(error) => Err(error),
        }
    }
}

/// An HTML body with one anchor per href, in order.
pub fn links_html(hrefs: &[&str]) -> String {
    let anchors: Vec<String> = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{href}">{href}</a>"#))
        .collect();
    format!("<html><body>{}</body></html>", anchors.join("\n"))
}
