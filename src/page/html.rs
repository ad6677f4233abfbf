// src/page/html.rs
// =============================================================================
// This module extracts outbound links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative hrefs against the page URL.
//
// Links come back in document order. Nothing is deduplicated here: a page
// that links to the same target twice yields it twice, and it is up to the
// crawl engine's visited set to decide what gets fetched.
//
// Rust concepts:
// - Iterators: filter_map chains over the selected elements
// - Option<T>: "this href has no usable absolute form"
// - LazyLock: a value built once, on first use
// =============================================================================

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

// Every <a> that carries an href. Anchors without href are skipped entirely.
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("static selector is valid"));

// Extracts all crawlable links from HTML content
//
// Parameters:
//   html: the page body
//   base_url: the URL the page was fetched from (for relative hrefs)
//
// Returns: absolute http/https URLs, in the order they appear on the page
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='mailto:x@y.z'>Mail</a>"
//   base_url = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            // Without a base we cannot resolve anything on this page
            warn!(base_url, error = %e, "cannot resolve links against invalid base URL");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_url(&base, href))
        .filter(is_crawlable)
        .map(String::from)
        .collect()
}

// Resolves a possibly-relative href to an absolute URL
//
// Url::join handles both cases: an absolute href replaces the base entirely,
// a relative one is resolved like a browser would.
//
// Malformed hrefs (e.g. "http://[broken") come back as None and are dropped
// silently. They are not an error for the page.
fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    base.join(href.trim()).ok()
}

// Only http and https are followed; mailto:, tel:, javascript:, data: and
// friends are not pages.
fn is_crawlable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
