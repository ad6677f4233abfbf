// src/server/mod.rs
// =============================================================================
// HTTP front end for the crawler.
//
// Routes:
// - POST /api/crawl  body {"url": "..."}  -> the crawl tree as JSON
// - GET  /healthz                         -> "ok"
//
// Status codes:
// - 200: crawl ran (the tree may still contain failed pages)
// - 400: url missing, malformed, not http(s), or the body is not JSON
// - 500: the crawl itself broke
//
// Rust concepts:
// - axum extractors: State, Json pull typed values out of the request
// - Arc: One Crawler shared by every request handler
// =============================================================================

mod error;
mod routes;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::crawl::Crawler;

#[derive(Clone)]
pub struct AppState {
    pub crawler: Arc<Crawler>,
}

pub fn router(crawler: Arc<Crawler>) -> Router {
    Router::new()
        .route("/api/crawl", post(routes::crawl))
        .route("/healthz", get(routes::healthz))
        .with_state(AppState { crawler })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn serve(config: &ServerConfig, crawler: Arc<Crawler>) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("link-crawler listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(crawler))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received. Stopping server...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlConfig;
    use crate::crawl::mock::{links_html, MockFetcher};
    use crate::page::{FetchError, FetchedPage, Fetcher};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(fetcher: Arc<dyn Fetcher>) -> Router {
        router(Arc::new(Crawler::new(fetcher, CrawlConfig::default())))
    }

    async fn post_crawl(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/crawl")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    struct PanickingFetcher;

    #[async_trait]
    impl Fetcher for PanickingFetcher {
        async fn fetch(&self, _url: &str, _timeout: Duration) -> Result<FetchedPage, FetchError> {
            panic!("fetcher exploded");
        }
    }

    #[tokio::test]
    async fn test_crawl_returns_tree() {
        let mock = MockFetcher::new()
            .page("https://example.com/", links_html(&["/a", "/missing"]))
            .page("https://example.com/a", "");

        let (status, body) =
            post_crawl(app(Arc::new(mock)), r#"{"url":"https://example.com"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "url": "https://example.com/",
                "links": [
                    { "url": "https://example.com/a", "links": [] },
                    { "url": "https://example.com/missing", "links": [], "error": "HTTP 404" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let (status, body) = post_crawl(app(Arc::new(MockFetcher::new())), "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "URL is required" }));
    }

    #[tokio::test]
    async fn test_malformed_url_is_bad_request() {
        let (status, body) =
            post_crawl(app(Arc::new(MockFetcher::new())), r#"{"url":"not a url"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid URL format" }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_bad_request() {
        let (status, body) = post_crawl(app(Arc::new(MockFetcher::new())), "url=x").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_panicking_crawl_is_internal_error() {
        let (status, body) =
            post_crawl(app(Arc::new(PanickingFetcher)), r#"{"url":"https://example.com"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = app(Arc::new(MockFetcher::new()))
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
