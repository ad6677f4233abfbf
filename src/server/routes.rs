// src/server/routes.rs
// =============================================================================
// Route handlers for the crawl API.
//
// Rust concepts:
// - Extractors: State and Json are pulled out of the request by axum
// - Result<Json<T>, JsonRejection>: Lets us answer a bad body ourselves
// - tokio::spawn: Runs the crawl in its own task; a panic comes back as
//   a JoinError instead of unwinding through the handler
// =============================================================================

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use super::error::AppError;
use super::AppState;
use crate::crawl::{validate_seed, CrawlNode, SeedError};

#[derive(Debug, Deserialize)]
pub struct CrawlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

// POST /api/crawl  { "url": "https://example.com" }
//
// Answers 200 with the tree even when some pages failed; those failures are
// in the nodes' `error` fields.
pub async fn crawl(
    State(state): State<AppState>,
    payload: Result<Json<CrawlRequest>, JsonRejection>,
) -> Result<Json<CrawlNode>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let url = request.url.ok_or(SeedError::Missing)?;
    let seed = validate_seed(&url)?;

    info!(%seed, "crawl requested");

    // The crawl runs in its own task so a panic deep in the tree becomes a
    // 500 for this request instead of taking the connection down.
    let crawler = state.crawler.clone();
    let tree = tokio::spawn(async move { crawler.run(&seed).await })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("crawl task failed: {}", e)))?;

    Ok(Json(tree))
}

// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}
