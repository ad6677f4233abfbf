// src/server/error.rs
// =============================================================================
// Errors the HTTP endpoint can answer with.
//
// Per-page fetch failures are NOT here: those live inside the returned tree.
// Only a bad request or an internal failure replaces the tree entirely.
//
// Rust concepts:
// - IntoResponse: Turns our error enum into a status code + JSON body
// - From: Lets `?` convert a SeedError into an AppError automatically
// =============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::crawl::SeedError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request was unusable (missing or malformed URL, bad JSON body)
    #[error("{0}")]
    BadRequest(String),

    /// Something broke on our side while crawling
    #[error("Internal Server Error")]
    Internal(#[source] anyhow::Error),
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(msg) => {
                tracing::debug!("Rejected crawl request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(e) => {
                tracing::error!("Crawl error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
