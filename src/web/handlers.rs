//! HTTP request handlers

use super::state::AppState;
use crate::extract::extract_videos;
use crate::results::ResultSet;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use thiserror::Error;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
}

/// Failures the API reports with an error envelope.
///
/// An empty extraction is NOT one of them: when the page yields no
/// records the handler answers 200 with `count: 0`, reserving the error
/// envelope for transport-level problems.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing query parameter ?q=")]
    MissingQuery,
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Search handler: fetch the results page, run the extraction pipeline,
/// answer with the envelope.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => return ApiError::MissingQuery.into_response(),
    };

    let html = match state.client.search_page(&query).await {
        Ok(html) => html,
        Err(e) => {
            tracing::error!("upstream fetch failed: {:#}", e);
            return ApiError::Upstream(e.to_string()).into_response();
        }
    };

    let results = extract_videos(&html);
    tracing::info!(count = results.len(), "extracted search results");

    Json(ResultSet::new(query, results)).into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
