use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{MoodGenre, SearchRequest, SearchResponse, ServiceStatus},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Which providers have credentials configured
pub async fn service_status(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(state.search.service_status())
}

/// Mood catalog with the genre each mood searches
pub async fn moods(State(state): State<AppState>) -> Json<Vec<MoodGenre>> {
    Json(state.search.mood_catalog())
}

/// Search from query parameters (`?mode=mood&query=...&page=2`).
/// Unparseable parameters are reported as `{"error": ...}` with status 400.
pub async fn search_query(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    request: Result<Query<SearchRequest>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(request) = request?;
    run_search(state, request_id, request).await
}

/// Search from a JSON body
pub async fn search_json(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    request: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Json(request) = request?;
    run_search(state, request_id, request).await
}

async fn run_search(
    state: AppState,
    request_id: RequestId,
    request: SearchRequest,
) -> AppResult<Json<SearchResponse>> {
    tracing::info!(
        request_id = %request_id,
        mode = ?request.mode,
        page = request.page,
        "Processing search request"
    );

    let result = state.search.handle(&request).await?;

    tracing::info!(
        request_id = %request_id,
        mood = ?result.mood,
        results = result.movies.len(),
        total_pages = result.total_pages,
        "Search completed"
    );

    Ok(Json(SearchResponse::new(request, result)))
}
