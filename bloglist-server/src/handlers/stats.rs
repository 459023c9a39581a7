use axum::{extract::State, Json};
use bloglist_core::stats::{self, AuthorLikes, AuthorPostCount};
use bloglist_core::Blog;
use serde::Serialize;
use tracing::info;

use crate::{AppError, AppState};

/// Aggregated list statistics
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_likes: Option<u64>,
    pub favorite: Blog,
    pub most_prolific_author: AuthorPostCount,
    pub most_liked_author: AuthorLikes,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub total_blogs: usize,
}

/// Compute list statistics over all stored blogs
///
/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let blogs = state.store.fetch_all()?;

    let response = StatsResponse {
        total_likes: stats::total_likes(&blogs),
        favorite: stats::favorite_blog(&blogs),
        most_prolific_author: stats::most_prolific_author(&blogs),
        most_liked_author: stats::most_liked_author(&blogs),
    };

    info!("Computed statistics over {} blogs", blogs.len());

    Ok(Json(response))
}

/// Health check endpoint
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let total_blogs = state.store.fetch_all()?.len();

    Ok(Json(HealthResponse {
        status: "healthy",
        total_blogs,
    }))
}
