use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::*, metrics, AppState};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Blog operations
        .route("/api/blogs", post(create_blog))
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/:id", get(get_blog))
        .route("/api/blogs/:id", put(update_blog))
        .route("/api/blogs/:id", delete(delete_blog))
        // Statistics
        .route("/api/stats", get(get_stats))
        // System endpoints
        .route("/api/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .fallback(unknown_endpoint)
        .layer(middleware::from_fn(metrics::track))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Blog List API - POST /api/blogs to create a blog"
}

/// Prometheus exposition endpoint
async fn metrics_handler() -> String {
    metrics::encode_metrics().unwrap_or_else(|e| {
        tracing::error!("Failed to encode metrics: {}", e);
        String::from("# Error encoding metrics\n")
    })
}

/// Fallback for routes outside the API surface
async fn unknown_endpoint() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "unknown endpoint" })),
    )
}
