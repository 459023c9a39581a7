use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bloglist_core::{Blog, BlogPatch, NewBlog};
use tracing::info;
use uuid::Uuid;

use crate::{AppError, AppState};

/// List all blogs
///
/// GET /api/blogs
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, AppError> {
    let blogs = state.store.fetch_all()?;
    Ok(Json(blogs))
}

/// Create a new blog
///
/// POST /api/blogs
/// Body: NewBlog; title and url are required, likes defaults to 0.
pub async fn create_blog(
    State(state): State<AppState>,
    Json(request): Json<NewBlog>,
) -> Result<(StatusCode, Json<Blog>), AppError> {
    request.validate()?;

    let blog = state.store.insert(request)?;

    info!(id = %id_of(&blog), title = blog.title.as_deref().unwrap_or(""), "created blog");

    Ok((StatusCode::CREATED, Json(blog)))
}

/// Get a specific blog
///
/// GET /api/blogs/:id
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Blog>, AppError> {
    let id = parse_id(&id)?;

    let blog = state
        .store
        .fetch(id)?
        .ok_or_else(|| AppError::NotFound("blog not found".to_string()))?;

    Ok(Json(blog))
}

/// Update a blog
///
/// PUT /api/blogs/:id
/// Body: BlogPatch; provided fields replace the stored ones.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<BlogPatch>,
) -> Result<Json<Blog>, AppError> {
    let id = parse_id(&id)?;

    let blog = state
        .store
        .update(id, request)?
        .ok_or_else(|| AppError::NotFound("blog not found".to_string()))?;

    info!(%id, "updated blog");

    Ok(Json(blog))
}

/// Delete a blog
///
/// DELETE /api/blogs/:id
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    if !state.store.remove(id)? {
        return Err(AppError::NotFound("blog not found".to_string()));
    }

    info!(%id, "deleted blog");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("malformed id: {}", raw)))
}

fn id_of(blog: &Blog) -> String {
    blog.id.map(|id| id.to_string()).unwrap_or_default()
}
