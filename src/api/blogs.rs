//! Blog API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{success, ApiResult};
use crate::db::BlogFilter;
use crate::errors::AppError;
use crate::models::{Blog, CreateBlogRequest, UpdateBlogRequest};
use crate::AppState;

/// GET /api/blogs - List all blogs with admin filters (q, status).
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(filter): Query<BlogFilter>,
) -> ApiResult<Vec<Blog>> {
    let blogs = state.repo.list_blogs(&filter).await?;
    success(blogs)
}

/// GET /api/blogs/published - List published blogs.
pub async fn list_published_blogs(State(state): State<AppState>) -> ApiResult<Vec<Blog>> {
    let blogs = state.repo.list_published_blogs().await?;
    success(blogs)
}

/// GET /api/blogs/slug/:slug - Get a single blog by its public slug.
pub async fn get_blog_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Blog> {
    let blog = state
        .repo
        .get_blog_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog with slug '{}' not found", slug)))?;
    success(blog)
}

/// GET /api/blogs/:id - Get a single blog.
pub async fn get_blog(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Blog> {
    let blog = state
        .repo
        .get_blog(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog {} not found", id)))?;
    success(blog)
}

/// POST /api/blogs - Create a new blog.
pub async fn create_blog(
    State(state): State<AppState>,
    Json(request): Json<CreateBlogRequest>,
) -> ApiResult<Blog> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let blog = state.repo.create_blog(&request).await?;
    tracing::info!(blog_id = %blog.id, slug = %blog.slug, "Created blog");
    success(blog)
}

/// PUT /api/blogs/:id - Update a blog by partial merge.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBlogRequest>,
) -> ApiResult<Blog> {
    if request.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation("Title cannot be empty".to_string()));
    }

    let blog = state.repo.update_blog(&id, &request).await?;
    success(blog)
}

/// DELETE /api/blogs/:id - Delete a blog.
pub async fn delete_blog(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_blog(&id).await?;
    tracing::info!(blog_id = %id, "Deleted blog");
    success(())
}
