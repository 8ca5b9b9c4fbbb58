//! Tour API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::db::TourFilter;
use crate::errors::AppError;
use crate::models::{CreateTourRequest, Tour, UpdateTourRequest};
use crate::AppState;

/// Query parameters for the public published-tour listing.
#[derive(Debug, Deserialize)]
pub struct PublishedQuery {
    pub category: Option<String>,
}

/// GET /api/tours - List all tours with admin filters (q, category, status).
pub async fn list_tours(
    State(state): State<AppState>,
    Query(filter): Query<TourFilter>,
) -> ApiResult<Vec<Tour>> {
    let tours = state.repo.list_tours(&filter).await?;
    success(tours)
}

/// GET /api/tours/published - List published tours, optionally by category.
/// The sentinel category "All" means no category filter.
pub async fn list_published_tours(
    State(state): State<AppState>,
    Query(query): Query<PublishedQuery>,
) -> ApiResult<Vec<Tour>> {
    let tours = state
        .repo
        .list_published_tours(query.category.as_deref())
        .await?;
    success(tours)
}

/// GET /api/tours/slug/:slug - Get a single tour by its public slug.
pub async fn get_tour_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Tour> {
    let tour = state
        .repo
        .get_tour_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tour with slug '{}' not found", slug)))?;
    success(tour)
}

/// GET /api/tours/:id - Get a single tour.
pub async fn get_tour(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Tour> {
    let tour = state
        .repo
        .get_tour(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tour {} not found", id)))?;
    success(tour)
}

/// GET /api/tours/:id/similar - Published tours referenced by similarTours,
/// with dangling references dropped.
pub async fn similar_tours(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Tour>> {
    let tours = state.repo.similar_tours(&id).await?;
    success(tours)
}

/// POST /api/tours - Create a new tour.
pub async fn create_tour(
    State(state): State<AppState>,
    Json(request): Json<CreateTourRequest>,
) -> ApiResult<Tour> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let tour = state.repo.create_tour(&request).await?;
    tracing::info!(tour_id = %tour.id, slug = %tour.slug, "Created tour");
    success(tour)
}

/// PUT /api/tours/:id - Update a tour by partial merge.
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTourRequest>,
) -> ApiResult<Tour> {
    if request.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation("Title cannot be empty".to_string()));
    }

    let tour = state.repo.update_tour(&id, &request).await?;
    success(tour)
}

/// DELETE /api/tours/:id - Delete a tour.
pub async fn delete_tour(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_tour(&id).await?;
    tracing::info!(tour_id = %id, "Deleted tour");
    success(())
}
