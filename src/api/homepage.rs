//! Homepage configuration endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::models::{HomepageData, Tour};
use crate::AppState;

/// GET /api/homepage - Get the homepage configuration document.
pub async fn get_homepage(State(state): State<AppState>) -> ApiResult<HomepageData> {
    let homepage = state.repo.get_homepage().await?;
    success(homepage)
}

/// PUT /api/homepage - Replace the homepage configuration document.
pub async fn update_homepage(
    State(state): State<AppState>,
    Json(request): Json<HomepageData>,
) -> ApiResult<HomepageData> {
    let homepage = state.repo.update_homepage(&request).await?;
    tracing::info!("Updated homepage configuration");
    success(homepage)
}

/// GET /api/homepage/featured-tours - Published tours referenced by
/// featuredTours, with dangling references dropped.
pub async fn featured_tours(State(state): State<AppState>) -> ApiResult<Vec<Tour>> {
    let tours = state.repo.featured_tours().await?;
    success(tours)
}
