//! Admin dashboard endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/dashboard/stats - Aggregate content counts for the admin
/// dashboard, computed by scanning the collections on every request.
pub async fn dashboard_stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let stats = state.repo.dashboard_stats().await?;
    success(stats)
}
