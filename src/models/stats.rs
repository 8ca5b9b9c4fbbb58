//! Dashboard statistics model.

use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the admin dashboard. Computed by live counts on
/// every request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub tours_count: i64,
    pub blogs_count: i64,
    pub messages_count: i64,
    pub published_tours_count: i64,
    pub published_blogs_count: i64,
}
