//! Analytics route handlers (admin only).

use axum::extract::State;

use crate::db::analytics::{CategorySales, SummaryStats};
use crate::error::Result;
use crate::extract::Json;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// `GET /admin-stats`: approximate counts and total revenue.
pub async fn admin_stats(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
) -> Result<Json<SummaryStats>> {
    let stats = state.analytics().summary().await?;
    Ok(Json(stats))
}

/// `GET /order-stats`: per-category order counts and revenue.
pub async fn order_stats(
    State(state): State<AppState>,
    RequireAdmin(_claims): RequireAdmin,
) -> Result<Json<Vec<CategorySales>>> {
    let stats = state.analytics().order_stats().await?;
    Ok(Json(stats))
}
