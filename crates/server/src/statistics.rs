//! Dashboard statistics API endpoints

use api_types::stats::DashboardStats;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for dashboard totals
pub async fn get_stats(
    State(state): State<ServerState>,
) -> Result<Json<DashboardStats>, ServerError> {
    let stats = state.engine.dashboard_stats().await?;

    Ok(Json(DashboardStats {
        total_items: stats.total_items,
        total_quantity: stats.total_quantity,
        total_value_minor: stats.total_value_minor,
        low_stock_items: stats.low_stock_items,
        categories: stats.categories,
    }))
}
