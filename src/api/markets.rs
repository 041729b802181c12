//! World market indices.

use axum::{extract::State, routing::get, Json, Router};

use super::ApiResponse;
use crate::error::Result;
use crate::types::MarketSnapshot;
use crate::AppState;

/// Create the markets router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/global-markets", get(get_global_markets))
}

/// GET /api/global-markets
async fn get_global_markets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MarketSnapshot>>>> {
    Ok(Json(ApiResponse::new(state.engine.market_snapshot())))
}
