//! Candlestick chart endpoint.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::{parse_asset_class, parse_timeframe, ApiResponse};
use crate::error::Result;
use crate::types::CandleSeries;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CandleQuery {
    /// Chart range code: 1d, 1w, 15d, 3m, 6m, 1y, 3y.
    pub timeframe: Option<String>,
}

/// Create the candles router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:type/:symbol", get(get_candles))
}

/// GET /api/candles/:type/:symbol?timeframe=
async fn get_candles(
    State(state): State<AppState>,
    Path((asset_type, symbol)): Path<(String, String)>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<ApiResponse<CandleSeries>>> {
    let asset_class = parse_asset_class(&asset_type)?;
    let timeframe = parse_timeframe(query.timeframe.as_deref());
    let series = state.engine.candles(&symbol, asset_class, timeframe);
    Ok(Json(ApiResponse::new(series)))
}
