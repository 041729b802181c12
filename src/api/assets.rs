//! Asset quote and listing endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::{parse_asset_class, ApiResponse};
use crate::error::{AppError, Result};
use crate::types::{AssetClass, AssetQuote, FeaturedAsset};
use crate::AppState;

/// Create the assets router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stock/:ticker", get(get_stock))
        .route("/api/crypto/:symbol", get(get_crypto))
        .route("/api/assets/:type", get(get_featured))
}

fn quote(
    state: &AppState,
    symbol: &str,
    asset_class: AssetClass,
) -> Result<Json<ApiResponse<AssetQuote>>> {
    if symbol.trim().is_empty() {
        return Err(AppError::BadRequest("Symbol must not be empty".to_string()));
    }
    let quote = state.engine.quote(symbol, asset_class);
    Ok(Json(ApiResponse::new(quote)))
}

/// GET /api/stock/:ticker
async fn get_stock(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<ApiResponse<AssetQuote>>> {
    quote(&state, &ticker, AssetClass::Equity)
}

/// GET /api/crypto/:symbol
async fn get_crypto(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<AssetQuote>>> {
    quote(&state, &symbol, AssetClass::Crypto)
}

/// GET /api/assets/:type
async fn get_featured(
    State(state): State<AppState>,
    Path(asset_type): Path<String>,
) -> Result<Json<ApiResponse<Vec<FeaturedAsset>>>> {
    let asset_class = parse_asset_class(&asset_type)?;
    Ok(Json(ApiResponse::new(state.engine.featured(asset_class))))
}
