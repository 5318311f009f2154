//! Trade log routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use uuid::Uuid;

use crate::{ApiError, AppState, middleware::AuthUser};
use bazaar_db::TradeTransactionRepository;
use bazaar_shared::AppError;

/// Creates the trades router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/trades/{trade_id}", get(get_trade))
        .route("/listings/{listing_id}/trade", get(get_trade_for_listing))
}

/// GET `/trades/{trade_id}` - Fetch a trade record.
///
/// Only the buyer and the seller of the trade may read it.
async fn get_trade(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(trade_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TradeTransactionRepository::new((*state.db).clone());
    let record = repo.get_by_id(trade_id).await?;

    if record.buyer_account_id != auth.account_id()
        && record.seller_account_id != auth.account_id()
    {
        return Err(AppError::NotFound("TradeTransaction".into()).into());
    }

    Ok(Json(record))
}

/// GET `/listings/{listing_id}/trade` - Fetch the trade that settled a listing.
async fn get_trade_for_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TradeTransactionRepository::new((*state.db).clone());
    let record = repo
        .get_by_listing_id(listing_id)
        .await?
        .ok_or_else(|| AppError::NotFound("TradeTransaction".into()))?;

    if record.buyer_account_id != auth.account_id()
        && record.seller_account_id != auth.account_id()
    {
        return Err(AppError::NotFound("TradeTransaction".into()).into());
    }

    Ok(Json(record))
}
