//! Listing lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::{ApiError, AppState, middleware::AuthUser};
use bazaar_core::trade::{Listing, ListingStatus};
use bazaar_db::{ItemEntryRepository, ListingRepository, PurchaseRequest, TradingService};
use bazaar_shared::AppError;

/// Creates the listings router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(create_listing))
        .route("/listings/{listing_id}", get(get_listing))
        .route("/listings/{listing_id}/status", post(update_status))
        .route("/listings/{listing_id}/purchase", post(purchase))
}

/// Create-listing request payload.
#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    /// Item entry being offered.
    pub item_entry_id: Uuid,
    /// Currency the price is denominated in.
    pub currency_code: String,
    /// Asking price.
    pub price_amount: Decimal,
}

/// Status-transition request payload.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status.
    pub status: ListingStatus,
}

/// Purchase request payload.
#[derive(Debug, Default, Deserialize)]
pub struct PurchasePayload {
    /// Caller-supplied risk signal, recorded verbatim on the trade log.
    #[serde(default)]
    pub is_suspicious: bool,
}

/// POST /listings - Create a draft listing for an item entry the caller owns.
async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateListingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry_repo = ItemEntryRepository::new((*state.db).clone());
    let entry = entry_repo.get_by_id(payload.item_entry_id).await?;
    if entry.owner_id != auth.account_id() {
        return Err(AppError::Validation("You can only list items you own.".into()).into());
    }

    let listing = Listing::new(
        auth.account_id(),
        payload.item_entry_id,
        &payload.currency_code,
        payload.price_amount,
        ListingStatus::Draft,
    )?;

    let repo = ListingRepository::new((*state.db).clone());
    let id = repo.create(&listing).await?;

    info!(listing_id = %id, seller_id = %auth.account_id(), "Listing created");

    Ok((StatusCode::CREATED, Json(listing)))
}

/// GET `/listings/{listing_id}` - Fetch a listing.
async fn get_listing(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(listing_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ListingRepository::new((*state.db).clone());
    let listing = repo.get_by_id(listing_id).await?;
    Ok(Json(listing))
}

/// POST `/listings/{listing_id}/status` - Transition a listing.
///
/// `Closed` is not reachable here; listings close through purchase only.
async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.status == ListingStatus::Closed {
        return Err(AppError::Validation("Listings close through purchase.".into()).into());
    }

    let repo = ListingRepository::new((*state.db).clone());
    let listing = repo.get_by_id(listing_id).await?;

    if !listing.status.can_transition(payload.status) {
        return Err(AppError::Validation(format!(
            "Cannot transition listing from {} to {}.",
            listing.status, payload.status
        ))
        .into());
    }

    // Only the seller may submit their draft for review.
    if payload.status == ListingStatus::Pending && listing.seller_id != auth.account_id() {
        return Err(AppError::Validation("Only the seller can submit a listing.".into()).into());
    }

    repo.update_status(listing_id, payload.status).await?;

    info!(listing_id = %listing_id, status = %payload.status, "Listing status updated");

    let updated = repo.get_by_id(listing_id).await?;
    Ok(Json(updated))
}

/// POST `/listings/{listing_id}/purchase` - Settle a purchase atomically.
///
/// The buyer is the authenticated account.
async fn purchase(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(listing_id): Path<Uuid>,
    payload: Option<Json<PurchasePayload>>,
) -> Result<impl IntoResponse, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let service = TradingService::new((*state.db).clone());
    let record = service
        .purchase(PurchaseRequest {
            buyer_account_id: auth.account_id(),
            listing_id,
            is_suspicious: payload.is_suspicious,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
