//! Item-type and item-entry routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::{ApiError, AppState, middleware::AuthUser};
use bazaar_core::trade::ItemEntry;
use bazaar_db::{ItemEntryRepository, ItemRepository};
use bazaar_shared::AppError;

/// Creates the items router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(create_item))
        .route("/items", get(list_items))
        .route("/items/{item_id}", get(get_item))
        .route("/item-entries", post(create_entry))
        .route("/item-entries/{entry_id}", get(get_entry))
}

/// Create-item request payload.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Item type name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Whether entries of this type may be traded.
    #[serde(default = "default_trading")]
    pub is_trading: bool,
}

const fn default_trading() -> bool {
    true
}

/// Create-item-entry request payload.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Item type to instantiate.
    pub item_type_id: Uuid,
    /// Optional per-instance name.
    pub pseudonym: Option<String>,
}

/// POST /items - Create a new item type.
async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ItemRepository::new((*state.db).clone());
    let item = repo
        .create(
            &payload.name,
            payload.description.as_deref(),
            payload.is_trading,
        )
        .await?;

    info!(item_id = %item.id, created_by = %auth.account_id(), "Item type created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items - List item types open for trading.
async fn list_items(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ItemRepository::new((*state.db).clone());
    let items = repo.list_trading().await?;
    Ok(Json(items))
}

/// GET `/items/{item_id}` - Fetch an item type.
async fn get_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(item_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ItemRepository::new((*state.db).clone());
    let item = repo.get_by_id(item_id).await?;
    Ok(Json(item))
}

/// POST /item-entries - Create an item entry owned by the caller.
async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let item_repo = ItemRepository::new((*state.db).clone());
    let item = item_repo.get_by_id(payload.item_type_id).await?;
    if !item.is_trading {
        return Err(AppError::Validation("Item type is not open for trading.".into()).into());
    }

    let entry = ItemEntry::new(auth.account_id(), payload.item_type_id, payload.pseudonym)?;

    let entry_repo = ItemEntryRepository::new((*state.db).clone());
    entry_repo.create(&entry).await?;

    info!(entry_id = %entry.id, owner_id = %auth.account_id(), "Item entry created");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET `/item-entries/{entry_id}` - Fetch an item entry.
async fn get_entry(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ItemEntryRepository::new((*state.db).clone());
    let entry = repo.get_by_id(entry_id).await?;
    Ok(Json(entry))
}
