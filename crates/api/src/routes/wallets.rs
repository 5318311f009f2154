//! Wallet routes for the authenticated account.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::{ApiError, AppState, middleware::AuthUser};
use bazaar_core::trade::Wallet;
use bazaar_db::WalletRepository;
use bazaar_shared::{AppError, CurrencyCode};

/// Creates the wallets router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallets/{currency_code}", get(get_wallet))
        .route("/wallets/{currency_code}", put(upsert_wallet))
        .route("/wallets/{currency_code}/deposit", post(deposit))
        .route("/wallets/{currency_code}/withdraw", post(withdraw))
}

/// Upsert-wallet request payload.
#[derive(Debug, Deserialize)]
pub struct UpsertWalletRequest {
    /// Balance to set.
    pub balance: Decimal,
    /// Whether the wallet is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// Balance-change request payload.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Amount to move. Must be non-negative.
    pub amount: Decimal,
}

/// GET `/wallets/{currency_code}` - Fetch the caller's wallet.
async fn get_wallet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(currency_code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = CurrencyCode::parse(&currency_code)?;
    let repo = WalletRepository::new((*state.db).clone());
    let wallet = repo.get(auth.account_id(), &code).await?;
    Ok(Json(wallet))
}

/// PUT `/wallets/{currency_code}` - Create or replace the caller's wallet.
async fn upsert_wallet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(currency_code): Path<String>,
    Json(payload): Json<UpsertWalletRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let wallet = Wallet::new(
        auth.account_id(),
        &currency_code,
        payload.balance,
        None,
        payload.is_active,
    )?;

    let repo = WalletRepository::new((*state.db).clone());
    repo.upsert(&wallet).await?;

    info!(account_id = %auth.account_id(), currency = %wallet.currency_code, "Wallet upserted");

    Ok((StatusCode::OK, Json(wallet)))
}

/// POST `/wallets/{currency_code}/deposit` - Credit the caller's wallet.
async fn deposit(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(currency_code): Path<String>,
    Json(payload): Json<AmountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let code = CurrencyCode::parse(&currency_code)?;
    validate_amount(payload.amount)?;

    let repo = WalletRepository::new((*state.db).clone());
    repo.increase_balance(auth.account_id(), &code, payload.amount, Utc::now())
        .await?;

    let wallet = repo.get(auth.account_id(), &code).await?;
    Ok(Json(wallet))
}

/// POST `/wallets/{currency_code}/withdraw` - Debit the caller's wallet.
async fn withdraw(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(currency_code): Path<String>,
    Json(payload): Json<AmountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let code = CurrencyCode::parse(&currency_code)?;
    validate_amount(payload.amount)?;

    let repo = WalletRepository::new((*state.db).clone());
    repo.decrease_balance(auth.account_id(), &code, payload.amount, Utc::now())
        .await?;

    let wallet = repo.get(auth.account_id(), &code).await?;
    Ok(Json(wallet))
}

fn validate_amount(amount: Decimal) -> Result<(), ApiError> {
    if amount < Decimal::ZERO {
        return Err(AppError::Validation("Amount must be non-negative.".into()).into());
    }
    Ok(())
}
