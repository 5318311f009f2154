//! Trade settlement engine.
//!
//! A purchase moves money, ownership, listing state, and the trade log in one
//! database transaction. Either every effect lands or none does.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};
use uuid::Uuid;

use bazaar_core::trade::{ListingStatus, TradeTransaction, Wallet};
use bazaar_shared::{AppError, AppResult};

use crate::repositories::{
    AccountRepository, ItemEntryRepository, ListingRepository, TradeTransactionRepository,
    WalletRepository, map_db_err,
};

/// Input to a purchase.
#[derive(Debug, Clone, Copy)]
pub struct PurchaseRequest {
    /// The buying account.
    pub buyer_account_id: Uuid,
    /// The listing being bought.
    pub listing_id: Uuid,
    /// Caller-supplied risk signal, recorded verbatim on the trade log.
    pub is_suspicious: bool,
}

/// Settlement engine for atomic purchases.
#[derive(Debug, Clone)]
pub struct TradingService {
    db: DatabaseConnection,
}

impl TradingService {
    /// Creates a new trading service.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Settles a purchase atomically and returns the appended trade record.
    ///
    /// Inside one transaction: the listing row is locked, the listing and
    /// buyer are validated, the buyer is debited, the seller is credited
    /// (auto-provisioning the seller wallet when missing), ownership of the
    /// item entry moves to the buyer, the listing closes, and a trade record
    /// is appended. The debit, the credit, and the record all carry the same
    /// timestamp, captured once before any work.
    ///
    /// # Errors
    ///
    /// - `AppError::NotFound` when the listing, buyer account, or buyer
    ///   wallet does not exist.
    /// - `AppError::Validation` when the listing is not `Approved` or the
    ///   buyer is the seller.
    /// - `AppError::InsufficientFunds` when the buyer wallet cannot cover the
    ///   price.
    /// - `AppError::Conflict` when a concurrent purchase won the race.
    pub async fn purchase(&self, request: PurchaseRequest) -> AppResult<TradeTransaction> {
        let now = Utc::now();

        let result = self
            .db
            .transaction::<_, TradeTransaction, AppError>(move |txn| {
                Box::pin(async move {
                    // Lock the listing row so concurrent purchases of the
                    // same listing serialize here.
                    let listing =
                        ListingRepository::get_for_update_in(txn, request.listing_id).await?;
                    listing.validate_purchase(request.buyer_account_id)?;

                    AccountRepository::get_active_in(txn, request.buyer_account_id).await?;

                    // Buyer wallet must already exist; only the seller side
                    // is auto-provisioned.
                    let buyer_wallet =
                        WalletRepository::get_in(txn, request.buyer_account_id, &listing.currency_code)
                            .await
                            .map_err(|e| match e {
                                AppError::NotFound(_) => AppError::NotFound("Buyer wallet".into()),
                                other => other,
                            })?;
                    if !buyer_wallet.can_cover(listing.price_amount) {
                        return Err(AppError::InsufficientFunds("Wallet".into()));
                    }

                    WalletRepository::decrease_balance_in(
                        txn,
                        request.buyer_account_id,
                        &listing.currency_code,
                        listing.price_amount,
                        now,
                    )
                    .await?;

                    match WalletRepository::get_in(txn, listing.seller_id, &listing.currency_code)
                        .await
                    {
                        Ok(_) => {}
                        Err(AppError::NotFound(_)) => {
                            let seller_wallet =
                                Wallet::empty(listing.seller_id, listing.currency_code.as_str())?;
                            WalletRepository::upsert_in(txn, &seller_wallet).await?;
                        }
                        Err(other) => return Err(other),
                    }

                    WalletRepository::increase_balance_in(
                        txn,
                        listing.seller_id,
                        &listing.currency_code,
                        listing.price_amount,
                        now,
                    )
                    .await?;

                    ItemEntryRepository::transfer_ownership_in(
                        txn,
                        listing.item_entry_id,
                        request.buyer_account_id,
                    )
                    .await?;

                    ListingRepository::update_status_in(txn, listing.id, ListingStatus::Closed)
                        .await?;

                    let record = TradeTransaction::new(
                        request.buyer_account_id,
                        listing.seller_id,
                        listing.id,
                        listing.currency_code.as_str(),
                        listing.price_amount,
                        request.is_suspicious,
                        now,
                    )?;
                    TradeTransactionRepository::create_in(txn, &record).await?;

                    Ok(record)
                })
            })
            .await;

        match result {
            Ok(record) => {
                tracing::info!(
                    trade_id = %record.id,
                    listing_id = %record.listing_id,
                    amount = %record.amount,
                    "purchase settled"
                );
                Ok(record)
            }
            Err(TransactionError::Connection(db_err)) => Err(map_db_err(&db_err)),
            Err(TransactionError::Transaction(app_err)) => Err(app_err),
        }
    }
}
