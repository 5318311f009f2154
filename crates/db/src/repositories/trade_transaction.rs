//! Trade-transaction repository: the append-only trade log.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use bazaar_core::trade::TradeTransaction;
use bazaar_shared::{AppError, AppResult};

use super::map_db_err;
use crate::entities::trade_transactions;

/// Trade-transaction repository. Insert and read only; there is no update or
/// delete path.
#[derive(Debug, Clone)]
pub struct TradeTransactionRepository {
    db: DatabaseConnection,
}

impl TradeTransactionRepository {
    /// Creates a new trade-transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a trade record by id.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TradeTransaction> {
        Self::get_by_id_in(&self.db, id).await
    }

    /// Fetches the trade record that settled a listing, if any.
    pub async fn get_by_listing_id(&self, listing_id: Uuid) -> AppResult<Option<TradeTransaction>> {
        Self::get_by_listing_id_in(&self.db, listing_id).await
    }

    /// Fetches a trade record on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the record does not exist.
    pub async fn get_by_id_in<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> AppResult<TradeTransaction> {
        let model = trade_transactions::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("TradeTransaction".into()))?;

        to_domain(model)
    }

    /// Fetches the trade record for a listing on the given connection.
    ///
    /// At most one record can exist per listing; the table enforces it.
    pub async fn get_by_listing_id_in<C: ConnectionTrait>(
        conn: &C,
        listing_id: Uuid,
    ) -> AppResult<Option<TradeTransaction>> {
        let model = trade_transactions::Entity::find()
            .filter(trade_transactions::Column::ListingId.eq(listing_id))
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;

        model.map(to_domain).transpose()
    }

    /// Appends a trade record on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Conflict` when a record for the same listing
    /// already exists (unique `listing_id`), and `AppError::NotFound` when
    /// the buyer, seller, listing, or currency row is missing.
    pub async fn create_in<C: ConnectionTrait>(
        conn: &C,
        record: &TradeTransaction,
    ) -> AppResult<Uuid> {
        let model = trade_transactions::ActiveModel {
            id: Set(record.id),
            buyer_account_id: Set(record.buyer_account_id),
            seller_account_id: Set(record.seller_account_id),
            listing_id: Set(record.listing_id),
            currency_code: Set(record.currency_code.as_str().to_owned()),
            amount: Set(record.amount),
            is_suspicious: Set(record.is_suspicious),
            transaction_date: Set(record.transaction_date.into()),
        }
        .insert(conn)
        .await
        .map_err(|e| map_db_err(&e))?;

        Ok(model.id)
    }
}

fn to_domain(model: trade_transactions::Model) -> AppResult<TradeTransaction> {
    Ok(TradeTransaction {
        id: model.id,
        buyer_account_id: model.buyer_account_id,
        seller_account_id: model.seller_account_id,
        listing_id: model.listing_id,
        currency_code: bazaar_shared::CurrencyCode::parse(&model.currency_code)?,
        amount: model.amount,
        is_suspicious: model.is_suspicious,
        transaction_date: model.transaction_date.into(),
    })
}
