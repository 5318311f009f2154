//! Listing repository.

use chrono::Utc;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QuerySelect, Set,
    sea_query::{Expr, LockType},
};
use uuid::Uuid;

use bazaar_core::trade::{Listing, ListingStatus};
use bazaar_shared::{AppError, AppResult};

use super::map_db_err;
use crate::entities::{
    accounts, currencies, item_entries, listings, sea_orm_active_enums::AccountStatus,
};

/// Listing repository for lifecycle operations.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    db: DatabaseConnection,
}

impl ListingRepository {
    /// Creates a new listing repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a listing by id.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Listing> {
        Self::get_by_id_in(&self.db, id).await
    }

    /// Persists a new listing.
    pub async fn create(&self, listing: &Listing) -> AppResult<Uuid> {
        Self::create_in(&self.db, listing).await
    }

    /// Transitions a listing to `status`, refreshing `updated_at`.
    pub async fn update_status(&self, id: Uuid, status: ListingStatus) -> AppResult<()> {
        Self::update_status_in(&self.db, id, status).await
    }

    /// Fetches a listing on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the listing does not exist.
    pub async fn get_by_id_in<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Listing> {
        let model = listings::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("Listing".into()))?;

        to_domain(model)
    }

    /// Fetches a listing and takes a row-level lock (`SELECT ... FOR UPDATE`).
    ///
    /// Only meaningful inside an open transaction: the lock serializes
    /// concurrent purchases of the same listing so the loser observes the
    /// winner's `Closed` status instead of racing past the `Approved` check.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the listing does not exist.
    pub async fn get_for_update_in<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Listing> {
        let model = listings::Entity::find_by_id(id)
            .lock(LockType::Update)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("Listing".into()))?;

        to_domain(model)
    }

    /// Persists a new listing on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the seller, item entry, or currency
    /// cannot be resolved.
    pub async fn create_in<C: ConnectionTrait>(conn: &C, listing: &Listing) -> AppResult<Uuid> {
        let seller = accounts::Entity::find_by_id(listing.seller_id)
            .filter(accounts::Column::Status.ne(AccountStatus::Deleted))
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if seller.is_none() {
            return Err(AppError::NotFound("Account".into()));
        }

        let entry = item_entries::Entity::find_by_id(listing.item_entry_id)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if entry.is_none() {
            return Err(AppError::NotFound("ItemEntry".into()));
        }

        let currency = currencies::Entity::find_by_id(listing.currency_code.as_str().to_owned())
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if currency.is_none() {
            return Err(AppError::NotFound("Currency".into()));
        }

        let model = listings::ActiveModel {
            id: Set(listing.id),
            seller_id: Set(listing.seller_id),
            item_entry_id: Set(listing.item_entry_id),
            currency_code: Set(listing.currency_code.as_str().to_owned()),
            price_amount: Set(listing.price_amount),
            status: Set(listing.status.into()),
            created_at: Set(listing.created_at.into()),
            updated_at: Set(listing.updated_at.into()),
        }
        .insert(conn)
        .await
        .map_err(|e| map_db_err(&e))?;

        Ok(model.id)
    }

    /// Transitions a listing to `status` on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the listing does not exist.
    pub async fn update_status_in<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        status: ListingStatus,
    ) -> AppResult<()> {
        let db_status: crate::entities::sea_orm_active_enums::ListingStatus = status.into();
        let result = listings::Entity::update_many()
            // as_enum() keeps the Postgres enum cast that a plain value loses.
            .col_expr(listings::Column::Status, db_status.as_enum())
            .col_expr(listings::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(listings::Column::Id.eq(id))
            .exec(conn)
            .await
            .map_err(|e| map_db_err(&e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Listing".into()));
        }
        Ok(())
    }
}

fn to_domain(model: listings::Model) -> AppResult<Listing> {
    Listing::from_parts(
        model.id,
        model.seller_id,
        model.item_entry_id,
        &model.currency_code,
        model.price_amount,
        model.status.into(),
        model.created_at.into(),
        model.updated_at.into(),
    )
}
