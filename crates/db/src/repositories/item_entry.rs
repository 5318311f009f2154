//! Item-entry repository: the ownership store.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, sea_query::Expr,
};
use uuid::Uuid;

use bazaar_core::trade::ItemEntry;
use bazaar_shared::{AppError, AppResult};

use super::map_db_err;
use crate::entities::{accounts, item_entries, items, sea_orm_active_enums::AccountStatus};

/// Item-entry repository for ownership operations.
#[derive(Debug, Clone)]
pub struct ItemEntryRepository {
    db: DatabaseConnection,
}

impl ItemEntryRepository {
    /// Creates a new item-entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches an item entry by id.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ItemEntry> {
        Self::get_by_id_in(&self.db, id).await
    }

    /// Persists a new item entry.
    pub async fn create(&self, entry: &ItemEntry) -> AppResult<Uuid> {
        Self::create_in(&self.db, entry).await
    }

    /// Reassigns ownership of an item entry.
    pub async fn transfer_ownership(&self, id: Uuid, new_owner_id: Uuid) -> AppResult<()> {
        Self::transfer_ownership_in(&self.db, id, new_owner_id).await
    }

    /// Fetches an item entry on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the entry does not exist.
    pub async fn get_by_id_in<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<ItemEntry> {
        let model = item_entries::Entity::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("ItemEntry".into()))?;

        ItemEntry::from_parts(
            model.id,
            model.owner_id,
            model.item_type_id,
            model.pseudonym,
            model.created_at.into(),
        )
    }

    /// Persists a new item entry on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the owner or item type cannot be
    /// resolved.
    pub async fn create_in<C: ConnectionTrait>(conn: &C, entry: &ItemEntry) -> AppResult<Uuid> {
        let owner = accounts::Entity::find_by_id(entry.owner_id)
            .filter(accounts::Column::Status.ne(AccountStatus::Deleted))
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if owner.is_none() {
            return Err(AppError::NotFound("Account".into()));
        }

        let item_type = items::Entity::find_by_id(entry.item_type_id)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if item_type.is_none() {
            return Err(AppError::NotFound("Item".into()));
        }

        let model = item_entries::ActiveModel {
            id: Set(entry.id),
            owner_id: Set(entry.owner_id),
            item_type_id: Set(entry.item_type_id),
            pseudonym: Set(entry.pseudonym.clone()),
            created_at: Set(entry.created_at.into()),
        }
        .insert(conn)
        .await
        .map_err(|e| map_db_err(&e))?;

        Ok(model.id)
    }

    /// Atomically rewrites the owner of an item entry on the given
    /// connection, preserving every other column.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the entry does not exist.
    pub async fn transfer_ownership_in<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        new_owner_id: Uuid,
    ) -> AppResult<()> {
        let result = item_entries::Entity::update_many()
            .col_expr(item_entries::Column::OwnerId, Expr::value(new_owner_id))
            .filter(item_entries::Column::Id.eq(id))
            .exec(conn)
            .await
            .map_err(|e| map_db_err(&e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("ItemEntry".into()));
        }
        Ok(())
    }
}
