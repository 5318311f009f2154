//! Item-type repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use bazaar_shared::{AppError, AppResult};

use super::map_db_err;
use crate::entities::items;

/// Item-type repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    db: DatabaseConnection,
}

impl ItemRepository {
    /// Creates a new item repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches an item type by id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the item type does not exist.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<items::Model> {
        items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("Item".into()))
    }

    /// Creates a new item type.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the name is blank.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
        is_trading: bool,
    ) -> AppResult<items::Model> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name is required.".into()));
        }

        items::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(description.map(ToString::to_string)),
            is_trading: Set(is_trading),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_db_err(&e))
    }

    /// Lists item types open for trading.
    pub async fn list_trading(&self) -> AppResult<Vec<items::Model>> {
        items::Entity::find()
            .filter(items::Column::IsTrading.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| map_db_err(&e))
    }
}
