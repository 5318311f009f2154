//! Account repository for database operations.

use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use bazaar_shared::{AppError, AppResult};

use super::map_db_err;
use crate::entities::{accounts, sea_orm_active_enums::AccountStatus};

/// Account repository. Deleted accounts are soft-deleted; lookups here treat
/// them as absent.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active account by email. Deleted accounts are invisible here,
    /// so they cannot log in.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<accounts::Model>> {
        accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .filter(accounts::Column::Status.ne(AccountStatus::Deleted))
            .one(&self.db)
            .await
            .map_err(|e| map_db_err(&e))
    }

    /// Finds an active account by id.
    pub async fn get_active(&self, id: Uuid) -> AppResult<accounts::Model> {
        Self::get_active_in(&self.db, id).await
    }

    /// Finds an active account by id on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no active account has this id.
    pub async fn get_active_in<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> AppResult<accounts::Model> {
        accounts::Entity::find_by_id(id)
            .filter(accounts::Column::Status.ne(AccountStatus::Deleted))
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("Account".into()))
    }
}
