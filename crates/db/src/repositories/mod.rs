//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding the
//! `SeaORM` implementation details from the rest of the application. Every
//! repository exposes pool-backed methods on `&self` plus `*_in` associated
//! functions that run on any [`sea_orm::ConnectionTrait`] implementor, so the
//! settlement engine can drive the same operations inside an open
//! transaction.

pub mod account;
pub mod item;
pub mod item_entry;
pub mod listing;
pub mod trade_transaction;
pub mod wallet;

pub use account::AccountRepository;
pub use item::ItemRepository;
pub use item_entry::ItemEntryRepository;
pub use listing::ListingRepository;
pub use trade_transaction::TradeTransactionRepository;
pub use wallet::WalletRepository;

use bazaar_shared::AppError;
use sea_orm::{DbErr, SqlErr};

/// Maps a database error onto the application error taxonomy.
///
/// Unique-constraint violations and serialization/deadlock failures become
/// `Conflict` (retryable); foreign-key violations mean a referenced row does
/// not exist and become `NotFound`; everything else is `Database`.
pub(crate) fn map_db_err(err: &DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => return AppError::Conflict(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return AppError::NotFound(msg),
        _ => {}
    }

    let msg = err.to_string();
    let lowered = msg.to_lowercase();
    if lowered.contains("40001")
        || lowered.contains("could not serialize")
        || lowered.contains("deadlock")
    {
        AppError::Conflict(msg)
    } else {
        AppError::Database(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_failure_maps_to_conflict() {
        let err = DbErr::Custom("could not serialize access due to concurrent update".into());
        assert!(matches!(map_db_err(&err), AppError::Conflict(_)));
    }

    #[test]
    fn test_deadlock_maps_to_conflict() {
        let err = DbErr::Custom("deadlock detected".into());
        assert!(matches!(map_db_err(&err), AppError::Conflict(_)));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err = DbErr::Custom("connection reset by peer".into());
        assert!(matches!(map_db_err(&err), AppError::Database(_)));
    }
}
