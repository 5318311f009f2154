//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - The trade settlement engine (`trading::TradingService`)

pub mod entities;
pub mod migration;
pub mod repositories;
pub mod trading;

pub use repositories::{
    AccountRepository, ItemEntryRepository, ItemRepository, ListingRepository,
    TradeTransactionRepository, WalletRepository,
};
pub use trading::{PurchaseRequest, TradingService};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
