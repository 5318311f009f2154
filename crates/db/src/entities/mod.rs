//! `SeaORM` entity definitions.

pub mod accounts;
pub mod currencies;
pub mod item_entries;
pub mod items;
pub mod listings;
pub mod sea_orm_active_enums;
pub mod trade_transactions;
pub mod wallets;
