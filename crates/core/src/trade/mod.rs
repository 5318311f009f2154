//! Marketplace trading domain.
//!
//! This module implements the domain types the settlement engine operates on:
//! - Wallets (per-account, per-currency balances)
//! - Listings and their status state machine
//! - Item entries (ownable item instances)
//! - Trade transactions (immutable trade records)

pub mod item_entry;
pub mod listing;
pub mod transaction;
pub mod wallet;

#[cfg(test)]
mod listing_props;

pub use item_entry::ItemEntry;
pub use listing::{Listing, ListingStatus};
pub use transaction::TradeTransaction;
pub use wallet::Wallet;
