//! Core business logic for Bazaar.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types and validation rules live here.
//!
//! # Modules
//!
//! - `trade` - Wallets, listings, item entries, and trade transactions
//! - `auth` - Password hashing

pub mod auth;
pub mod trade;
