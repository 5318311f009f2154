//! Initial database migration.
//!
//! Creates the enums, core tables, indexes, and seed currencies for the
//! marketplace schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ACCOUNTS & CURRENCIES
        // ============================================================
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(CURRENCIES_SQL).await?;

        // ============================================================
        // PART 3: ITEMS & OWNERSHIP
        // ============================================================
        db.execute_unprepared(ITEMS_SQL).await?;
        db.execute_unprepared(ITEM_ENTRIES_SQL).await?;

        // ============================================================
        // PART 4: WALLETS
        // ============================================================
        db.execute_unprepared(WALLETS_SQL).await?;

        // ============================================================
        // PART 5: LISTINGS & TRADES
        // ============================================================
        db.execute_unprepared(LISTINGS_SQL).await?;
        db.execute_unprepared(TRADE_TRANSACTIONS_SQL).await?;

        // ============================================================
        // PART 6: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_CURRENCIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Account lifecycle
CREATE TYPE account_status AS ENUM ('active', 'deleted');

-- Listing lifecycle
CREATE TYPE listing_status AS ENUM (
    'draft',
    'pending',
    'approved',
    'rejected',
    'closed'
);
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    display_name VARCHAR(255) NOT NULL,
    status account_status NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const CURRENCIES_SQL: &str = r"
CREATE TABLE currencies (
    currency_code VARCHAR(16) PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ITEMS_SQL: &str = r"
CREATE TABLE items (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    is_trading BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ITEM_ENTRIES_SQL: &str = r"
CREATE TABLE item_entries (
    id UUID PRIMARY KEY,
    owner_id UUID NOT NULL REFERENCES accounts(id),
    item_type_id UUID NOT NULL REFERENCES items(id),
    pseudonym VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_item_entries_owner ON item_entries(owner_id);
";

const WALLETS_SQL: &str = r"
CREATE TABLE wallets (
    account_id UUID NOT NULL REFERENCES accounts(id),
    currency_code VARCHAR(16) NOT NULL REFERENCES currencies(currency_code),
    balance DECIMAL(18, 2) NOT NULL DEFAULT 0 CHECK (balance >= 0),
    last_transaction_date TIMESTAMPTZ,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    PRIMARY KEY (account_id, currency_code)
);
";

const LISTINGS_SQL: &str = r"
CREATE TABLE listings (
    id UUID PRIMARY KEY,
    seller_id UUID NOT NULL REFERENCES accounts(id),
    item_entry_id UUID NOT NULL REFERENCES item_entries(id),
    currency_code VARCHAR(16) NOT NULL REFERENCES currencies(currency_code),
    price_amount DECIMAL(18, 2) NOT NULL CHECK (price_amount >= 0),
    status listing_status NOT NULL DEFAULT 'draft',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_listings_seller ON listings(seller_id);
CREATE INDEX idx_listings_status ON listings(status);
";

const TRADE_TRANSACTIONS_SQL: &str = r"
CREATE TABLE trade_transactions (
    id UUID PRIMARY KEY,
    buyer_account_id UUID NOT NULL REFERENCES accounts(id),
    seller_account_id UUID NOT NULL REFERENCES accounts(id),
    listing_id UUID NOT NULL UNIQUE REFERENCES listings(id),
    currency_code VARCHAR(16) NOT NULL REFERENCES currencies(currency_code),
    amount DECIMAL(18, 2) NOT NULL CHECK (amount >= 0),
    is_suspicious BOOLEAN NOT NULL DEFAULT FALSE,
    transaction_date TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_trade_transactions_buyer ON trade_transactions(buyer_account_id);
CREATE INDEX idx_trade_transactions_seller ON trade_transactions(seller_account_id);
";

const SEED_CURRENCIES_SQL: &str = r"
INSERT INTO currencies (currency_code, name) VALUES
    ('USD', 'US Dollar'),
    ('EUR', 'Euro'),
    ('GBP', 'Pound Sterling'),
    ('JPY', 'Japanese Yen')
ON CONFLICT (currency_code) DO NOTHING;
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS trade_transactions;
DROP TABLE IF EXISTS listings;
DROP TABLE IF EXISTS wallets;
DROP TABLE IF EXISTS item_entries;
DROP TABLE IF EXISTS items;
DROP TABLE IF EXISTS currencies;
DROP TABLE IF EXISTS accounts;
DROP TYPE IF EXISTS listing_status;
DROP TYPE IF EXISTS account_status;
";
