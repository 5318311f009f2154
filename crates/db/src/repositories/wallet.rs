//! Wallet repository: the per-(account, currency) balance ledger.
//!
//! Balance changes are single conditional `UPDATE` statements so two
//! concurrent writers can never lose an update, and a debit can never drive a
//! balance negative even when the pre-check raced a concurrent debit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, sea_query::Expr,
};
use uuid::Uuid;

use bazaar_core::trade::Wallet;
use bazaar_shared::{AppError, AppResult, CurrencyCode};

use super::map_db_err;
use crate::entities::{accounts, currencies, sea_orm_active_enums::AccountStatus, wallets};

/// Wallet repository for balance operations.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a wallet by its (account, currency) key.
    pub async fn get(&self, account_id: Uuid, currency_code: &CurrencyCode) -> AppResult<Wallet> {
        Self::get_in(&self.db, account_id, currency_code).await
    }

    /// Creates or fully replaces a wallet record.
    pub async fn upsert(&self, wallet: &Wallet) -> AppResult<()> {
        Self::upsert_in(&self.db, wallet).await
    }

    /// Atomically adds `amount` to a wallet balance.
    pub async fn increase_balance(
        &self,
        account_id: Uuid,
        currency_code: &CurrencyCode,
        amount: Decimal,
        when: DateTime<Utc>,
    ) -> AppResult<()> {
        Self::increase_balance_in(&self.db, account_id, currency_code, amount, when).await
    }

    /// Atomically subtracts `amount` from a wallet balance.
    pub async fn decrease_balance(
        &self,
        account_id: Uuid,
        currency_code: &CurrencyCode,
        amount: Decimal,
        when: DateTime<Utc>,
    ) -> AppResult<()> {
        Self::decrease_balance_in(&self.db, account_id, currency_code, amount, when).await
    }

    /// Fetches a wallet on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no wallet exists for the pair.
    pub async fn get_in<C: ConnectionTrait>(
        conn: &C,
        account_id: Uuid,
        currency_code: &CurrencyCode,
    ) -> AppResult<Wallet> {
        let model = wallets::Entity::find_by_id((account_id, currency_code.as_str().to_owned()))
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?
            .ok_or_else(|| AppError::NotFound("Wallet".into()))?;

        to_domain(model)
    }

    /// Creates or fully replaces a wallet record on the given connection.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when the referenced account or currency
    /// does not exist.
    pub async fn upsert_in<C: ConnectionTrait>(conn: &C, wallet: &Wallet) -> AppResult<()> {
        let currency = currencies::Entity::find_by_id(wallet.currency_code.as_str().to_owned())
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if currency.is_none() {
            return Err(AppError::NotFound("Currency".into()));
        }

        let account = accounts::Entity::find_by_id(wallet.account_id)
            .filter(accounts::Column::Status.ne(AccountStatus::Deleted))
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;
        if account.is_none() {
            return Err(AppError::NotFound("Account".into()));
        }

        let key = (
            wallet.account_id,
            wallet.currency_code.as_str().to_owned(),
        );
        let existing = wallets::Entity::find_by_id(key)
            .one(conn)
            .await
            .map_err(|e| map_db_err(&e))?;

        match existing {
            None => {
                wallets::ActiveModel {
                    account_id: Set(wallet.account_id),
                    currency_code: Set(wallet.currency_code.as_str().to_owned()),
                    balance: Set(wallet.balance),
                    last_transaction_date: Set(wallet.last_transaction_date.map(Into::into)),
                    is_active: Set(wallet.is_active),
                }
                .insert(conn)
                .await
                .map_err(|e| map_db_err(&e))?;
            }
            Some(model) => {
                let mut active: wallets::ActiveModel = model.into();
                active.balance = Set(wallet.balance);
                active.last_transaction_date = Set(wallet.last_transaction_date.map(Into::into));
                active.is_active = Set(wallet.is_active);
                active.update(conn).await.map_err(|e| map_db_err(&e))?;
            }
        }

        Ok(())
    }

    /// Adds `amount` to a wallet balance as one atomic increment.
    ///
    /// The amount must be non-negative; callers validate it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no wallet exists for the pair.
    pub async fn increase_balance_in<C: ConnectionTrait>(
        conn: &C,
        account_id: Uuid,
        currency_code: &CurrencyCode,
        amount: Decimal,
        when: DateTime<Utc>,
    ) -> AppResult<()> {
        let result = wallets::Entity::update_many()
            .col_expr(
                wallets::Column::Balance,
                Expr::col(wallets::Column::Balance).add(amount),
            )
            .col_expr(wallets::Column::LastTransactionDate, Expr::value(when))
            .filter(wallets::Column::AccountId.eq(account_id))
            .filter(wallets::Column::CurrencyCode.eq(currency_code.as_str()))
            .exec(conn)
            .await
            .map_err(|e| map_db_err(&e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Wallet".into()));
        }
        Ok(())
    }

    /// Subtracts `amount` from a wallet balance.
    ///
    /// The write is guarded by `balance >= amount` in the `UPDATE` itself, so
    /// a concurrent debit that drained the wallet between the pre-check and
    /// the write surfaces as `InsufficientFunds`, never as a negative
    /// balance.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no wallet exists for the pair, and
    /// `AppError::InsufficientFunds` when the balance cannot cover `amount`.
    pub async fn decrease_balance_in<C: ConnectionTrait>(
        conn: &C,
        account_id: Uuid,
        currency_code: &CurrencyCode,
        amount: Decimal,
        when: DateTime<Utc>,
    ) -> AppResult<()> {
        let wallet = Self::get_in(conn, account_id, currency_code).await?;
        if !wallet.can_cover(amount) {
            return Err(AppError::InsufficientFunds("Wallet".into()));
        }

        let result = wallets::Entity::update_many()
            .col_expr(
                wallets::Column::Balance,
                Expr::col(wallets::Column::Balance).sub(amount),
            )
            .col_expr(wallets::Column::LastTransactionDate, Expr::value(when))
            .filter(wallets::Column::AccountId.eq(account_id))
            .filter(wallets::Column::CurrencyCode.eq(currency_code.as_str()))
            .filter(wallets::Column::Balance.gte(amount))
            .exec(conn)
            .await
            .map_err(|e| map_db_err(&e))?;

        if result.rows_affected == 0 {
            // The guarded update lost a race with another debit.
            return Err(AppError::InsufficientFunds("Wallet".into()));
        }
        Ok(())
    }
}

fn to_domain(model: wallets::Model) -> AppResult<Wallet> {
    Wallet::new(
        model.account_id,
        &model.currency_code,
        model.balance,
        model.last_transaction_date.map(Into::into),
        model.is_active,
    )
}
