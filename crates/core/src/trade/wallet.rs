//! Wallet domain type.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_shared::{AppError, CurrencyCode};

/// A per-account, per-currency balance record.
///
/// Keyed by (account, currency). The balance is never negative; any operation
/// that would make it so must fail without partial effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Owning account.
    pub account_id: Uuid,
    /// Currency this wallet holds.
    pub currency_code: CurrencyCode,
    /// Current balance (non-negative).
    pub balance: Decimal,
    /// Timestamp of the most recent balance change, if any.
    pub last_transaction_date: Option<DateTime<Utc>>,
    /// Whether the wallet is active.
    pub is_active: bool,
}

impl Wallet {
    /// Creates a wallet, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the account id is nil, the
    /// currency code is blank, or the balance is negative.
    pub fn new(
        account_id: Uuid,
        currency_code: &str,
        balance: Decimal,
        last_transaction_date: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> Result<Self, AppError> {
        if account_id.is_nil() {
            return Err(AppError::Validation("AccountId is required.".into()));
        }
        if balance < Decimal::ZERO {
            return Err(AppError::Validation(
                "Balance must be non-negative.".into(),
            ));
        }

        Ok(Self {
            account_id,
            currency_code: CurrencyCode::parse(currency_code)?,
            balance,
            last_transaction_date,
            is_active,
        })
    }

    /// Creates an empty, active wallet.
    ///
    /// Used by the settlement engine to auto-provision the seller side.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` on a nil account id or blank code.
    pub fn empty(account_id: Uuid, currency_code: &str) -> Result<Self, AppError> {
        Self::new(account_id, currency_code, Decimal::ZERO, None, true)
    }

    /// Returns true if the balance covers `amount`.
    #[must_use]
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_wallet_normalizes_currency() {
        let wallet = Wallet::new(Uuid::new_v4(), "usd", dec!(100), None, true).unwrap();
        assert_eq!(wallet.currency_code.as_str(), "USD");
        assert_eq!(wallet.balance, dec!(100));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let result = Wallet::new(Uuid::new_v4(), "USD", dec!(-0.01), None, true);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_nil_account_rejected() {
        let result = Wallet::new(Uuid::nil(), "USD", dec!(1), None, true);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_wallet() {
        let wallet = Wallet::empty(Uuid::new_v4(), "eur").unwrap();
        assert_eq!(wallet.balance, Decimal::ZERO);
        assert!(wallet.is_active);
        assert!(wallet.last_transaction_date.is_none());
    }

    #[test]
    fn test_can_cover() {
        let wallet = Wallet::new(Uuid::new_v4(), "USD", dec!(50), None, true).unwrap();
        assert!(wallet.can_cover(dec!(50)));
        assert!(wallet.can_cover(dec!(49.99)));
        assert!(!wallet.can_cover(dec!(50.01)));
    }
}
