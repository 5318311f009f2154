//! Trade transaction record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_shared::{AppError, CurrencyCode};

/// An immutable record of a completed trade.
///
/// One record per successful purchase; a listing id appears in at most one
/// record, ever. There is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeTransaction {
    /// Unique identifier.
    pub id: Uuid,
    /// Buying account.
    pub buyer_account_id: Uuid,
    /// Selling account.
    pub seller_account_id: Uuid,
    /// Listing the trade settled.
    pub listing_id: Uuid,
    /// Currency the trade was denominated in.
    pub currency_code: CurrencyCode,
    /// Settled amount (non-negative).
    pub amount: Decimal,
    /// Caller-supplied risk signal; never computed here.
    pub is_suspicious: bool,
    /// Timestamp shared by the debit, the credit, and this record.
    pub transaction_date: DateTime<Utc>,
}

impl TradeTransaction {
    /// Creates a new trade record with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a required id is nil, the currency
    /// code is blank, or the amount is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        buyer_account_id: Uuid,
        seller_account_id: Uuid,
        listing_id: Uuid,
        currency_code: &str,
        amount: Decimal,
        is_suspicious: bool,
        transaction_date: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if buyer_account_id.is_nil() {
            return Err(AppError::Validation("BuyerAccountId is required.".into()));
        }
        if seller_account_id.is_nil() {
            return Err(AppError::Validation("SellerAccountId is required.".into()));
        }
        if listing_id.is_nil() {
            return Err(AppError::Validation("ListingId is required.".into()));
        }
        if amount < Decimal::ZERO {
            return Err(AppError::Validation("Amount must be non-negative.".into()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            buyer_account_id,
            seller_account_id,
            listing_id,
            currency_code: CurrencyCode::parse(currency_code)?,
            amount,
            is_suspicious,
            transaction_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_transaction() {
        let record = TradeTransaction::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "usd",
            dec!(50),
            false,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(record.currency_code.as_str(), "USD");
        assert_eq!(record.amount, dec!(50));
        assert!(!record.is_suspicious);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = TradeTransaction::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "USD",
            dec!(-1),
            false,
            Utc::now(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_nil_listing_rejected() {
        let result = TradeTransaction::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::nil(),
            "USD",
            dec!(1),
            false,
            Utc::now(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
