//! Listing aggregate and its status state machine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_shared::{AppError, CurrencyCode};

/// Listing status in the sale lifecycle.
///
/// `Rejected` and `Closed` are terminal. The settlement engine performs
/// exactly one transition: `Approved` -> `Closed` after a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Listing is being drafted by the seller.
    Draft,
    /// Listing has been submitted for moderation.
    Pending,
    /// Listing is live and purchasable.
    Approved,
    /// Listing was rejected by moderation.
    Rejected,
    /// Listing was sold and is closed.
    Closed,
}

impl ListingStatus {
    /// Returns true if no transition may leave this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Closed)
    }

    /// Returns true if the transition to `next` is allowed.
    #[must_use]
    pub const fn can_transition(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Pending)
                | (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Closed)
        )
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for ListingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "closed" => Ok(Self::Closed),
            other => Err(AppError::Validation(format!(
                "Unknown listing status: {other}"
            ))),
        }
    }
}

/// A sell order for one item entry at a fixed price in a fixed currency.
///
/// Price and currency are immutable after creation; only the status and
/// `updated_at` ever change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier.
    pub id: Uuid,
    /// Account selling the item entry.
    pub seller_id: Uuid,
    /// Item entry being sold.
    pub item_entry_id: Uuid,
    /// Currency the price is denominated in.
    pub currency_code: CurrencyCode,
    /// Asking price (non-negative).
    pub price_amount: Decimal,
    /// Current lifecycle status.
    pub status: ListingStatus,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Creates a new listing with a fresh id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a required id is nil, the currency
    /// code is blank, or the price is negative.
    pub fn new(
        seller_id: Uuid,
        item_entry_id: Uuid,
        currency_code: &str,
        price_amount: Decimal,
        status: ListingStatus,
    ) -> Result<Self, AppError> {
        let now = Utc::now();
        Self::from_parts(
            Uuid::new_v4(),
            seller_id,
            item_entry_id,
            currency_code,
            price_amount,
            status,
            now,
            now,
        )
    }

    /// Reconstructs a listing from stored parts, re-validating invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Uuid,
        seller_id: Uuid,
        item_entry_id: Uuid,
        currency_code: &str,
        price_amount: Decimal,
        status: ListingStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if seller_id.is_nil() {
            return Err(AppError::Validation("SellerId is required.".into()));
        }
        if item_entry_id.is_nil() {
            return Err(AppError::Validation("ItemEntryId is required.".into()));
        }
        if price_amount < Decimal::ZERO {
            return Err(AppError::Validation(
                "PriceAmount must be non-negative.".into(),
            ));
        }

        Ok(Self {
            id,
            seller_id,
            item_entry_id,
            currency_code: CurrencyCode::parse(currency_code)?,
            price_amount,
            status,
            created_at,
            updated_at,
        })
    }

    /// Validates that `buyer_id` may purchase this listing.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the listing is not `Approved` or
    /// when the buyer is the seller. No partial checks: the first violated
    /// rule is reported.
    pub fn validate_purchase(&self, buyer_id: Uuid) -> Result<(), AppError> {
        if self.status != ListingStatus::Approved {
            return Err(AppError::Validation(
                "Listing is not available for purchase.".into(),
            ));
        }
        if self.seller_id == buyer_id {
            return Err(AppError::Validation("Seller cannot buy own listing.".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn approved_listing() -> Listing {
        Listing::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "usd",
            dec!(50),
            ListingStatus::Approved,
        )
        .unwrap()
    }

    #[rstest]
    #[case(ListingStatus::Draft, ListingStatus::Pending, true)]
    #[case(ListingStatus::Pending, ListingStatus::Approved, true)]
    #[case(ListingStatus::Pending, ListingStatus::Rejected, true)]
    #[case(ListingStatus::Approved, ListingStatus::Closed, true)]
    #[case(ListingStatus::Draft, ListingStatus::Approved, false)]
    #[case(ListingStatus::Approved, ListingStatus::Draft, false)]
    #[case(ListingStatus::Closed, ListingStatus::Approved, false)]
    #[case(ListingStatus::Rejected, ListingStatus::Pending, false)]
    fn test_status_transitions(
        #[case] from: ListingStatus,
        #[case] to: ListingStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition(to), allowed);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ListingStatus::Closed.is_terminal());
        assert!(ListingStatus::Rejected.is_terminal());
        assert!(!ListingStatus::Approved.is_terminal());
        assert!(!ListingStatus::Draft.is_terminal());
        assert!(!ListingStatus::Pending.is_terminal());
    }

    #[test]
    fn test_new_normalizes_currency() {
        let listing = approved_listing();
        assert_eq!(listing.currency_code.as_str(), "USD");
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = Listing::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "USD",
            dec!(-1),
            ListingStatus::Draft,
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_nil_seller_rejected() {
        let result = Listing::new(
            Uuid::nil(),
            Uuid::new_v4(),
            "USD",
            dec!(10),
            ListingStatus::Draft,
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_purchase_happy_path() {
        let listing = approved_listing();
        assert!(listing.validate_purchase(Uuid::new_v4()).is_ok());
    }

    #[rstest]
    #[case(ListingStatus::Draft)]
    #[case(ListingStatus::Pending)]
    #[case(ListingStatus::Rejected)]
    #[case(ListingStatus::Closed)]
    fn test_validate_purchase_requires_approved(#[case] status: ListingStatus) {
        let mut listing = approved_listing();
        listing.status = status;
        let err = listing.validate_purchase(Uuid::new_v4()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Listing is not available for purchase."
        );
    }

    #[test]
    fn test_validate_purchase_rejects_self_trade() {
        let listing = approved_listing();
        let err = listing.validate_purchase(listing.seller_id).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Seller cannot buy own listing."
        );
    }
}
