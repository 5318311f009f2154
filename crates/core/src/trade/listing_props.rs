//! Property-based tests for the listing status state machine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::listing::{Listing, ListingStatus};

/// Strategy to generate any listing status.
fn status_strategy() -> impl Strategy<Value = ListingStatus> {
    prop_oneof![
        Just(ListingStatus::Draft),
        Just(ListingStatus::Pending),
        Just(ListingStatus::Approved),
        Just(ListingStatus::Rejected),
        Just(ListingStatus::Closed),
    ]
}

/// Strategy to generate a non-negative price with two decimal places.
fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Terminal statuses admit no outgoing transition at all.
    #[test]
    fn prop_terminal_statuses_are_absorbing(
        from in status_strategy(),
        to in status_strategy(),
    ) {
        if from.is_terminal() {
            prop_assert!(!from.can_transition(to));
        }
    }

    /// Closing is only reachable from Approved.
    #[test]
    fn prop_only_approved_can_close(from in status_strategy()) {
        prop_assert_eq!(
            from.can_transition(ListingStatus::Closed),
            from == ListingStatus::Approved
        );
    }

    /// No status transitions to itself.
    #[test]
    fn prop_no_self_transition(status in status_strategy()) {
        prop_assert!(!status.can_transition(status));
    }

    /// Any non-negative price is accepted; the round-tripped listing keeps it.
    #[test]
    fn prop_non_negative_price_accepted(
        price in price_strategy(),
        status in status_strategy(),
    ) {
        let listing = Listing::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "usd",
            price,
            status,
        );
        prop_assert!(listing.is_ok());
        prop_assert_eq!(listing.unwrap().price_amount, price);
    }

    /// Purchase validation never passes for a non-Approved listing.
    #[test]
    fn prop_purchase_requires_approved(status in status_strategy()) {
        let mut listing = Listing::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "usd",
            Decimal::ONE,
            ListingStatus::Approved,
        )
        .unwrap();
        listing.status = status;

        let result = listing.validate_purchase(Uuid::new_v4());
        prop_assert_eq!(result.is_ok(), status == ListingStatus::Approved);
    }
}
