//! Database enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_status")]
pub enum AccountStatus {
    /// Account is active and may trade.
    #[sea_orm(string_value = "active")]
    Active,
    /// Account has been soft-deleted.
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

/// Listing lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "listing_status")]
pub enum ListingStatus {
    /// Listing is being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Listing is awaiting moderation.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Listing is live and purchasable.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Listing was rejected.
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Listing was sold and closed.
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl From<bazaar_core::trade::ListingStatus> for ListingStatus {
    fn from(status: bazaar_core::trade::ListingStatus) -> Self {
        match status {
            bazaar_core::trade::ListingStatus::Draft => Self::Draft,
            bazaar_core::trade::ListingStatus::Pending => Self::Pending,
            bazaar_core::trade::ListingStatus::Approved => Self::Approved,
            bazaar_core::trade::ListingStatus::Rejected => Self::Rejected,
            bazaar_core::trade::ListingStatus::Closed => Self::Closed,
        }
    }
}

impl From<ListingStatus> for bazaar_core::trade::ListingStatus {
    fn from(status: ListingStatus) -> Self {
        match status {
            ListingStatus::Draft => Self::Draft,
            ListingStatus::Pending => Self::Pending,
            ListingStatus::Approved => Self::Approved,
            ListingStatus::Rejected => Self::Rejected,
            ListingStatus::Closed => Self::Closed,
        }
    }
}
