//! `SeaORM` Entity for the trade_transactions table.
//!
//! Append-only: rows are never updated or deleted, and `listing_id` is
//! unique so a closed listing can never settle twice.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "trade_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub buyer_account_id: Uuid,
    pub seller_account_id: Uuid,
    #[sea_orm(unique)]
    pub listing_id: Uuid,
    pub currency_code: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub amount: Decimal,
    pub is_suspicious: bool,
    pub transaction_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::BuyerAccountId",
        to = "super::accounts::Column::Id"
    )]
    Buyer,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::SellerAccountId",
        to = "super::accounts::Column::Id"
    )]
    Seller,
    #[sea_orm(
        belongs_to = "super::listings::Entity",
        from = "Column::ListingId",
        to = "super::listings::Column::Id"
    )]
    Listings,
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::CurrencyCode",
        to = "super::currencies::Column::CurrencyCode"
    )]
    Currencies,
}

impl Related<super::listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listings.def()
    }
}

impl Related<super::currencies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Currencies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
