//! `SeaORM` Entity for the items table (item types).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_trading: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_entries::Entity")]
    ItemEntries,
}

impl Related<super::item_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
