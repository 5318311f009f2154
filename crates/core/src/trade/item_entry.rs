//! Item entry domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_shared::AppError;

/// A concrete, ownable instance of an item type.
///
/// Exactly one owner at any time; ownership is reassigned exactly once per
/// successful trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Current owning account.
    pub owner_id: Uuid,
    /// Item type this entry is an instance of.
    pub item_type_id: Uuid,
    /// Optional per-instance name chosen by the owner.
    pub pseudonym: Option<String>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

impl ItemEntry {
    /// Creates a new item entry with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the owner or item type id is nil.
    pub fn new(
        owner_id: Uuid,
        item_type_id: Uuid,
        pseudonym: Option<String>,
    ) -> Result<Self, AppError> {
        Self::from_parts(Uuid::new_v4(), owner_id, item_type_id, pseudonym, Utc::now())
    }

    /// Reconstructs an item entry from stored parts, re-validating invariants.
    pub fn from_parts(
        id: Uuid,
        owner_id: Uuid,
        item_type_id: Uuid,
        pseudonym: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        if owner_id.is_nil() {
            return Err(AppError::Validation("OwnerId is required.".into()));
        }
        if item_type_id.is_nil() {
            return Err(AppError::Validation("ItemTypeId is required.".into()));
        }

        Ok(Self {
            id,
            owner_id,
            item_type_id,
            pseudonym,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let owner = Uuid::new_v4();
        let item_type = Uuid::new_v4();
        let entry = ItemEntry::new(owner, item_type, Some("Lucky".into())).unwrap();
        assert_eq!(entry.owner_id, owner);
        assert_eq!(entry.item_type_id, item_type);
        assert_eq!(entry.pseudonym.as_deref(), Some("Lucky"));
    }

    #[test]
    fn test_nil_ids_rejected() {
        assert!(ItemEntry::new(Uuid::nil(), Uuid::new_v4(), None).is_err());
        assert!(ItemEntry::new(Uuid::new_v4(), Uuid::nil(), None).is_err());
    }
}
