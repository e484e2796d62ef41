//! # Inventory Ledger
//!
//! A single-category record of general inventory items that can be saved
//! and restored as a whole.
//!
//! The ledger does not touch files. The store crate serializes
//! [`InventoryLedger::items`] and hands the decoded sequence back to
//! [`InventoryLedger::restore`].

use tracing::info;

use crate::error::RepoResult;
use crate::repository::KeyedRepository;
use crate::types::{EntityId, InventoryItem};

/// Keyed ledger of [`InventoryItem`]s.
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    items: KeyedRepository<InventoryItem>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new item.
    ///
    /// Fails with `InvalidQuantity` on a negative quantity and `DuplicateKey`
    /// on a reused id.
    pub fn record(&mut self, item: InventoryItem) -> RepoResult<()> {
        self.items.add_stocked(item)
    }

    pub fn get(&self, id: EntityId) -> RepoResult<InventoryItem> {
        self.items.get(id)
    }

    pub fn update_quantity(&mut self, id: EntityId, quantity: i64) -> RepoResult<()> {
        self.items.update_quantity(id, quantity)
    }

    pub fn remove(&mut self, id: EntityId) -> RepoResult<()> {
        self.items.remove(id)
    }

    /// Snapshot in recording order.
    pub fn items(&self) -> Vec<InventoryItem> {
        self.items.list_all()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the ledger with a saved snapshot.
    ///
    /// Duplicate ids in `items` keep their first occurrence. Returns the
    /// number of items now in the ledger.
    pub fn restore(&mut self, items: Vec<InventoryItem>) -> usize {
        let offered = items.len();
        let kept = self.items.replace_all(items);
        info!(offered, kept, "Inventory ledger restored");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use chrono::{TimeZone, Utc};

    fn item(id: EntityId, name: &str) -> InventoryItem {
        let stamp = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        InventoryItem::new(id, name, 5, stamp)
    }

    #[test]
    fn test_record_rejects_reused_id() {
        let mut ledger = InventoryLedger::new();
        ledger.record(item(1, "Stapler")).unwrap();

        assert_eq!(ledger.record(item(1, "Tape")), Err(RepoError::DuplicateKey(1)));
        assert_eq!(ledger.get(1).unwrap().name, "Stapler");
    }

    #[test]
    fn test_record_rejects_negative_quantity() {
        let mut ledger = InventoryLedger::new();
        let stamp = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();

        assert_eq!(
            ledger.record(InventoryItem::new(4, "Glue", -1, stamp)),
            Err(RepoError::InvalidQuantity(-1))
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_restore_discards_previous_contents() {
        let mut ledger = InventoryLedger::new();
        ledger.record(item(9, "Old")).unwrap();

        let kept = ledger.restore(vec![item(1, "A"), item(2, "B"), item(1, "A again")]);

        assert_eq!(kept, 2);
        let names: Vec<_> = ledger.items().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(ledger.get(9), Err(RepoError::NotFound(9)));
    }

    #[test]
    fn test_restore_empty_snapshot_clears() {
        let mut ledger = InventoryLedger::new();
        ledger.record(item(1, "A")).unwrap();
        assert_eq!(ledger.restore(Vec::new()), 0);
        assert!(ledger.is_empty());
    }
}
