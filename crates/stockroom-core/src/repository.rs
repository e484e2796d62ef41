//! # Keyed Repository
//!
//! Uniqueness-enforced, key-addressed storage for one entity type.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KeyedRepository<T>                                   │
//! │                                                                         │
//! │   index: HashMap<id, slot>          entries: Vec<T> (insertion order)  │
//! │   ┌──────┬──────┐                   ┌──────┬──────┬──────┐             │
//! │   │  7   │  0   │ ────────────────► │ id 7 │ id 2 │ id 9 │             │
//! │   │  2   │  1   │                   └──────┴──────┴──────┘             │
//! │   │  9   │  2   │                                                       │
//! │   └──────┴──────┘                                                       │
//! │                                                                         │
//! │   add(x)            → DuplicateKey if index has x.id, else push        │
//! │   add_stocked(x)    → InvalidQuantity if x.quantity < 0, then add      │
//! │   get / remove      → NotFound if index lacks id                       │
//! │   update_quantity   → InvalidQuantity if q < 0, then NotFound          │
//! │   list_all          → cloned snapshot, insertion order                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one entry per id; `add` never overwrites.
//! - `index[id] == slot` iff `entries[slot].id() == id`.
//! - A failed operation leaves the repository exactly as it was.
//!
//! ## Concurrency
//! The repository is a plain owned value. Sharing it across threads means
//! wrapping it in a lock and treating `add`, `remove` and `update_quantity`
//! as critical sections, so two racing `add`s of one id yield exactly one
//! `DuplicateKey`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{RepoError, RepoResult};
use crate::types::{Entity, EntityId, Stocked};

/// Generic keyed store.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{ElectronicItem, KeyedRepository, RepoError};
///
/// let mut repo = KeyedRepository::new();
/// repo.add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24)).unwrap();
///
/// let dup = repo.add(ElectronicItem::new(1, "Phone", 5, "Nokia", 6));
/// assert_eq!(dup, Err(RepoError::DuplicateKey(1)));
/// assert_eq!(repo.get(1).unwrap().name, "Laptop");
/// ```
#[derive(Debug, Clone)]
pub struct KeyedRepository<T> {
    entries: Vec<T>,
    index: HashMap<EntityId, usize>,
}

impl<T> Default for KeyedRepository<T> {
    fn default() -> Self {
        KeyedRepository {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Entity> KeyedRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` is currently stored.
    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Inserts `item` under its own id.
    ///
    /// ## Errors
    /// - `DuplicateKey(id)` if the id is already present; the item is
    ///   dropped and the store is unchanged.
    pub fn add(&mut self, item: T) -> RepoResult<()> {
        let id = item.id();
        if self.index.contains_key(&id) {
            debug!(id, "Rejected duplicate key");
            return Err(RepoError::DuplicateKey(id));
        }

        self.index.insert(id, self.entries.len());
        self.entries.push(item);
        debug!(id, size = self.entries.len(), "Entry added");
        Ok(())
    }

    /// Returns a copy of the entry stored under `id`.
    pub fn get(&self, id: EntityId) -> RepoResult<T> {
        self.find(id).cloned()
    }

    /// Borrows the entry stored under `id`.
    pub fn find(&self, id: EntityId) -> RepoResult<&T> {
        self.slot(id).map(|slot| &self.entries[slot])
    }

    /// Deletes the entry stored under `id`.
    ///
    /// Remaining entries keep their relative insertion order.
    pub fn remove(&mut self, id: EntityId) -> RepoResult<()> {
        let slot = self.slot(id)?;
        self.entries.remove(slot);
        self.index.remove(&id);
        self.reindex_from(slot);
        debug!(id, size = self.entries.len(), "Entry removed");
        Ok(())
    }

    /// Snapshot of every entry in insertion order.
    ///
    /// The returned vector is detached from the store: mutating it has no
    /// effect here. An empty store yields an empty vector.
    pub fn list_all(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Discards the current contents and loads `items`.
    ///
    /// Used to restore a previously saved snapshot. When `items` repeats an
    /// id, the first occurrence is kept and later ones are dropped.
    ///
    /// Returns the number of entries kept.
    pub fn replace_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.entries.clear();
        self.index.clear();

        let mut dropped = 0usize;
        for item in items {
            let id = item.id();
            if self.index.contains_key(&id) {
                dropped += 1;
                continue;
            }
            self.index.insert(id, self.entries.len());
            self.entries.push(item);
        }

        debug!(kept = self.entries.len(), dropped, "Repository contents replaced");
        self.entries.len()
    }

    fn slot(&self, id: EntityId) -> RepoResult<usize> {
        self.index.get(&id).copied().ok_or(RepoError::NotFound(id))
    }

    fn reindex_from(&mut self, start: usize) {
        for (slot, entry) in self.entries.iter().enumerate().skip(start) {
            self.index.insert(entry.id(), slot);
        }
    }
}

impl<T: Stocked> KeyedRepository<T> {
    /// Inserts a quantity-bearing `item`, rejecting a negative stock level.
    ///
    /// ## Errors
    /// - `InvalidQuantity(q)` if the item's quantity is negative (checked first)
    /// - `DuplicateKey(id)` if the id is already present
    pub fn add_stocked(&mut self, item: T) -> RepoResult<()> {
        let quantity = item.quantity();
        if quantity < 0 {
            debug!(id = item.id(), quantity, "Rejected negative quantity on add");
            return Err(RepoError::InvalidQuantity(quantity));
        }
        self.add(item)
    }

    /// Sets the stock quantity of the entry under `id`.
    ///
    /// Only the quantity changes; identity and every other attribute stay
    /// as they were.
    ///
    /// ## Errors
    /// - `InvalidQuantity(q)` if `new_quantity < 0` (checked first)
    /// - `NotFound(id)` if the id is absent
    pub fn update_quantity(&mut self, id: EntityId, new_quantity: i64) -> RepoResult<()> {
        if new_quantity < 0 {
            debug!(id, new_quantity, "Rejected negative quantity");
            return Err(RepoError::InvalidQuantity(new_quantity));
        }

        let slot = self.slot(id)?;
        let entry = &mut self.entries[slot];
        let previous = entry.quantity();
        entry.set_quantity(new_quantity);
        debug!(id, previous, new_quantity, "Quantity updated");
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a KeyedRepository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
