//! # Snapshot Files
//!
//! Saves and restores a whole record sequence as one JSON document.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SnapshotStore::save                                  │
//! │                                                                         │
//! │  &[T] ──► serde_json (pretty) ──► inventory.json.tmp ──► rename ──►    │
//! │                                                        inventory.json   │
//! │                                                                         │
//! │  A reader never observes a half-written inventory.json. There is no    │
//! │  fsync and no journal: a crash may lose the latest save.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Path
//! - Missing file → `Ok(None)` (nothing saved yet)
//! - `[]` → `Ok(Some(vec![]))`
//! - Anything else that is not a JSON array of `T` → `StoreError::Serialization`

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// A JSON snapshot file at a fixed path.
///
/// ## Usage
/// ```rust,no_run
/// use stockroom_store::SnapshotStore;
///
/// let store = SnapshotStore::new("inventory.json").unwrap();
/// store.save(&["a".to_string(), "b".to_string()]).unwrap();
/// let loaded: Option<Vec<String>> = store.load().unwrap();
/// assert_eq!(loaded.unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store for `path`.
    ///
    /// ## Errors
    /// - `InvalidPath` if `path` is empty or ends in `..`
    pub fn new(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if path.file_name().is_none() {
            return Err(StoreError::InvalidPath(path));
        }
        Ok(SnapshotStore { path })
    }

    /// The snapshot file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `items` as a pretty-printed JSON array.
    ///
    /// Creates the parent directory when missing. Returns the number of
    /// records written.
    pub fn save<T: Serialize>(&self, items: &[T]) -> StoreResult<usize> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::serialization(&self.path, e))?;

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        info!(path = %self.path.display(), count = items.len(), "Snapshot saved");
        Ok(items.len())
    }

    /// Reads the snapshot back.
    ///
    /// Returns `Ok(None)` when nothing has been saved at this path.
    pub fn load<T: DeserializeOwned>(&self) -> StoreResult<Option<Vec<T>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No snapshot file");
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let items: Vec<T> = serde_json::from_str(&contents)
            .map_err(|e| StoreError::serialization(&self.path, e))?;

        info!(path = %self.path.display(), count = items.len(), "Snapshot loaded");
        Ok(Some(items))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockroom_core::{InventoryItem, InventoryLedger};
    use tempfile::TempDir;

    fn stamp() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 8, 15, 0).unwrap()
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("inventory.json")).unwrap();

        let loaded: Option<Vec<InventoryItem>> = store.load().unwrap();
        assert!(loaded.is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_ledger_survives_save_and_restore() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("nested/inventory.json")).unwrap();

        let mut ledger = InventoryLedger::new();
        ledger.record(InventoryItem::new(1, "Stapler", 4, stamp())).unwrap();
        ledger.record(InventoryItem::new(2, "Tape", 12, stamp())).unwrap();
        assert_eq!(store.save(&ledger.items()).unwrap(), 2);

        let mut restored = InventoryLedger::new();
        let items: Vec<InventoryItem> = store.load().unwrap().unwrap();
        restored.restore(items);

        assert_eq!(restored.items(), ledger.items());
        assert!(!dir.path().join("nested/inventory.json.tmp").exists());
    }

    #[test]
    fn test_saved_file_uses_camel_case() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("inventory.json")).unwrap();
        store.save(&[InventoryItem::new(1, "Stapler", 4, stamp())]).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"dateAdded\""));
    }

    #[test]
    fn test_empty_array_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("empty.json")).unwrap();
        fs::write(store.path(), "[]").unwrap();

        let loaded: Vec<InventoryItem> = store.load().unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("broken.json")).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load::<InventoryItem>().unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }

    #[test]
    fn test_rejects_pathless_store() {
        assert!(matches!(
            SnapshotStore::new(""),
            Err(StoreError::InvalidPath(_))
        ));
    }
}
