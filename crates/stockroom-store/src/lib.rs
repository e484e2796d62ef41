//! # stockroom-store: Snapshot Persistence for Stockroom
//!
//! Saves a repository's `list_all()` output to disk and hands it back for
//! `replace_all()`. The core never sees a file; this crate never sees a
//! uniqueness rule.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Console "Save to File"                                                │
//! │       │  ledger.items()                                                │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   SnapshotStore::save(&[T])   ──►  inventory.json              │   │
//! │  │   SnapshotStore::load()       ◄──  inventory.json              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │  Vec<T>                                                        │
//! │       ▼                                                                 │
//! │  Console "Load from File" → ledger.restore(items)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`snapshot`] - The JSON snapshot file
//! - [`error`] - Store error types

pub mod error;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use snapshot::SnapshotStore;
