//! # stockroom-core: Pure Record Keeping for Stockroom
//!
//! This crate holds every rule Stockroom enforces about its records. It
//! performs no file or console I/O and never reads the clock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console (apps/stockroom-cli)                    │   │
//! │  │    menus, number/date parsing, error rendering                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed entities + category             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ repository │  │ warehouse │  │  clinic  │  │   │
//! │  │   │  Entity   │  │ Keyed-     │  │ Category- │  │ Clinic-  │  │   │
//! │  │   │  Stocked  │  │ Repository │  │ Manager   │  │ Registry │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                   ┌───────────┐                 │   │
//! │  │                                   │ inventory │                 │   │
//! │  │                                   │  Ledger   │                 │   │
//! │  │                                   └───────────┘                 │   │
//! │  │   NO I/O • NO CLOCK • TYPED ERRORS                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ list_all / replace_all                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            stockroom-store (JSON snapshot files)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities and the `Entity` / `Stocked` capabilities
//! - [`error`] - `RepoError` taxonomy
//! - [`repository`] - Generic `KeyedRepository<T>`
//! - [`warehouse`] - `CategoryManager` over electronics and groceries
//! - [`inventory`] - `InventoryLedger` with snapshot restore
//! - [`clinic`] - `ClinicRegistry` for patients and prescriptions
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stockroom_core::{Category, CategoryManager, ElectronicItem, RepoError};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let mut warehouse = CategoryManager::seeded(today).unwrap();
//!
//! let err = warehouse
//!     .add_item(ElectronicItem::new(1, "Phone", 5, "Nokia", 6))
//!     .unwrap_err();
//! assert_eq!(err, RepoError::DuplicateKey(1));
//!
//! let err = warehouse
//!     .update_quantity(Category::Electronics, 1, -3)
//!     .unwrap_err();
//! assert_eq!(err, RepoError::InvalidQuantity(-3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clinic;
pub mod error;
pub mod inventory;
pub mod repository;
pub mod types;
pub mod warehouse;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use clinic::ClinicRegistry;
pub use error::{RepoError, RepoResult};
pub use inventory::InventoryLedger;
pub use repository::KeyedRepository;
pub use types::*;
pub use warehouse::{Category, CategoryItem, CategoryManager, UnknownCategory};
