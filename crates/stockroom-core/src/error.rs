//! # Error Types
//!
//! Typed failure conditions raised by repository operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── RepoError        - Key and quantity invariant violations          │
//! │                                                                         │
//! │  stockroom-store errors (separate crate)                               │
//! │  └── StoreError       - Snapshot file failures                         │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── AppError         - What the menu loop renders                     │
//! │                                                                         │
//! │  Flow: RepoError → (manager forwards unchanged) → AppError → Console   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the offending key or value
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal: callers render and continue

use thiserror::Error;

use crate::types::EntityId;

// =============================================================================
// Repository Error
// =============================================================================

/// Failures signaled by [`KeyedRepository`](crate::repository::KeyedRepository)
/// operations.
///
/// The category layer never wraps or recovers from these; they reach the
/// caller exactly as the repository produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RepoError {
    /// The key is already occupied.
    ///
    /// ## When This Occurs
    /// - `add` with an id that was added and not removed
    /// - Reseeding a manager that already holds the starter set
    #[error("Item with ID {0} already exists.")]
    DuplicateKey(EntityId),

    /// The key is absent.
    ///
    /// ## When This Occurs
    /// - `get`, `remove` or `update_quantity` on an unknown id
    /// - Prescribing for a patient that was never admitted
    #[error("Item with ID {0} not found.")]
    NotFound(EntityId),

    /// A stock quantity was negative.
    ///
    /// ## When This Occurs
    /// - `update_quantity` with a negative value
    /// - `add_stocked` with an item whose quantity is negative
    ///
    /// ## Precedence
    /// Checked before existence: a negative quantity on a missing id
    /// reports `InvalidQuantity`, not `NotFound`.
    #[error("Quantity cannot be negative (got {0}).")]
    InvalidQuantity(i64),
}

impl RepoError {
    /// Short machine-readable code, used by the console when logging.
    pub fn code(&self) -> &'static str {
        match self {
            RepoError::DuplicateKey(_) => "DUPLICATE_KEY",
            RepoError::NotFound(_) => "NOT_FOUND",
            RepoError::InvalidQuantity(_) => "INVALID_QUANTITY",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RepoError.
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// Unit Tests
// =============================================================================
