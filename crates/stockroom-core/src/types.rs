//! # Domain Types
//!
//! The records Stockroom keeps, plus the two capabilities the repository
//! relies on.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Warehouse                    Inventory              Healthcare         │
//! │  ┌─────────────────┐          ┌────────────────┐     ┌───────────────┐ │
//! │  │ ElectronicItem  │          │ InventoryItem  │     │   Patient     │ │
//! │  │  brand          │          │  date_added    │     │   age, gender │ │
//! │  │  warranty_months│          └────────────────┘     └───────────────┘ │
//! │  ├─────────────────┤                                 ┌───────────────┐ │
//! │  │ GroceryItem     │                                 │ Prescription  │ │
//! │  │  expiry_date    │                                 │  patient_id   │ │
//! │  └─────────────────┘                                 └───────────────┘ │
//! │                                                                         │
//! │  Every type: Entity (id)      Quantity-bearing types: Stocked          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are caller-assigned integers, unique within one repository and
//! immutable after creation. Entities expose them only through [`Entity::id`];
//! no setter exists.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Primary key of every stored record.
pub type EntityId = i64;

// =============================================================================
// Capabilities
// =============================================================================

/// Anything a [`KeyedRepository`](crate::repository::KeyedRepository) can
/// store: a cloneable record with a stable key.
pub trait Entity: Clone {
    /// The primary key.
    fn id(&self) -> EntityId;
}

/// Records that carry a mutable stock quantity.
///
/// `set_quantity` is only ever called by the repository after it has
/// checked the value is non-negative.
pub trait Stocked: Entity {
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

macro_rules! impl_entity {
    ($ty:ty) => {
        impl Entity for $ty {
            #[inline]
            fn id(&self) -> EntityId {
                self.id
            }
        }
    };
}

macro_rules! impl_stocked {
    ($ty:ty) => {
        impl Stocked for $ty {
            #[inline]
            fn quantity(&self) -> i64 {
                self.quantity
            }

            #[inline]
            fn set_quantity(&mut self, quantity: i64) {
                self.quantity = quantity;
            }
        }
    };
}

// =============================================================================
// Electronic Item
// =============================================================================

/// An electronics line held in the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: EntityId,

    /// Display name, e.g. "Laptop".
    pub name: String,

    /// Units on hand. Mutated only through `update_quantity`.
    quantity: i64,

    /// Manufacturer.
    pub brand: String,

    /// Warranty length in months.
    pub warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        ElectronicItem {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }
}

impl_entity!(ElectronicItem);
impl_stocked!(ElectronicItem);

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Electronics] ID: {}, {} ({}), Qty: {}, Warranty: {} months",
            self.id, self.name, self.brand, self.quantity, self.warranty_months
        )
    }
}

// =============================================================================
// Grocery Item
// =============================================================================

/// A perishable grocery line held in the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: EntityId,
    pub name: String,
    quantity: i64,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: EntityId, name: impl Into<String>, quantity: i64, expiry_date: NaiveDate) -> Self {
        GroceryItem {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    /// True once `today` is past the expiry date.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

impl_entity!(GroceryItem);
impl_stocked!(GroceryItem);

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Grocery] ID: {}, {}, Qty: {}, Expires: {}",
            self.id, self.name, self.quantity, self.expiry_date
        )
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A general inventory entry, stamped with the moment it was recorded.
///
/// Serialized field names are camelCase so saved ledgers stay readable by
/// other tools that consume the same file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: EntityId,
    pub name: String,
    quantity: i64,
    pub date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        quantity: i64,
        date_added: DateTime<Utc>,
    ) -> Self {
        InventoryItem {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }
}

impl_entity!(InventoryItem);
impl_stocked!(InventoryItem);

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5} {:<20} {:<5} {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M")
        )
    }
}

// =============================================================================
// Patient
// =============================================================================

/// A registered clinic patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: EntityId,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: EntityId, name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Patient {
            id,
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

impl_entity!(Patient);

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Gender: {}",
            self.id, self.name, self.age, self.gender
        )
    }
}

// =============================================================================
// Prescription
// =============================================================================

/// A medication issued to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    id: EntityId,
    /// Key of the owning [`Patient`].
    pub patient_id: EntityId,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(
        id: EntityId,
        patient_id: EntityId,
        medication_name: impl Into<String>,
        date_issued: NaiveDate,
    ) -> Self {
        Prescription {
            id,
            patient_id,
            medication_name: medication_name.into(),
            date_issued,
        }
    }
}

impl_entity!(Prescription);

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Medication: {}, Date: {}, For Patient ID: {}",
            self.medication_name, self.date_issued, self.patient_id
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
