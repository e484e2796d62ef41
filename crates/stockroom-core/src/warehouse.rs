//! # Warehouse Categories
//!
//! [`CategoryManager`] owns one [`KeyedRepository`] per item category and
//! presents a single add / update / remove / list surface over them.
//!
//! ## Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CategoryManager                                   │
//! │                                                                         │
//! │  add_item(CategoryItem::Electronic(x)) ──► electronics.add(x)          │
//! │  add_item(CategoryItem::Grocery(x))    ──► groceries.add(x)            │
//! │                                                                         │
//! │  update_quantity(Electronics, id, q)   ──► electronics.update_quantity │
//! │  remove_item(Groceries, id)            ──► groceries.remove            │
//! │                                                                         │
//! │  list_all() ──► electronics.list_all() ++ groceries.list_all()         │
//! │                 (Category::ALL order, each tagged by its variant)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Each category is an independent key space: id 1 may exist in both.
//! - An entry lives in exactly one category's repository.
//! - Repository errors are forwarded unchanged; nothing is retried or
//!   translated here.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RepoResult;
use crate::repository::KeyedRepository;
use crate::types::{ElectronicItem, Entity, EntityId, GroceryItem};

// =============================================================================
// Category
// =============================================================================

/// The closed set of warehouse categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Groceries,
}

impl Category {
    /// Every category in listing order.
    pub const ALL: [Category; 2] = [Category::Electronics, Category::Groceries];

    /// Heading used when listing the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Groceries => "Groceries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Electronics => write!(f, "electronics"),
            Category::Groceries => write!(f, "groceries"),
        }
    }
}

/// Error returned when a category selector is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the menu number or the category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "electronics" | "electronic" => Ok(Category::Electronics),
            "2" | "groceries" | "grocery" => Ok(Category::Groceries),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

// =============================================================================
// Category Item
// =============================================================================

/// An item tagged with the category it belongs to.
///
/// The variant *is* the category selector, so an item can never be routed
/// into a repository of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum CategoryItem {
    #[serde(rename = "electronics")]
    Electronic(ElectronicItem),
    #[serde(rename = "groceries")]
    Grocery(GroceryItem),
}

impl CategoryItem {
    pub fn category(&self) -> Category {
        match self {
            CategoryItem::Electronic(_) => Category::Electronics,
            CategoryItem::Grocery(_) => Category::Groceries,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            CategoryItem::Electronic(item) => item.id(),
            CategoryItem::Grocery(item) => item.id(),
        }
    }
}

impl From<ElectronicItem> for CategoryItem {
    fn from(item: ElectronicItem) -> Self {
        CategoryItem::Electronic(item)
    }
}

impl From<GroceryItem> for CategoryItem {
    fn from(item: GroceryItem) -> Self {
        CategoryItem::Grocery(item)
    }
}

impl fmt::Display for CategoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryItem::Electronic(item) => fmt::Display::fmt(item, f),
            CategoryItem::Grocery(item) => fmt::Display::fmt(item, f),
        }
    }
}

// =============================================================================
// Category Manager
// =============================================================================

/// Owns the electronics and groceries repositories.
#[derive(Debug, Clone, Default)]
pub struct CategoryManager {
    electronics: KeyedRepository<ElectronicItem>,
    groceries: KeyedRepository<GroceryItem>,
}

impl CategoryManager {
    /// Creates a manager with empty repositories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager and loads the starter set.
    ///
    /// `today` anchors the grocery expiry dates; the core never reads the
    /// clock itself.
    pub fn seeded(today: NaiveDate) -> RepoResult<Self> {
        let mut manager = Self::new();
        manager.seed(today)?;
        Ok(manager)
    }

    /// Loads the starter set.
    ///
    /// | Category    | Entries                                              |
    /// |-------------|------------------------------------------------------|
    /// | electronics | 1 Laptop (Dell, 10, 24m), 2 Smartphone (Samsung, 25, 12m) |
    /// | groceries   | 1 Milk (50, today+7d), 2 Bread (30, today+3d)        |
    ///
    /// Calling this on a manager that already holds the starter ids fails
    /// with `DuplicateKey` for the first clashing id.
    pub fn seed(&mut self, today: NaiveDate) -> RepoResult<()> {
        self.electronics
            .add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))?;
        self.electronics
            .add(ElectronicItem::new(2, "Smartphone", 25, "Samsung", 12))?;

        self.groceries
            .add(GroceryItem::new(1, "Milk", 50, days_after(today, 7)))?;
        self.groceries
            .add(GroceryItem::new(2, "Bread", 30, days_after(today, 3)))?;

        info!(
            electronics = self.electronics.len(),
            groceries = self.groceries.len(),
            "Warehouse seeded"
        );
        Ok(())
    }

    /// Adds an item to the repository of its category.
    ///
    /// Fails with `InvalidQuantity` for a negative quantity and
    /// `DuplicateKey` for an id already used in that category.
    pub fn add_item(&mut self, item: impl Into<CategoryItem>) -> RepoResult<()> {
        let item = item.into();
        debug!(category = %item.category(), id = item.id(), "Adding item");
        match item {
            CategoryItem::Electronic(item) => self.electronics.add_stocked(item),
            CategoryItem::Grocery(item) => self.groceries.add_stocked(item),
        }
    }

    /// Looks an item up in one category.
    pub fn get_item(&self, category: Category, id: EntityId) -> RepoResult<CategoryItem> {
        match category {
            Category::Electronics => self.electronics.get(id).map(CategoryItem::from),
            Category::Groceries => self.groceries.get(id).map(CategoryItem::from),
        }
    }

    /// Sets the quantity of an item in one category.
    pub fn update_quantity(
        &mut self,
        category: Category,
        id: EntityId,
        quantity: i64,
    ) -> RepoResult<()> {
        debug!(%category, id, quantity, "Updating quantity");
        match category {
            Category::Electronics => self.electronics.update_quantity(id, quantity),
            Category::Groceries => self.groceries.update_quantity(id, quantity),
        }
    }

    /// Removes an item from one category.
    pub fn remove_item(&mut self, category: Category, id: EntityId) -> RepoResult<()> {
        debug!(%category, id, "Removing item");
        match category {
            Category::Electronics => self.electronics.remove(id),
            Category::Groceries => self.groceries.remove(id),
        }
    }

    /// Snapshot of one category, in insertion order.
    pub fn list_category(&self, category: Category) -> Vec<CategoryItem> {
        match category {
            Category::Electronics => self.electronics.iter().cloned().map(CategoryItem::from).collect(),
            Category::Groceries => self.groceries.iter().cloned().map(CategoryItem::from).collect(),
        }
    }

    /// Snapshot of every category, concatenated in [`Category::ALL`] order.
    pub fn list_all(&self) -> Vec<CategoryItem> {
        Category::ALL
            .iter()
            .flat_map(|category| self.list_category(*category))
            .collect()
    }

    /// Read access to the electronics repository.
    pub fn electronics(&self) -> &KeyedRepository<ElectronicItem> {
        &self.electronics
    }

    /// Read access to the groceries repository.
    pub fn groceries(&self) -> &KeyedRepository<GroceryItem> {
        &self.groceries
    }
}

fn days_after(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

// =============================================================================
// Unit Tests
// =============================================================================
