//! # Inventory Menu
//!
//! A single ledger of general items, saved to and loaded from a JSON
//! snapshot.
//!
//! ```text
//!   3. Save to File    ledger.items()  ──► SnapshotStore::save
//!   4. Load from File  SnapshotStore::load ──► ledger.restore
//! ```
//!
//! An empty snapshot leaves the ledger untouched; only a non-empty one
//! replaces it.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use stockroom_core::{EntityId, InventoryItem, InventoryLedger};
use stockroom_store::SnapshotStore;
use tracing::info;

use super::{invalid_option, run_loop, Flow};
use crate::console::Console;
use crate::error::AppResult;

const OPTIONS: &[&str] = &[
    "Add New Item",
    "View All Items",
    "Save to File",
    "Load from File",
    "Exit",
];

/// Source of the `date_added` stamp.
pub type Clock = fn() -> DateTime<Utc>;

pub struct InventoryMenu {
    ledger: InventoryLedger,
    store: SnapshotStore,
    clock: Clock,
}

impl InventoryMenu {
    pub fn new(store: SnapshotStore) -> Self {
        Self::with_clock(store, Utc::now)
    }

    pub fn with_clock(store: SnapshotStore, clock: Clock) -> Self {
        InventoryMenu {
            ledger: InventoryLedger::new(),
            store,
            clock,
        }
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<()> {
        console.say("=== Inventory Management System ===")?;
        run_loop(console, OPTIONS, |console, choice| match choice {
            "1" => self.add_item(console),
            "2" => self.view_all(console),
            "3" => self.save(console),
            "4" => self.load(console),
            "5" => Ok(Flow::Exit),
            _ => invalid_option(console),
        })
    }

    fn add_item<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<Flow> {
        let id: EntityId = console.ask_parsed("\nEnter Item ID: ", "item id")?;
        let name = console.ask("Enter Item Name: ")?;
        let quantity: i64 = console.ask_parsed("Enter Quantity: ", "quantity")?;

        let item = InventoryItem::new(id, name, quantity, (self.clock)());
        self.ledger.record(item.clone())?;
        console.say(format_args!("Added item: {item}"))?;
        Ok(Flow::Continue)
    }

    fn view_all<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<Flow> {
        if self.ledger.is_empty() {
            console.say("\nNo items in inventory.")?;
            return Ok(Flow::Continue);
        }

        console.say("\n=== Current Inventory ===")?;
        console.say(format_args!("{:<5} {:<20} {:<5} Date Added", "ID", "Name", "Qty"))?;
        for item in self.ledger.items() {
            console.say(item)?;
        }
        Ok(Flow::Continue)
    }

    fn save<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<Flow> {
        let saved = self.store.save(&self.ledger.items())?;
        console.say(format_args!(
            "\nSaved {} items to {}",
            saved,
            self.store.path().display()
        ))?;
        Ok(Flow::Continue)
    }

    fn load<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<Flow> {
        let items: Vec<InventoryItem> = match self.store.load()? {
            None => {
                console.say("No saved data found.")?;
                return Ok(Flow::Continue);
            }
            Some(items) if items.is_empty() => {
                info!(path = %self.store.path().display(), "Snapshot is empty, ledger kept");
                console.say("No data found in file.")?;
                return Ok(Flow::Continue);
            }
            Some(items) => items,
        };

        let kept = self.ledger.restore(items);
        console.say(format_args!(
            "\nLoaded {} items from {}",
            kept,
            self.store.path().display()
        ))?;
        Ok(Flow::Continue)
    }
}
