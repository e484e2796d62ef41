//! # Warehouse Menu
//!
//! Electronics and groceries held in a seeded [`CategoryManager`].
//! Groceries past their expiry date are flagged in the listing.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use stockroom_core::{Category, CategoryItem, CategoryManager, ElectronicItem, EntityId, GroceryItem};
use tracing::info;

use super::{invalid_option, run_loop, Flow};
use crate::console::Console;
use crate::error::AppResult;

const OPTIONS: &[&str] = &[
    "View All Inventory",
    "Add New Item",
    "Update Item Quantity",
    "Remove Item",
    "Exit",
];

pub struct WarehouseMenu {
    manager: CategoryManager,
    today: NaiveDate,
}

impl WarehouseMenu {
    /// Seeds the warehouse relative to `today`.
    pub fn new(today: NaiveDate) -> AppResult<Self> {
        Ok(WarehouseMenu {
            manager: CategoryManager::seeded(today)?,
            today,
        })
    }

    pub fn manager(&self) -> &CategoryManager {
        &self.manager
    }

    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<()> {
        console.say("=== Warehouse Inventory System ===")?;
        run_loop(console, OPTIONS, |console, choice| match choice {
            "1" => self.view_all(console),
            "2" => self.add_item(console),
            "3" => self.update_quantity(console),
            "4" => self.remove_item(console),
            "5" => Ok(Flow::Exit),
            _ => invalid_option(console),
        })
    }

    fn view_all<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<Flow> {
        for category in Category::ALL {
            console.say(format_args!("\n=== {} ===", category.label()))?;
            for item in self.manager.list_category(category) {
                match &item {
                    CategoryItem::Grocery(grocery) if grocery.is_expired(self.today) => {
                        console.say(format_args!("{item} (expired)"))?
                    }
                    _ => console.say(&item)?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn add_item<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<Flow> {
        console.say("\n1. Add Electronic Item")?;
        console.say("2. Add Grocery Item")?;
        let category: Category = console.ask("Select type: ")?.parse()?;

        let id: EntityId = console.ask_parsed("Enter Item ID: ", "item id")?;
        let name = console.ask("Enter Item Name: ")?;
        let quantity: i64 = console.ask_parsed("Enter Quantity: ", "quantity")?;

        match category {
            Category::Electronics => {
                let brand = console.ask("Enter Brand: ")?;
                let warranty: u32 = console.ask_parsed("Enter Warranty (months): ", "warranty")?;
                self.manager
                    .add_item(ElectronicItem::new(id, name, quantity, brand, warranty))?;
            }
            Category::Groceries => {
                let expiry = console.ask_date("Enter Expiry Date (yyyy-mm-dd): ", "expiry date")?;
                self.manager
                    .add_item(GroceryItem::new(id, name, quantity, expiry))?;
            }
        }

        info!(%category, id, "Item added from console");
        console.say("Item added successfully!")?;
        Ok(Flow::Continue)
    }

    fn update_quantity<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> AppResult<Flow> {
        console.say("\n1. Update Electronics Quantity")?;
        console.say("2. Update Groceries Quantity")?;
        let category: Category = console.ask("Select type: ")?.parse()?;

        let id: EntityId = console.ask_parsed("Enter Item ID: ", "item id")?;
        let quantity: i64 = console.ask_parsed("Enter New Quantity: ", "quantity")?;

        self.manager.update_quantity(category, id, quantity)?;
        console.say("Quantity updated successfully!")?;
        Ok(Flow::Continue)
    }

    fn remove_item<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<Flow> {
        console.say("\n1. Remove Electronic Item")?;
        console.say("2. Remove Grocery Item")?;
        let category: Category = console.ask("Select type: ")?.parse()?;

        let id: EntityId = console.ask_parsed("Enter Item ID: ", "item id")?;

        self.manager.remove_item(category, id)?;
        console.say("Item removed successfully!")?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::testing::{scripted, transcript};
    use stockroom_core::Stocked;

    fn menu() -> WarehouseMenu {
        WarehouseMenu::new(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).unwrap()
    }

    #[test]
    fn test_view_lists_electronics_before_groceries() {
        let mut menu = menu();
        let mut console = scripted(&["1", "5"]);
        menu.run(&mut console).unwrap();

        let out = transcript(console);
        let electronics = out.find("=== Electronics ===").unwrap();
        let groceries = out.find("=== Groceries ===").unwrap();
        assert!(electronics < groceries);
        assert!(out.contains("[Electronics] ID: 1, Laptop (Dell), Qty: 10, Warranty: 24 months"));
        assert!(out.contains("[Grocery] ID: 1, Milk, Qty: 50, Expires: 2026-10-25"));
    }

    #[test]
    fn test_expired_groceries_are_flagged() {
        let mut menu = menu();
        let mut console = scripted(&["2", "2", "5", "Yogurt", "4", "2026-10-01", "1", "5"]);
        menu.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("[Grocery] ID: 5, Yogurt, Qty: 4, Expires: 2026-10-01 (expired)"));
        assert!(out.contains("[Grocery] ID: 1, Milk, Qty: 50, Expires: 2026-10-25\n"));
    }

    #[test]
    fn test_add_electronic_and_grocery() {
        let mut menu = menu();
        let mut console = scripted(&[
            "2", "1", "7", "Camera", "3", "Canon", "6",
            "2", "2", "7", "Eggs", "12", "2026-10-30",
            "5",
        ]);
        menu.run(&mut console).unwrap();

        assert_eq!(transcript(console).matches("Item added successfully!").count(), 2);
        assert_eq!(menu.manager().electronics().get(7).unwrap().brand, "Canon");
        assert_eq!(menu.manager().groceries().get(7).unwrap().name, "Eggs");
    }

    #[test]
    fn test_duplicate_id_is_reported_and_loop_continues() {
        let mut menu = menu();
        let mut console = scripted(&["2", "1", "1", "Phone", "5", "Nokia", "6", "5"]);
        menu.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Error: Item with ID 1 already exists."));
        assert!(!out.contains("Item added successfully!"));
        assert_eq!(menu.manager().electronics().get(1).unwrap().name, "Laptop");
    }

    #[test]
    fn test_negative_quantity_on_add_is_not_stored() {
        let mut menu = menu();
        let mut console = scripted(&[
            "2", "1", "7", "Camera", "-5", "Canon", "6",
            "2", "2", "8", "Eggs", "-12", "2026-10-30",
            "5",
        ]);
        menu.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Error: Quantity cannot be negative (got -5)."));
        assert!(out.contains("Error: Quantity cannot be negative (got -12)."));
        assert!(!out.contains("Item added successfully!"));
        assert!(!menu.manager().electronics().contains(7));
        assert!(!menu.manager().groceries().contains(8));
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let mut menu = menu();
        let mut console = scripted(&["3", "1", "1", "-3", "5"]);
        menu.run(&mut console).unwrap();

        assert!(transcript(console).contains("Error: Quantity cannot be negative (got -3)."));
        assert_eq!(menu.manager().electronics().get(1).unwrap().quantity(), 10);
    }

    #[test]
    fn test_update_and_remove() {
        let mut menu = menu();
        let mut console = scripted(&["3", "2", "2", "0", "4", "1", "2", "4", "2", "99", "5"]);
        menu.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Quantity updated successfully!"));
        assert!(out.contains("Item removed successfully!"));
        assert!(out.contains("Error: Item with ID 99 not found."));
        assert_eq!(menu.manager().groceries().get(2).unwrap().quantity(), 0);
        assert!(!menu.manager().electronics().contains(2));
    }

    #[test]
    fn test_bad_input_does_not_end_the_loop() {
        let mut menu = menu();
        let mut console = scripted(&["9", "4", "1", "abc", "2", "2", "5", "Eggs", "1", "2026-99-01", "5"]);
        menu.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("Invalid option!"));
        assert_eq!(out.matches("Invalid input format!").count(), 2);
        assert!(!menu.manager().groceries().contains(5));
    }

    #[test]
    fn test_unknown_category_is_reported() {
        let mut menu = menu();
        let mut console = scripted(&["4", "3", "5"]);
        menu.run(&mut console).unwrap();

        assert!(transcript(console).contains("Error: Unknown category: 3"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut menu = menu();
        let mut console = scripted(&["2", "1"]);
        assert!(menu.run(&mut console).is_ok());
    }
}
