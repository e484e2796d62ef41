use chrono::NaiveDate;
use stockroom_core::{
    Category, CategoryItem, CategoryManager, ElectronicItem, GroceryItem, RepoError, Stocked,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()
}

#[test]
fn same_id_in_two_categories_is_two_key_spaces() {
    let mut manager = CategoryManager::new();

    manager
        .add_item(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))
        .unwrap();
    manager
        .add_item(GroceryItem::new(1, "Milk", 50, expiry()))
        .unwrap();

    let err = manager
        .add_item(ElectronicItem::new(1, "Phone", 5, "Nokia", 6))
        .unwrap_err();
    assert_eq!(err, RepoError::DuplicateKey(1));
    assert_eq!(manager.list_all().len(), 2);
}

#[test]
fn negative_update_leaves_quantity_untouched() {
    let mut manager = CategoryManager::new();
    manager
        .add_item(ElectronicItem::new(1, "Laptop", 10, "Dell", 24))
        .unwrap();

    let err = manager
        .update_quantity(Category::Electronics, 1, -3)
        .unwrap_err();
    assert_eq!(err, RepoError::InvalidQuantity(-3));

    match manager.get_item(Category::Electronics, 1).unwrap() {
        CategoryItem::Electronic(item) => assert_eq!(item.quantity(), 10),
        other => panic!("unexpected item {other:?}"),
    }
}

#[test]
fn removing_unknown_grocery_reports_not_found() {
    let mut manager = CategoryManager::seeded(today()).unwrap();
    assert_eq!(
        manager.remove_item(Category::Groceries, 99),
        Err(RepoError::NotFound(99))
    );
    assert_eq!(manager.groceries().len(), 2);
}

#[test]
fn seeded_listing_is_ordered_by_category_then_insertion() {
    let manager = CategoryManager::seeded(today()).unwrap();
    let listing: Vec<(Category, i64)> = manager
        .list_all()
        .iter()
        .map(|item| (item.category(), item.id()))
        .collect();

    assert_eq!(
        listing,
        vec![
            (Category::Electronics, 1),
            (Category::Electronics, 2),
            (Category::Groceries, 1),
            (Category::Groceries, 2),
        ]
    );
}

#[test]
fn operations_on_one_category_never_leak_into_the_other() {
    let mut manager = CategoryManager::seeded(today()).unwrap();
    let groceries_before = manager.list_category(Category::Groceries);

    manager.update_quantity(Category::Electronics, 1, 0).unwrap();
    manager.remove_item(Category::Electronics, 2).unwrap();
    manager
        .add_item(ElectronicItem::new(2, "Tablet", 8, "Apple", 12))
        .unwrap();

    assert_eq!(manager.list_category(Category::Groceries), groceries_before);
}

#[test]
fn listing_is_detached_from_the_store() {
    let mut manager = CategoryManager::seeded(today()).unwrap();
    let mut listing = manager.list_all();
    listing.truncate(1);

    manager.update_quantity(Category::Groceries, 2, 1).unwrap();
    assert_eq!(manager.list_all().len(), 4);
}

#[test]
fn negative_stock_is_never_stored() {
    let mut manager = CategoryManager::seeded(today()).unwrap();

    let err = manager
        .add_item(GroceryItem::new(3, "Eggs", -12, expiry()))
        .unwrap_err();
    assert_eq!(err, RepoError::InvalidQuantity(-12));

    for item in manager.list_all() {
        let quantity = match item {
            CategoryItem::Electronic(e) => e.quantity(),
            CategoryItem::Grocery(g) => g.quantity(),
        };
        assert!(quantity >= 0);
    }
    assert_eq!(manager.groceries().len(), 2);
}
