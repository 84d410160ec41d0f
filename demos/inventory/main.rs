//! Inventory walkthrough: seed a collection, query it, mutate it.
//!
//! Run with: cargo run --example inventory

use anyhow::Result;
use stocksage::entities::product;
use stocksage::prelude::*;

const SEED: &str = r#"
products:
  - id: 1
    name: T-Shirt (Black)
    sku: TS-BLK-001
    category: Apparel
    price: 19.99
    current_stock: 45
    minimum_stock: 10
    supplier: Fashion Wholesale Inc
  - id: 2
    name: Coffee Mug
    sku: HW-MUG-224
    category: Homeware
    price: 12.50
    current_stock: 8
    minimum_stock: 15
    supplier: Kitchen Supplies Co
  - id: 3
    name: Wireless Earbuds
    sku: TECH-EB-774
    category: Electronics
    price: 89.99
    current_stock: 23
    minimum_stock: 5
    supplier: Tech Distributors
"#;

fn print_inventory(heading: &str, products: &[Product]) {
    println!("\n{heading}");
    for p in products {
        println!(
            "  [{}] {:<20} {:<12} ${:>7.2}  stock {:>3}  ({:?})",
            p.id,
            p.name,
            p.sku,
            p.price,
            p.current_stock,
            p.stock_status()
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("stocksage=debug")
        .init();

    let store = product::store();
    let inventory = SeedData::from_yaml(SEED)?.products();

    // Most expensive first
    let query = ListQuery::new().sort("price", SortDirection::Descending);
    print_inventory("Inventory by price:", &store.query(&inventory, &query));

    // Free-text search over name, sku, category and supplier
    let query = ListQuery::new().search("tech");
    print_inventory("Search 'tech':", &store.query(&inventory, &query));

    // Add a product; the engine assigns the next id
    let (inventory, created) = store.create(
        &inventory,
        ProductDraft {
            name: "Yoga Mat".to_string(),
            sku: "FIT-YM-412".to_string(),
            category: "Fitness".to_string(),
            price: 29.95,
            current_stock: 12,
            minimum_stock: 8,
            supplier: "Active Lifestyle Goods".to_string(),
        },
    )?;
    println!("\nCreated product #{}: {}", created.id, created.name);

    // Validation collects every field error at once
    if let Err(StoreError::Validation(errors)) =
        store.create(&inventory, ProductDraft::default())
    {
        println!("\nRejected empty draft:");
        for (field, message) in errors.iter() {
            println!("  {field}: {message}");
        }
    }

    // Order line quantities clamp to available stock
    let mug_stock = inventory.get(2).map(|p| p.current_stock as u32).unwrap_or(0);
    let (quantity, notice) = clamp_quantity(20, mug_stock);
    println!("\nRequested 20 mugs, storing {quantity}");
    if let Some(notice) = notice {
        println!("  notice: {}", notice.message);
    }

    // Reorder report
    let low: Vec<&Product> = product::low_stock(&inventory);
    println!("\nLow stock ({}):", low.len());
    for p in low {
        println!("  {} ({} in stock, minimum {})", p.name, p.current_stock, p.minimum_stock);
    }

    Ok(())
}
