//! Product records for the inventory page

use serde::{Deserialize, Serialize};

use crate::core::collection::Collection;
use crate::core::entity::{Record, RecordId};
use crate::core::field::FieldValue;
use crate::core::store::ListStore;
use crate::core::validation::filters::{round_decimals, trim};
use crate::core::validation::validators::{non_negative, positive, required};
use crate::core::validation::{FieldRule, Ruleset};

/// A product held in inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub supplier: String,
}

/// The id-less payload accepted by create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub current_stock: i64,
    pub minimum_stock: i64,
    pub supplier: String,
}

impl Record for Product {
    type Draft = ProductDraft;

    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "sku", "category", "supplier"]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::from(self.id)),
            "name" => Some(FieldValue::from(self.name.clone())),
            "sku" => Some(FieldValue::from(self.sku.clone())),
            "category" => Some(FieldValue::from(self.category.clone())),
            "price" => Some(FieldValue::from(self.price)),
            "current_stock" => Some(FieldValue::from(self.current_stock)),
            "minimum_stock" => Some(FieldValue::from(self.minimum_stock)),
            "supplier" => Some(FieldValue::from(self.supplier.clone())),
            _ => None,
        }
    }

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            price: draft.price,
            current_stock: draft.current_stock,
            minimum_stock: draft.minimum_stock,
            supplier: draft.supplier,
        }
    }
}

/// Stock position relative to the reorder threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock == 0 {
            StockStatus::OutOfStock
        } else if self.current_stock <= self.minimum_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// At or below the minimum stock level. Out-of-stock counts as low.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }
}

/// Stock-level filter applied over query results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockLevel {
    #[default]
    All,
    Low,
    Out,
}

impl StockLevel {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            StockLevel::All => true,
            StockLevel::Low => product.is_low_stock(),
            StockLevel::Out => product.current_stock == 0,
        }
    }
}

/// Narrow a result set to the given stock level
pub fn filter_by_stock(products: Vec<Product>, level: StockLevel) -> Vec<Product> {
    products.into_iter().filter(|p| level.matches(p)).collect()
}

/// Products at or below their minimum stock level, for the reorder alert
pub fn low_stock(collection: &Collection<Product>) -> Vec<&Product> {
    collection.iter().filter(|p| p.is_low_stock()).collect()
}

/// Distinct categories in first-seen order, for the filter dropdown
pub fn categories(collection: &Collection<Product>) -> Vec<String> {
    let mut seen = Vec::new();
    for product in collection {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// The product validation ruleset
pub fn ruleset() -> Ruleset {
    Ruleset::new()
        .rule(
            FieldRule::new("name")
                .filter(trim())
                .check(required("Product name is required")),
        )
        .rule(
            FieldRule::new("sku")
                .filter(trim())
                .check(required("SKU is required")),
        )
        .rule(
            FieldRule::new("category")
                .filter(trim())
                .check(required("Category is required")),
        )
        .rule(
            FieldRule::new("price")
                .filter(round_decimals(2))
                .check(positive("Price must be a positive number")),
        )
        .rule(
            FieldRule::new("current_stock")
                .check(non_negative("Current stock must be a non-negative number")),
        )
        .rule(
            FieldRule::new("minimum_stock")
                .check(non_negative("Minimum stock must be a non-negative number")),
        )
        .rule(
            FieldRule::new("supplier")
                .filter(trim())
                .check(required("Supplier is required")),
        )
}

/// A ready-to-use product store
pub fn store() -> ListStore<Product> {
    ListStore::new(ruleset())
}
