//! # StockSage
//!
//! An in-memory list-management engine for inventory, order and supplier
//! records.
//!
//! ## Features
//!
//! - **Generic Record Abstraction**: One engine for every record type, driven
//!   by field descriptors instead of per-domain copies
//! - **Filter + Sort Queries**: Case-insensitive text search, exact-match
//!   field filters, stable sorting with numeric-aware comparison
//! - **Functional Mutations**: create/update/remove take a collection value
//!   and return a new one, so every mutation point is explicit and testable
//! - **Declarative Validation**: Per-record rulesets built from reusable
//!   field filters and validators, reporting all field errors at once
//! - **Derived Fields**: Order subtotals and totals are pure derivations,
//!   never independently settable state
//! - **Seedable Collections**: Start empty or pre-seed from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stocksage::prelude::*;
//! use stocksage::entities::product;
//!
//! let store = product::store();
//! let inventory = Collection::new();
//!
//! let (inventory, shirt) = store.create(&inventory, ProductDraft {
//!     name: "T-Shirt (Black)".into(),
//!     sku: "TS-BLK-001".into(),
//!     category: "Apparel".into(),
//!     price: 19.99,
//!     current_stock: 45,
//!     minimum_stock: 10,
//!     supplier: "Fashion Wholesale Inc".into(),
//! })?;
//!
//! let query = ListQuery::new()
//!     .search("shirt")
//!     .filter("category", "Apparel")
//!     .sort("price", SortDirection::Descending);
//! let rows = store.query(&inventory, &query);
//! ```

pub mod config;
pub mod core;
pub mod entities;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        collection::Collection,
        entity::{Record, RecordId},
        error::{ConfigError, StockSageError, StockSageResult, StoreError, ValidationErrors},
        field::{FieldFormat, FieldValue},
        notice::{Notice, NoticeKind},
        query::{ListQuery, Sort, SortDirection},
        store::ListStore,
    };

    // === Validation ===
    pub use crate::core::validation::{FieldRule, Ruleset};

    // === Entities ===
    pub use crate::entities::{
        order::{Order, OrderDraft, OrderItem, OrderStatus, clamp_quantity, order_total},
        product::{Product, ProductDraft, StockLevel, StockStatus},
        supplier::{Supplier, SupplierDraft, SupplierStatus},
    };

    // === Config ===
    pub use crate::config::SeedData;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
