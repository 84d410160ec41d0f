//! Domain record types: products, orders, suppliers
//!
//! Each module is a thin descriptor over the generic engine: the record
//! struct, its draft shape, its field descriptors, its validation ruleset,
//! and the domain helpers its page needs.

pub mod order;
pub mod product;
pub mod supplier;

pub use order::{Order, OrderDraft, OrderItem, OrderStatus};
pub use product::{Product, ProductDraft, StockLevel, StockStatus};
pub use supplier::{Supplier, SupplierDraft, SupplierStatus};
