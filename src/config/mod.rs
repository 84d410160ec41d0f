//! Seed-data configuration
//!
//! Collections start empty or pre-seeded. Seed data is declared in YAML,
//! one section per record type; every section is optional.
//!
//! ```yaml
//! products:
//!   - id: 1
//!     name: Coffee Mug
//!     sku: HW-MUG-224
//!     category: Homeware
//!     price: 12.50
//!     current_stock: 8
//!     minimum_stock: 15
//!     supplier: Kitchen Supplies Co
//! suppliers:
//!   - id: 1
//!     name: Kitchen Supplies Co
//!     contact_name: Miguel Rodriguez
//!     email: miguel@kitchensupplies.com
//!     phone: (555) 234-5678
//!     address: 456 Culinary Blvd, Chicago, IL 60607
//!     category: Homeware
//!     status: active
//!     payment_terms: Net 45
//!     website: www.kitchensupplies.com
//!     notes: ""
//!     products: [Coffee Mug]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::collection::Collection;
use crate::core::error::ConfigError;
use crate::entities::{Order, Product, Supplier};

/// Seed records for the three collections
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub suppliers: Vec<Supplier>,
}

impl SeedData {
    /// Parse seed data from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load seed data from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })
    }

    /// Build the seeded product collection
    pub fn products(&self) -> Collection<Product> {
        Collection::seeded(self.products.clone())
    }

    /// Build the seeded order collection
    pub fn orders(&self) -> Collection<Order> {
        Collection::seeded(self.orders.clone())
    }

    /// Build the seeded supplier collection
    pub fn suppliers(&self) -> Collection<Supplier> {
        Collection::seeded(self.suppliers.clone())
    }
}
