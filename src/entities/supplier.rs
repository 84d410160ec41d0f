//! Supplier records for the supplier directory

use serde::{Deserialize, Serialize};

use crate::core::entity::{Record, RecordId};
use crate::core::field::FieldValue;
use crate::core::store::ListStore;
use crate::core::validation::filters::{lowercase, trim};
use crate::core::validation::validators::{email_format, required};
use crate::core::validation::{FieldRule, Ruleset};

/// Whether a supplier is currently used for ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
}

impl SupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "active",
            SupplierStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supplier the business orders from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub category: String,
    pub status: SupplierStatus,
    pub payment_terms: String,
    pub website: String,
    pub notes: String,
    pub products: Vec<String>,
}

/// The id-less payload accepted by create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierDraft {
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub category: String,
    pub status: SupplierStatus,
    pub payment_terms: String,
    pub website: String,
    pub notes: String,
    pub products: Vec<String>,
}

impl Record for Supplier {
    type Draft = SupplierDraft;

    fn resource_name() -> &'static str {
        "suppliers"
    }

    fn resource_name_singular() -> &'static str {
        "supplier"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "contact_name", "email", "category"]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::from(self.id)),
            "name" => Some(FieldValue::from(self.name.clone())),
            "contact_name" => Some(FieldValue::from(self.contact_name.clone())),
            "email" => Some(FieldValue::from(self.email.clone())),
            "phone" => Some(FieldValue::from(self.phone.clone())),
            "address" => Some(FieldValue::from(self.address.clone())),
            "category" => Some(FieldValue::from(self.category.clone())),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "payment_terms" => Some(FieldValue::from(self.payment_terms.clone())),
            "website" => Some(FieldValue::from(self.website.clone())),
            "notes" => Some(FieldValue::from(self.notes.clone())),
            _ => None,
        }
    }

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name,
            contact_name: draft.contact_name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            category: draft.category,
            status: draft.status,
            payment_terms: draft.payment_terms,
            website: draft.website,
            notes: draft.notes,
            products: draft.products,
        }
    }
}

/// The supplier validation ruleset
pub fn ruleset() -> Ruleset {
    Ruleset::new()
        .rule(
            FieldRule::new("name")
                .filter(trim())
                .check(required("Supplier name is required")),
        )
        .rule(
            FieldRule::new("contact_name")
                .filter(trim())
                .check(required("Contact name is required")),
        )
        .rule(
            FieldRule::new("email")
                .filter(trim())
                .filter(lowercase())
                .check(required("Email is required"))
                .check(email_format("Invalid email format")),
        )
        .rule(
            FieldRule::new("phone")
                .filter(trim())
                .check(required("Phone number is required")),
        )
        .rule(
            FieldRule::new("category")
                .filter(trim())
                .check(required("Category is required")),
        )
}

/// A ready-to-use supplier store
pub fn store() -> ListStore<Supplier> {
    ListStore::new(ruleset())
}
