//! Record trait defining the core abstraction for all list-managed types

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::field::FieldValue;

/// Identifier assigned by the engine on create.
///
/// Ids are sequential integers scoped to one collection and one session.
/// They are never reused, even after deletes.
pub type RecordId = u32;

/// Base trait for all records managed by a [`ListStore`](crate::core::store::ListStore).
///
/// A record exposes:
/// - id: engine-assigned identifier (callers never set or change it)
/// - searchable_fields: the text fields matched by free-text search
/// - field_value: dynamic field access used for filtering and sorting
/// - Draft: the id-less shape accepted by create and update
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// The id-less payload accepted by create/update. Drafts round-trip
    /// through JSON so rulesets can normalize and validate them.
    type Draft: Clone + Serialize + DeserializeOwned + Send + Sync;

    /// The plural resource name (e.g., "products")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "product")
    fn resource_name_singular() -> &'static str;

    /// Text fields matched by free-text search, in match order
    fn searchable_fields() -> &'static [&'static str];

    /// Get the unique identifier for this record
    fn id(&self) -> RecordId;

    /// Get the value of a specific field by name.
    ///
    /// Returns `None` for unknown fields and for nested fields that have no
    /// scalar representation (e.g., an order's line items).
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Build a record from a validated draft and an engine-assigned id.
    ///
    /// Derived fields (order numbers, totals) are computed here so they can
    /// never drift from the data they derive from.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}
