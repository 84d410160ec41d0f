//! Order records, line-item derivations and quantity clamping

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{Record, RecordId};
use crate::core::field::FieldValue;
use crate::core::notice::Notice;
use crate::core::store::ListStore;
use crate::core::validation::filters::trim;
use crate::core::validation::validators::{non_empty_list, one_of, required};
use crate::core::validation::{FieldRule, Ruleset};

/// Payment methods offered at checkout
pub const PAYMENT_METHODS: [&str; 4] = [
    "Credit Card",
    "PayPal",
    "Bank Transfer",
    "Cash on Delivery",
];

/// Order fulfilment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order.
///
/// The subtotal is always derived from quantity and unit price; it is not a
/// stored field, so it can never drift from the values it derives from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: RecordId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Order total: the sum of all line subtotals.
/// Recomputed at submission time, never edited directly.
pub fn order_total(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::subtotal).sum()
}

/// Clamp a requested line quantity into `[1, available_stock]`.
///
/// Out-of-range requests are corrected, not rejected; the correction is
/// reported as a warning notice for the caller to display.
pub fn clamp_quantity(requested: i64, available_stock: u32) -> (u32, Option<Notice>) {
    if requested < 1 {
        (1, Some(Notice::warning("Quantity cannot be less than 1")))
    } else if requested > i64::from(available_stock) {
        (
            available_stock,
            Some(Notice::warning(format!(
                "Only {} units available in stock",
                available_stock
            ))),
        )
    } else {
        (requested as u32, None)
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    pub order_number: String,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub total: f64,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    pub payment_method: String,
    pub notes: String,
}

/// The id-less payload accepted by create/update.
///
/// `order_number` and `order_date` are absent on create (the engine stamps
/// them) and carried through on edit so they are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDraft {
    pub customer_name: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub status: OrderStatus,
    pub notes: String,
    pub items: Vec<OrderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            shipping_address: String::new(),
            payment_method: "Credit Card".to_string(),
            status: OrderStatus::Pending,
            notes: String::new(),
            items: Vec::new(),
            order_number: None,
            order_date: None,
        }
    }
}

impl Order {
    /// The draft an edit form starts from: current fields with the order
    /// number and date carried along so an update preserves them.
    pub fn draft(&self) -> OrderDraft {
        OrderDraft {
            customer_name: self.customer_name.clone(),
            shipping_address: self.shipping_address.clone(),
            payment_method: self.payment_method.clone(),
            status: self.status,
            notes: self.notes.clone(),
            items: self.items.clone(),
            order_number: Some(self.order_number.clone()),
            order_date: Some(self.order_date),
        }
    }
}

impl Record for Order {
    type Draft = OrderDraft;

    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["order_number", "customer_name"]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::from(self.id)),
            "order_number" => Some(FieldValue::from(self.order_number.clone())),
            "customer_name" => Some(FieldValue::from(self.customer_name.clone())),
            "order_date" => Some(FieldValue::from(self.order_date)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "total" => Some(FieldValue::from(self.total)),
            "shipping_address" => Some(FieldValue::from(self.shipping_address.clone())),
            "payment_method" => Some(FieldValue::from(self.payment_method.clone())),
            "notes" => Some(FieldValue::from(self.notes.clone())),
            _ => None,
        }
    }

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self {
        let order_date = draft
            .order_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let order_number = draft
            .order_number
            .unwrap_or_else(|| format!("ORD-{}-{:03}", order_date.year(), id));
        let total = order_total(&draft.items);
        Self {
            id,
            order_number,
            customer_name: draft.customer_name,
            order_date,
            status: draft.status,
            total,
            items: draft.items,
            shipping_address: draft.shipping_address,
            payment_method: draft.payment_method,
            notes: draft.notes,
        }
    }
}

/// The order validation ruleset
pub fn ruleset() -> Ruleset {
    Ruleset::new()
        .rule(
            FieldRule::new("customer_name")
                .filter(trim())
                .check(required("Customer name is required")),
        )
        .rule(
            FieldRule::new("shipping_address")
                .filter(trim())
                .check(required("Shipping address is required")),
        )
        .rule(
            FieldRule::new("payment_method")
                .check(required("Payment method is required"))
                .check(one_of(&PAYMENT_METHODS, "Payment method is not recognized")),
        )
        .rule(
            FieldRule::new("items")
                .check(non_empty_list("Order must contain at least one item")),
        )
}

/// A ready-to-use order store
pub fn store() -> ListStore<Order> {
    ListStore::new(ruleset())
}
