//! Order entity
//!
//! Order items snapshot the product and variant at purchase time. They are
//! deliberately not live references, so later catalog edits never rewrite
//! order history. Totals are fixed at creation: `total = subtotal + tax +
//! shipping`, never recomputed from the items afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::aggregates::product::{Product, ProductVariant};
use crate::domain::value_objects::Money;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    pub customer_email: String,
    pub customer_name: String,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_number: impl Into<String>,
        customer_id: impl Into<String>,
        customer_email: impl Into<String>,
        customer_name: impl Into<String>,
        items: Vec<OrderItem>,
        subtotal: Money,
        tax: Money,
        shipping: Money,
        shipping_address: Address,
        billing_address: Address,
    ) -> Self {
        let total = subtotal
            .add(&tax)
            .and_then(|t| t.add(&shipping))
            .unwrap_or_else(|_| subtotal.clone());
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            order_number: order_number.into(),
            customer_id: customer_id.into(),
            customer_email: customer_email.into(),
            customer_name: customer_name.into(),
            status: OrderStatus::Pending,
            items,
            subtotal,
            tax,
            shipping,
            total,
            shipping_address,
            billing_address,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn touch(&mut self) { self.updated_at = Utc::now(); }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    /// The next state on the forward chain, or `None` from a terminal or
    /// out-of-chain state. Backward moves and skips are never offered.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Returned => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Returned)
    }

    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub variant_id: String,
    pub product_name: String,
    pub variant_name: String,
    pub sku: String,
    pub quantity: u32,
    pub price: Money,
    pub total: Money,
    pub image: Option<String>,
}

impl OrderItem {
    /// Snapshot a line item from the current catalog state. The copied
    /// fields stay frozen even if the product is edited or deleted later.
    pub fn snapshot(product: &Product, variant: &ProductVariant, quantity: u32) -> Self {
        let price = variant.price.clone().unwrap_or_else(|| product.price.clone());
        let total = price.multiply(quantity);
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            variant_id: variant.id.clone(),
            product_name: product.name.clone(),
            variant_name: variant.name.clone(),
            sku: variant.sku.clone(),
            quantity,
            price,
            total,
            image: variant.image.clone().or_else(|| product.images.first().cloned()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub province: String,
    pub country: String,
    pub zip: String,
    pub phone: Option<String>,
}
