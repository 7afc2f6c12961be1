//! Aggregates module
pub mod category;
pub mod order;
pub mod product;

pub use category::{Category, CategoryStatus};
pub use order::{Address, Order, OrderItem, OrderStatus};
pub use product::{
    AttributeDefinition, AttributeType, Product, ProductStatus, ProductVariant, VariantAttribute,
    VariantStatus,
};
