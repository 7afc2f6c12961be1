//! Storefront Admin
//!
//! In-memory core for a small storefront's admin dashboard.
//!
//! ## Features
//! - Product, variant and category catalog management
//! - Order status tracking with a one-step forward quick action
//! - Dashboard and report aggregation over live collections
//! - One-way JSON report export
//!
//! All state lives in a single reducer-style [`store::Store`] seeded with
//! mock data at startup; there is no persistence layer, network surface or
//! authentication. Consumers read immutable snapshots and mutate solely by
//! dispatching actions from the closed [`store::Action`] set.

use thiserror::Error;

pub mod catalog;
pub mod domain;
pub mod orders;
pub mod reports;
pub mod store;

pub use catalog::CategoryTree;
pub use domain::aggregates::{
    Address, AttributeDefinition, AttributeType, Category, CategoryStatus, Order, OrderItem,
    OrderStatus, Product, ProductStatus, ProductVariant, VariantAttribute, VariantStatus,
};
pub use domain::value_objects::{Money, Sku};
pub use reports::{
    dashboard::DashboardStats,
    export::ReportExport,
    metrics::{CategorySales, DateRange, ProductSales, ReportMetrics},
};
pub use store::{Action, AppState, Store};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category still has subcategories")]
    CategoryHasChildren,

    #[error("Category is referenced by {0} product(s)")]
    CategoryInUse(usize),

    #[error("No forward transition from '{0}'")]
    NoForwardTransition(OrderStatus),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdminError>;
