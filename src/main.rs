//! Storefront Admin - headless application root
//!
//! Owns the store for the lifetime of the process: seeds it, runs a short
//! admin session against the dispatch interface, and exports a report. The
//! real presentation layer plugs in exactly here.

use anyhow::Result;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_admin::{
    catalog, orders, reports, DateRange, Money, Product, ProductStatus, ProductVariant,
    ReportExport, Sku, Store, VariantAttribute,
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = Store::with_seed();
    tracing::info!(
        products = store.state().products.len(),
        orders = store.state().orders.len(),
        categories = store.state().categories.len(),
        "store seeded"
    );

    // Quick action: move the seeded order one step along the chain.
    let order_id = store
        .state()
        .orders
        .first()
        .map(|o| o.id.clone())
        .ok_or_else(|| anyhow::anyhow!("seed contains no orders"))?;
    let status = orders::advance_status(&mut store, &order_id)?;
    tracing::info!(order = %order_id, %status, "order advanced");

    // Create a product through the validated command path.
    let sku = Sku::new("BEL-001")?;
    let mut belt = Product::new("Leather Belt", sku.clone(), "accessories", Money::usd(Decimal::new(4999, 2)));
    belt.status = ProductStatus::Active;
    belt.variants = vec![ProductVariant::new(
        &belt.id,
        &sku,
        vec![VariantAttribute::new("Color", "Black"), VariantAttribute::new("Size", "M")],
        20,
        5,
    )];
    catalog::create_product(&mut store, belt)?;

    let stats = store
        .state()
        .dashboard_stats
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("dashboard stats missing after dispatch"))?;
    tracing::info!(
        today_sales = %stats.today_sales,
        today_orders = stats.today_orders,
        low_stock = stats.low_stock_products,
        total_products = stats.total_products,
        "dashboard refreshed"
    );

    let metrics = reports::metrics::compute(store.state(), DateRange::Last30Days);
    let export = ReportExport::new(DateRange::Last30Days, metrics);
    tracing::info!(file = %export.filename(), "report generated");
    println!("{}", export.to_json()?);

    Ok(())
}
