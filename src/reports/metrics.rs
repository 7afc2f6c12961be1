//! Windowed report aggregation: revenue, top sellers, category breakdown,
//! and the daily sales trend over a caller-selected date range.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::aggregates::{Order, OrderStatus};
use crate::domain::value_objects::Money;
use crate::reports::{daily_series, sum_totals, SalesPoint};
use crate::store::AppState;

/// Trailing report window, anchored at "now": `[now - N, now]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
}

impl DateRange {
    pub fn window_from(&self, end: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = match self {
            DateRange::Last7Days => end - Duration::days(7),
            DateRange::Last30Days => end - Duration::days(30),
            DateRange::Last90Days => end - Duration::days(90),
            DateRange::LastYear => end
                .checked_sub_months(Months::new(12))
                .unwrap_or(end - Duration::days(365)),
        };
        (start, end)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
            DateRange::LastYear => "1y",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub total_revenue: Money,
    pub total_orders: usize,
    pub average_order_value: Money,
    pub top_products: Vec<ProductSales>,
    pub category_breakdown: Vec<CategorySales>,
    pub sales_trend: Vec<SalesPoint>,
    pub low_stock_products: usize,
    pub total_products: usize,
}

/// Accumulated sales for one product-variant pair, ranked by revenue.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: String,
    pub variant_id: String,
    pub product_name: String,
    pub variant_name: String,
    pub quantity_sold: u32,
    pub revenue: Money,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategorySales {
    pub name: String,
    pub revenue: Money,
    pub quantity: u32,
}

/// How many buckets of the daily trend are kept for charting.
const TREND_DAYS: usize = 30;
/// How many product-variant pairs the ranking keeps.
const TOP_PRODUCTS: usize = 10;

pub fn compute(state: &AppState, range: DateRange) -> ReportMetrics {
    compute_at(state, range, Utc::now())
}

/// Full recomputation over the window ending at `end`. A single pass over
/// the matching orders' line items with map accumulation.
pub fn compute_at(state: &AppState, range: DateRange, end: DateTime<Utc>) -> ReportMetrics {
    let (start, end) = range.window_from(end);
    let in_range: Vec<&Order> = state
        .orders
        .iter()
        .filter(|o| o.created_at >= start && o.created_at <= end)
        .collect();

    let total_revenue = sum_totals(in_range.iter().copied());
    let total_orders = in_range.len();
    let average_order_value = total_revenue.divide(total_orders as u32);

    let mut sales_trend = daily_series(&in_range, start, end);
    if sales_trend.len() > TREND_DAYS {
        sales_trend = sales_trend.split_off(sales_trend.len() - TREND_DAYS);
    }

    ReportMetrics {
        total_revenue,
        total_orders,
        average_order_value,
        top_products: top_products(&in_range),
        category_breakdown: category_breakdown(state, &in_range),
        sales_trend,
        low_stock_products: state.products.iter().filter(|p| p.has_low_stock()).count(),
        total_products: state.products.len(),
    }
}

fn top_products(orders: &[&Order]) -> Vec<ProductSales> {
    let mut sales: HashMap<(String, String), ProductSales> = HashMap::new();
    for order in orders {
        for item in &order.items {
            let key = (item.product_id.clone(), item.variant_id.clone());
            let entry = sales.entry(key).or_insert_with(|| ProductSales {
                product_id: item.product_id.clone(),
                variant_id: item.variant_id.clone(),
                product_name: item.product_name.clone(),
                variant_name: item.variant_name.clone(),
                quantity_sold: 0,
                revenue: Money::zero(item.total.currency()),
            });
            entry.quantity_sold += item.quantity;
            entry.revenue = entry.revenue.add(&item.total).unwrap_or_else(|_| entry.revenue.clone());
        }
    }

    let mut ranked: Vec<ProductSales> = sales.into_values().collect();
    ranked.sort_by(|a, b| b.revenue.amount().cmp(&a.revenue.amount()));
    ranked.truncate(TOP_PRODUCTS);
    ranked
}

/// Resolves each line item back through the live catalog. Lines whose
/// product has since been deleted are skipped; a product whose category is
/// gone falls into "Other".
fn category_breakdown(state: &AppState, orders: &[&Order]) -> Vec<CategorySales> {
    let mut by_category: HashMap<String, CategorySales> = HashMap::new();
    for order in orders {
        for item in &order.items {
            let Some(product) = state.products.iter().find(|p| p.id == item.product_id) else {
                continue;
            };
            let name = state
                .categories
                .iter()
                .find(|c| c.id == product.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Other".to_string());
            let entry = by_category.entry(name.clone()).or_insert_with(|| CategorySales {
                name,
                revenue: Money::zero(item.total.currency()),
                quantity: 0,
            });
            entry.revenue = entry.revenue.add(&item.total).unwrap_or_else(|_| entry.revenue.clone());
            entry.quantity += item.quantity;
        }
    }

    let mut breakdown: Vec<CategorySales> = by_category.into_values().collect();
    breakdown.sort_by(|a, b| b.revenue.amount().cmp(&a.revenue.amount()));
    breakdown
}

/// Order counts per status over the full order collection, in chain order.
pub fn order_status_counts(orders: &[Order]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::ALL
        .iter()
        .map(|status| (*status, orders.iter().filter(|o| o.status == *status).count()))
        .collect()
}
