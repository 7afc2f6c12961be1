//! Dashboard aggregates: the at-a-glance numbers recomputed after every
//! product or order mutation.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::Order;
use crate::domain::value_objects::Money;
use crate::reports::metrics::{self, DateRange, ProductSales};
use crate::reports::{daily_series, sum_totals, SalesPoint};
use crate::store::AppState;

/// How many orders the "recent" list shows.
const RECENT_ORDERS: usize = 5;
/// How many sellers the dashboard ranking shows.
const TOP_SELLERS: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardStats {
    pub today_sales: Money,
    pub today_orders: usize,
    pub low_stock_products: usize,
    pub total_products: usize,
    pub recent_orders: Vec<Order>,
    pub top_selling_products: Vec<ProductSales>,
    pub sales_chart: Vec<SalesPoint>,
}

pub fn compute(state: &AppState) -> DashboardStats {
    compute_at(state, Utc::now())
}

pub fn compute_at(state: &AppState, now: DateTime<Utc>) -> DashboardStats {
    // Calendar-date match in local time, not a rolling 24h window.
    let today = now.with_timezone(&Local).date_naive();
    let todays: Vec<&Order> = state
        .orders
        .iter()
        .filter(|o| o.created_at.with_timezone(&Local).date_naive() == today)
        .collect();

    let mut recent: Vec<Order> = state.orders.clone();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_ORDERS);

    let mut top_selling = metrics::compute_at(state, DateRange::Last30Days, now).top_products;
    top_selling.truncate(TOP_SELLERS);

    let (week_start, week_end) = DateRange::Last7Days.window_from(now);
    let week_orders: Vec<&Order> = state
        .orders
        .iter()
        .filter(|o| o.created_at >= week_start && o.created_at <= week_end)
        .collect();

    DashboardStats {
        today_sales: sum_totals(todays.iter().copied()),
        today_orders: todays.len(),
        low_stock_products: state.products.iter().filter(|p| p.has_low_stock()).count(),
        total_products: state.products.len(),
        recent_orders: recent,
        top_selling_products: top_selling,
        sales_chart: daily_series(&week_orders, week_start, week_end),
    }
}
