//! Derived, read-only aggregation over products and orders.
//!
//! Nothing here is stored independently: dashboard stats and report metrics
//! are rebuilt from the source collections on every computation, trading
//! recomputation cost for always-fresh derived state.

pub mod dashboard;
pub mod export;
pub mod metrics;

pub use dashboard::DashboardStats;
pub use export::ReportExport;
pub use metrics::{CategorySales, DateRange, ProductSales, ReportMetrics};

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::aggregates::Order;
use crate::domain::value_objects::Money;

/// One calendar day of sales, bucketed in local time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub sales: Money,
    pub orders: usize,
}

/// Sum of order totals. Orders in a foreign currency are skipped rather
/// than coerced, matching how the order aggregate folds its own totals.
pub(crate) fn sum_totals<'a, I>(orders: I) -> Money
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut iter = orders.into_iter().peekable();
    let currency = iter
        .peek()
        .map(|o| o.total.currency().to_string())
        .unwrap_or_else(|| "USD".to_string());
    iter.fold(Money::zero(&currency), |acc, order| acc.add(&order.total).unwrap_or(acc))
}

/// Contiguous daily buckets spanning `[start, end]` in local calendar days.
/// Every day is present, zero-filled when no orders landed on it.
pub(crate) fn daily_series(orders: &[&Order], start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<SalesPoint> {
    let mut by_day: HashMap<NaiveDate, Vec<&Order>> = HashMap::new();
    for order in orders {
        by_day
            .entry(order.created_at.with_timezone(&Local).date_naive())
            .or_default()
            .push(order);
    }

    let last = end.with_timezone(&Local).date_naive();
    let mut day = start.with_timezone(&Local).date_naive();
    let mut series = Vec::new();
    while day <= last {
        let day_orders = by_day.get(&day).map(Vec::as_slice).unwrap_or(&[]);
        series.push(SalesPoint {
            date: day,
            sales: sum_totals(day_orders.iter().copied()),
            orders: day_orders.len(),
        });
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{Address, Order};
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn order_at(days_ago: i64, total_cents: i64) -> Order {
        let mut order = Order::new(
            format!("ORD-{days_ago}"),
            "cust-1",
            "jane@example.com",
            "Jane Doe",
            vec![],
            Money::usd(Decimal::new(total_cents, 2)),
            Money::usd(Decimal::ZERO),
            Money::usd(Decimal::ZERO),
            Address::default(),
            Address::default(),
        );
        order.created_at = Utc::now() - Duration::days(days_ago);
        order
    }

    #[test]
    fn test_sum_totals() {
        let orders = vec![order_at(0, 10000), order_at(0, 5000)];
        let refs: Vec<&Order> = orders.iter().collect();
        assert_eq!(sum_totals(refs).amount(), Decimal::new(15000, 2));
    }

    #[test]
    fn test_sum_totals_empty() {
        let none: Vec<&Order> = Vec::new();
        assert_eq!(sum_totals(none).amount(), Decimal::ZERO);
    }

    #[test]
    fn test_daily_series_is_contiguous_and_zero_filled() {
        let orders = vec![order_at(0, 10000), order_at(2, 5000)];
        let refs: Vec<&Order> = orders.iter().collect();
        let end = Utc::now();
        let start = end - Duration::days(4);

        let series = daily_series(&refs, start, end);
        assert_eq!(series.len(), 5);
        for window in series.windows(2) {
            assert_eq!(window[0].date.succ_opt(), Some(window[1].date));
        }
        assert_eq!(series[4].orders, 1);
        assert_eq!(series[4].sales.amount(), Decimal::new(10000, 2));
        assert_eq!(series[2].orders, 1);
        assert_eq!(series[3].orders, 0);
        assert_eq!(series[3].sales.amount(), Decimal::ZERO);
    }
}
