//! Single source of truth for the dashboard.
//!
//! All application state lives in one [`AppState`] owned by a [`Store`].
//! Mutation happens exclusively through [`Store::dispatch`] with an
//! [`Action`] from the closed set below; every transition is a pure
//! `(state, action) -> state` step that rebuilds the affected collection.
//! Dispatch is synchronous: the action is fully applied, and the derived
//! dashboard aggregates refreshed, before the next read is observable.

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{AttributeDefinition, Category, Order, Product};
use crate::reports::dashboard::{self, DashboardStats};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub categories: Vec<Category>,
    pub attribute_definitions: Vec<AttributeDefinition>,
    /// Derived; rebuilt by the store whenever products or orders change.
    pub dashboard_stats: Option<DashboardStats>,
}

/// The closed action set. Update and delete match on entity id; an id that
/// matches no record leaves the collection untouched, which is the one
/// remaining no-op path now that unknown action kinds are unrepresentable.
#[derive(Clone, Debug)]
pub enum Action {
    SetProducts(Vec<Product>),
    AddProduct(Product),
    UpdateProduct(Product),
    DeleteProduct(String),
    SetOrders(Vec<Order>),
    AddOrder(Order),
    UpdateOrder(Order),
    DeleteOrder(String),
    SetCategories(Vec<Category>),
    AddCategory(Category),
    UpdateCategory(Category),
    DeleteCategory(String),
    SetAttributeDefinitions(Vec<AttributeDefinition>),
    SetDashboardStats(DashboardStats),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetProducts(_) => "set_products",
            Action::AddProduct(_) => "add_product",
            Action::UpdateProduct(_) => "update_product",
            Action::DeleteProduct(_) => "delete_product",
            Action::SetOrders(_) => "set_orders",
            Action::AddOrder(_) => "add_order",
            Action::UpdateOrder(_) => "update_order",
            Action::DeleteOrder(_) => "delete_order",
            Action::SetCategories(_) => "set_categories",
            Action::AddCategory(_) => "add_category",
            Action::UpdateCategory(_) => "update_category",
            Action::DeleteCategory(_) => "delete_category",
            Action::SetAttributeDefinitions(_) => "set_attribute_definitions",
            Action::SetDashboardStats(_) => "set_dashboard_stats",
        }
    }

    /// Actions whose application must trigger a dashboard recomputation.
    fn touches_derived_sources(&self) -> bool {
        matches!(
            self,
            Action::SetProducts(_)
                | Action::AddProduct(_)
                | Action::UpdateProduct(_)
                | Action::DeleteProduct(_)
                | Action::SetOrders(_)
                | Action::AddOrder(_)
                | Action::UpdateOrder(_)
                | Action::DeleteOrder(_)
        )
    }
}

/// Pure state transition. The incoming state is consumed and the affected
/// collection rebuilt, never edited through a shared handle. `updated_at`
/// on products and orders is refreshed here, at dispatch time, so repeated
/// dispatch of an identical payload is idempotent apart from the advancing
/// timestamp.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetProducts(products) => state.products = products,
        Action::AddProduct(product) => state.products.push(product),
        Action::UpdateProduct(mut product) => {
            product.touch();
            state.products = state
                .products
                .into_iter()
                .map(|p| if p.id == product.id { product.clone() } else { p })
                .collect();
        }
        Action::DeleteProduct(id) => {
            state.products = state.products.into_iter().filter(|p| p.id != id).collect();
        }
        Action::SetOrders(orders) => state.orders = orders,
        Action::AddOrder(order) => state.orders.push(order),
        Action::UpdateOrder(mut order) => {
            order.touch();
            state.orders = state
                .orders
                .into_iter()
                .map(|o| if o.id == order.id { order.clone() } else { o })
                .collect();
        }
        Action::DeleteOrder(id) => {
            state.orders = state.orders.into_iter().filter(|o| o.id != id).collect();
        }
        Action::SetCategories(categories) => state.categories = categories,
        Action::AddCategory(category) => state.categories.push(category),
        Action::UpdateCategory(category) => {
            state.categories = state
                .categories
                .into_iter()
                .map(|c| if c.id == category.id { category.clone() } else { c })
                .collect();
        }
        Action::DeleteCategory(id) => {
            state.categories = state.categories.into_iter().filter(|c| c.id != id).collect();
        }
        Action::SetAttributeDefinitions(definitions) => state.attribute_definitions = definitions,
        Action::SetDashboardStats(stats) => state.dashboard_stats = Some(stats),
    }
    state
}

/// State holder owned by the application root. Single logical writer;
/// consumers read snapshots through [`Store::state`].
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self { state: AppState::default() }
    }

    /// A store seeded with the mock catalog, matching application start.
    pub fn with_seed() -> Self {
        let mut store = Self { state: seed::initial_state() };
        store.refresh_dashboard();
        store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        let refresh = action.touches_derived_sources();
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        tracing::debug!(action = kind, "dispatched");
        if refresh {
            self.refresh_dashboard();
        }
    }

    fn refresh_dashboard(&mut self) {
        self.state.dashboard_stats = Some(dashboard::compute(&self.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::product::VariantAttribute;
    use crate::domain::aggregates::{Address, OrderItem, ProductVariant};
    use crate::domain::value_objects::{Money, Sku};
    use rust_decimal::Decimal;

    fn sample_product(name: &str, sku: &str) -> Product {
        let sku = Sku::new(sku).unwrap();
        let mut product = Product::new(name, sku.clone(), "womens-clothing", Money::usd(Decimal::new(29999, 2)));
        product.variants.push(ProductVariant::new(
            &product.id,
            &sku,
            vec![VariantAttribute::new("Color", "Black"), VariantAttribute::new("Size", "S")],
            10,
            5,
        ));
        product
    }

    fn sample_order(total_cents: i64) -> Order {
        Order::new(
            "ORD-100", "cust-1", "jane@example.com", "Jane Doe",
            Vec::<OrderItem>::new(),
            Money::usd(Decimal::new(total_cents, 2)),
            Money::usd(Decimal::ZERO),
            Money::usd(Decimal::ZERO),
            Address::default(), Address::default(),
        )
    }

    #[test]
    fn test_add_update_delete_product() {
        let mut store = Store::new();
        let product = sample_product("Winter Sweater", "KAZ-001");
        let id = product.id.clone();

        store.dispatch(Action::AddProduct(product.clone()));
        assert_eq!(store.state().products.len(), 1);

        let mut renamed = product.clone();
        renamed.name = "Wool Sweater".into();
        store.dispatch(Action::UpdateProduct(renamed));
        assert_eq!(store.state().products[0].name, "Wool Sweater");

        store.dispatch(Action::DeleteProduct(id));
        assert!(store.state().products.is_empty());
    }

    #[test]
    fn test_update_refreshes_timestamp_and_is_idempotent() {
        let mut store = Store::new();
        let product = sample_product("Winter Sweater", "KAZ-001");
        store.dispatch(Action::AddProduct(product.clone()));

        store.dispatch(Action::UpdateProduct(product.clone()));
        let first = store.state().products[0].clone();
        store.dispatch(Action::UpdateProduct(product.clone()));
        let second = store.state().products[0].clone();

        assert_eq!(store.state().products.len(), 1);
        assert_eq!(first.name, second.name);
        assert_eq!(first.sku, second.sku);
        assert!(second.updated_at >= first.updated_at);
        assert!(first.updated_at >= product.updated_at);
    }

    #[test]
    fn test_update_with_unknown_id_is_noop() {
        let mut store = Store::new();
        store.dispatch(Action::AddProduct(sample_product("Winter Sweater", "KAZ-001")));
        let before = store.state().products.clone();

        let stranger = sample_product("Phantom", "PHA-001");
        store.dispatch(Action::UpdateProduct(stranger));

        assert_eq!(store.state().products.len(), before.len());
        assert_eq!(store.state().products[0].name, before[0].name);
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let mut store = Store::with_seed();
        store.dispatch(Action::SetProducts(vec![]));
        assert!(store.state().products.is_empty());
        store.dispatch(Action::SetOrders(vec![]));
        assert!(store.state().orders.is_empty());
    }

    #[test]
    fn test_store_does_not_guard_category_deletes() {
        // Referential integrity is the caller's job (see crate::catalog);
        // a raw dispatch goes through unchecked.
        let mut store = Store::with_seed();
        let id = store.state().categories[0].id.clone();
        store.dispatch(Action::DeleteCategory(id.clone()));
        assert!(store.state().categories.iter().all(|c| c.id != id));
    }

    #[test]
    fn test_dashboard_recomputed_on_order_changes() {
        let mut store = Store::new();
        assert!(store.state().dashboard_stats.is_none());

        store.dispatch(Action::AddOrder(sample_order(10000)));
        let stats = store.state().dashboard_stats.as_ref().unwrap();
        assert_eq!(stats.today_orders, 1);
        assert_eq!(stats.today_sales.amount(), Decimal::new(10000, 2));

        store.dispatch(Action::SetOrders(vec![]));
        let stats = store.state().dashboard_stats.as_ref().unwrap();
        assert_eq!(stats.today_orders, 0);
    }

    #[test]
    fn test_category_actions_leave_dashboard_untouched() {
        let mut store = Store::new();
        store.dispatch(Action::AddCategory(Category::new("Accessories")));
        assert!(store.state().dashboard_stats.is_none());
        assert_eq!(store.state().categories.len(), 1);
    }

    #[test]
    fn test_seeded_store() {
        let store = Store::with_seed();
        let state = store.state();
        assert!(!state.products.is_empty());
        assert!(!state.orders.is_empty());
        assert!(!state.categories.is_empty());
        assert!(!state.attribute_definitions.is_empty());
        assert!(state.dashboard_stats.is_some());
    }
}
