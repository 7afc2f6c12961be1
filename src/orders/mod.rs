//! Order tracking commands.
//!
//! The quick action walks the forward chain one step at a time:
//! pending -> processing -> shipped -> delivered. Skips and backward moves
//! are never offered. The direct-edit path is deliberately permissive at
//! the store level, which is how cancelled and returned stay reachable
//! from any state.

use crate::domain::aggregates::{Order, OrderStatus};
use crate::store::{Action, Store};
use crate::{AdminError, Result};

/// Advance an order one step along the forward chain. Fails from terminal
/// states; `updated_at` is refreshed by the update dispatch.
pub fn advance_status(store: &mut Store, order_id: &str) -> Result<OrderStatus> {
    let order = find(store, order_id)?;
    let next = order.status.next().ok_or(AdminError::NoForwardTransition(order.status))?;

    let mut updated = order.clone();
    updated.status = next;
    store.dispatch(Action::UpdateOrder(updated));
    tracing::info!(order = order_id, status = %next, "order advanced");
    Ok(next)
}

/// Direct status edit. No transition rules apply here; any status,
/// including cancelled and returned, may be set from any other.
pub fn edit_status(store: &mut Store, order_id: &str, status: OrderStatus) -> Result<()> {
    let mut updated = find(store, order_id)?.clone();
    updated.status = status;
    store.dispatch(Action::UpdateOrder(updated));
    Ok(())
}

pub fn update_order(store: &mut Store, order: Order) -> Result<()> {
    if !store.state().orders.iter().any(|o| o.id == order.id) {
        return Err(AdminError::OrderNotFound);
    }
    store.dispatch(Action::UpdateOrder(order));
    Ok(())
}

fn find<'a>(store: &'a Store, order_id: &str) -> Result<&'a Order> {
    store
        .state()
        .orders
        .iter()
        .find(|o| o.id == order_id)
        .ok_or(AdminError::OrderNotFound)
}
