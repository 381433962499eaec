//! In-memory order store.

use crate::error::{CafeError, Result};
use crate::providers::{Order, OrderLine, OrderStore, SelectedChoice};
use crate::state::{LineId, OrderId, OrderStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory order store.
///
/// Lines and selections are append-only vectors; the status update is a
/// compare-and-swap performed under the same lock as every other
/// operation, so concurrent `complete`/`cancel` calls on one order cannot
/// both win.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    inner: Arc<Mutex<Collections>>,
}

#[derive(Debug, Default)]
struct Collections {
    orders: HashMap<OrderId, Order>,
    lines: HashMap<OrderId, Vec<OrderLine>>,
    selections: HashMap<LineId, Vec<SelectedChoice>>,
}

impl MemoryOrderStore {
    /// Create a new, empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> Result<MutexGuard<'_, Collections>> {
        self.inner
            .lock()
            .map_err(|_| CafeError::storage("order store lock poisoned"))
    }
}

impl OrderStore for MemoryOrderStore {
    async fn insert_order(&self, order: &Order) -> Result<()> {
        let mut collections = self.collections()?;
        collections.orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn order(&self, id: OrderId) -> Result<Order> {
        self.collections()?
            .orders
            .get(&id)
            .cloned()
            .ok_or_else(|| CafeError::not_found("Order", id))
    }

    async fn update_status_if(
        &self,
        id: OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<bool> {
        let mut collections = self.collections()?;
        match collections.orders.get_mut(&id) {
            Some(order) if order.status == expected => {
                order.status = next;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn insert_line(&self, line: &OrderLine, selections: &[SelectedChoice]) -> Result<()> {
        let mut collections = self.collections()?;
        collections
            .lines
            .entry(line.order)
            .or_default()
            .push(line.clone());
        collections.selections.insert(line.id, selections.to_vec());
        Ok(())
    }

    async fn lines_for(&self, order: OrderId) -> Result<Vec<OrderLine>> {
        Ok(self
            .collections()?
            .lines
            .get(&order)
            .cloned()
            .unwrap_or_default())
    }

    async fn selections_for(&self, line: LineId) -> Result<Vec<SelectedChoice>> {
        Ok(self
            .collections()?
            .selections
            .get(&line)
            .cloned()
            .unwrap_or_default())
    }
}
