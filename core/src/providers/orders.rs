//! Order store trait.

use super::{Order, OrderLine, SelectedChoice};
use crate::error::Result;
use crate::state::{LineId, OrderId, OrderStatus};

/// Persistent collections for orders, order lines and selected choices.
///
/// Lines and selections are append-only; the only in-place mutation is the
/// order's status, exposed exclusively as a conditional update so two
/// concurrent transitions cannot both win.
pub trait OrderStore: Send + Sync {
    /// Persist a new order.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn insert_order(&self, order: &Order) -> Result<()>;

    /// Fetch an order by id.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the order does not exist.
    async fn order(&self, id: OrderId) -> Result<Order>;

    /// Atomically set the order's status to `next` if and only if it
    /// currently equals `expected` (compare-and-swap).
    ///
    /// Returns `true` when the swap applied, `false` when the order is
    /// missing or its status did not match; callers re-read to attribute
    /// which.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn update_status_if(
        &self,
        id: OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<bool>;

    /// Persist a line together with its selected choices as one atomic
    /// write: either everything commits or nothing does.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn insert_line(&self, line: &OrderLine, selections: &[SelectedChoice]) -> Result<()>;

    /// All lines of an order, in append order. Empty when the order has no
    /// lines (or does not exist; callers validate existence separately).
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn lines_for(&self, order: OrderId) -> Result<Vec<OrderLine>>;

    /// All selected choices of a line, in append order.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn selections_for(&self, line: LineId) -> Result<Vec<SelectedChoice>>;
}
