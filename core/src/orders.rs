//! Order lifecycle component.
//!
//! Captures a customer's order and its chosen customizations and advances
//! it through `pending → completed | canceled`. Lines carry
//! caller-supplied display-name snapshots so recorded orders stay stable
//! under later catalog edits. The component accepts pre-validated
//! selections: checking a selection set against the catalog (via
//! [`crate::validator::SelectionValidator`]) is the orchestrating layer's
//! responsibility, performed before `add_item` is called.

use crate::error::{CafeError, Result};
use crate::providers::{Order, OrderLine, OrderStore, SelectedChoice};
use crate::state::{ChoiceId, ItemId, LineId, OptionId, OrderId, OrderStatus, SelectionId, UserId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One selection handed to [`OrderDesk::add_item`], display names included
/// so the order component stays independent of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionInput {
    /// The selected option.
    pub option: OptionId,

    /// The selected choice.
    pub choice: ChoiceId,

    /// Snapshot of the option's display name.
    pub display_option_name: String,

    /// Snapshot of the choice's display name.
    pub display_choice_name: String,
}

/// One order line with its nested selections, as returned by
/// [`OrderDesk::lines`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineView {
    /// Line ID.
    pub id: LineId,

    /// The ordered item.
    pub item: ItemId,

    /// Quantity.
    pub qty: u32,

    /// Snapshot of the item's display name.
    pub display_item_name: String,

    /// The line's selections, in append order.
    pub selections: Vec<LineSelectionView>,
}

/// One recorded selection on a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSelectionView {
    /// The selected option.
    pub option: OptionId,

    /// The selected choice.
    pub choice: ChoiceId,

    /// Snapshot of the option's display name.
    pub display_option_name: String,

    /// Snapshot of the choice's display name.
    pub display_choice_name: String,
}

/// Order lifecycle operations over an injected store handle.
#[derive(Debug, Clone)]
pub struct OrderDesk<S> {
    store: S,
}

impl<S: OrderStore> OrderDesk<S> {
    /// Create an order component over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Open a new pending order for a user. Always succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the store fails.
    pub async fn open(&self, user: UserId) -> Result<OrderId> {
        let order = Order {
            id: OrderId::new(),
            user,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        self.store.insert_order(&order).await?;
        tracing::debug!(order = %order.id, user = %user, "order opened");
        Ok(order.id)
    }

    /// Append a line (and its selections) to a pending order. The line and
    /// its selections commit atomically.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `qty` is zero, `NotFound` if the order
    /// is unknown, `InvalidState` (naming the current status) if the order
    /// is no longer pending.
    pub async fn add_item(
        &self,
        order: OrderId,
        item: ItemId,
        qty: u32,
        display_item_name: &str,
        selections: &[SelectionInput],
    ) -> Result<LineId> {
        if qty == 0 {
            return Err(CafeError::invalid_argument(
                "Quantity must be a positive number.",
            ));
        }

        let existing = self.store.order(order).await?;
        if existing.status != OrderStatus::Pending {
            tracing::warn!(order = %order, status = %existing.status, "add_item on sealed order");
            return Err(CafeError::invalid_state(format!(
                "Cannot add items to an order with status '{}'. Only 'pending' orders can be modified.",
                existing.status
            )));
        }

        let line = OrderLine {
            id: LineId::new(),
            order,
            item,
            qty,
            display_item_name: display_item_name.to_owned(),
        };
        let selected: Vec<SelectedChoice> = selections
            .iter()
            .map(|s| SelectedChoice {
                id: SelectionId::new(),
                line: line.id,
                option: s.option,
                choice: s.choice,
                display_option_name: s.display_option_name.clone(),
                display_choice_name: s.display_choice_name.clone(),
            })
            .collect();

        self.store.insert_line(&line, &selected).await?;
        Ok(line.id)
    }

    /// Precondition gate before completion: verifies the order exists and
    /// is still pending, changing nothing. The "order must have at least
    /// one line" rule is the orchestrating layer's, enforced before this
    /// call.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order is unknown, `InvalidState` (naming
    /// the current status) otherwise.
    pub async fn submit(&self, order: OrderId) -> Result<()> {
        let existing = self.store.order(order).await?;
        if existing.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(CafeError::invalid_state(format!(
                "Order with ID {order} is already '{}' and cannot be submitted.",
                existing.status
            )))
        }
    }

    /// Transition a pending order to `completed`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order is unknown, `InvalidState` (naming
    /// the current status) if it is no longer pending.
    pub async fn complete(&self, order: OrderId) -> Result<()> {
        self.seal(order, OrderStatus::Completed, "completed").await
    }

    /// Transition a pending order to `canceled`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order is unknown, `InvalidState` (naming
    /// the current status) if it is no longer pending.
    pub async fn cancel(&self, order: OrderId) -> Result<()> {
        self.seal(order, OrderStatus::Canceled, "canceled").await
    }

    /// The order's lines with nested selections, in append order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order is unknown.
    pub async fn lines(&self, order: OrderId) -> Result<Vec<OrderLineView>> {
        self.store.order(order).await?;
        let lines = self.store.lines_for(order).await?;
        let mut views = Vec::with_capacity(lines.len());
        for line in lines {
            let selections = self
                .store
                .selections_for(line.id)
                .await?
                .into_iter()
                .map(|s| LineSelectionView {
                    option: s.option,
                    choice: s.choice,
                    display_option_name: s.display_option_name,
                    display_choice_name: s.display_choice_name,
                })
                .collect();
            views.push(OrderLineView {
                id: line.id,
                item: line.item,
                qty: line.qty,
                display_item_name: line.display_item_name,
                selections,
            });
        }
        Ok(views)
    }

    /// The order's current status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order is unknown.
    pub async fn status(&self, order: OrderId) -> Result<OrderStatus> {
        Ok(self.store.order(order).await?.status)
    }

    /// The conditional read-modify-write both terminal transitions share:
    /// a compare-and-swap keyed on `Pending`, with a re-read only on the
    /// losing path to attribute `NotFound` vs `InvalidState`.
    async fn seal(&self, order: OrderId, next: OrderStatus, verb: &str) -> Result<()> {
        if self
            .store
            .update_status_if(order, OrderStatus::Pending, next)
            .await?
        {
            tracing::debug!(order = %order, status = %next, "order sealed");
            return Ok(());
        }
        let existing = self.store.order(order).await?;
        Err(CafeError::invalid_state(format!(
            "Order with ID {order} is already '{}' and cannot be {verb}.",
            existing.status
        )))
    }
}
