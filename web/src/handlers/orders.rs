//! Order lifecycle endpoints.
//!
//! This module owns the two orchestration rules the core deliberately
//! leaves to the dispatch layer: `add_item` consults the Selection
//! Validator before touching the order, and `submit` requires at least
//! one recorded line.

use super::Empty;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use barista_core::{ItemId, LineId, OrderId, OrderLineView, OrderStatus, Selection, SelectionInput, UserId};
use serde::{Deserialize, Serialize};

/// Request to open an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrderRequest {
    /// The user the order belongs to.
    pub user: UserId,
}

/// Response after opening an order.
#[derive(Debug, Clone, Serialize)]
pub struct OpenOrderResponse {
    /// The new order's id.
    pub order: OrderId,
}

/// Request to add a line to an order. Display names are supplied by the
/// caller and recorded as snapshots.
#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    /// The ordered item.
    pub item: ItemId,

    /// Quantity, strictly positive.
    pub qty: u32,

    /// Snapshot of the item's display name.
    pub display_item_name: String,

    /// The line's selections with display-name snapshots.
    pub selections: Vec<SelectionInput>,
}

/// Response after adding a line.
#[derive(Debug, Clone, Serialize)]
pub struct AddItemResponse {
    /// The new line's id.
    pub line: LineId,
}

/// One status row, as returned by the status query.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRow {
    /// The order's current status.
    pub status: OrderStatus,
}

/// Open a new pending order.
///
/// # Endpoint
///
/// ```text
/// POST /orders
/// {"user": "..."}
/// ```
pub async fn open_order(
    State(state): State<AppState>,
    Json(request): Json<OpenOrderRequest>,
) -> Result<(StatusCode, Json<OpenOrderResponse>), AppError> {
    let order = state.orders.open(request.user).await?;
    Ok((StatusCode::CREATED, Json(OpenOrderResponse { order })))
}

/// Add a line to a pending order.
///
/// The caller-supplied selections are judged by the Selection Validator
/// first; a rejecting verdict aborts the request with the verdict's
/// reason and the order is never touched.
///
/// # Endpoint
///
/// ```text
/// POST /orders/:order/items
/// {
///   "item": "...",
///   "qty": 1,
///   "display_item_name": "Latte",
///   "selections": [
///     {
///       "option": "...",
///       "choice": "...",
///       "display_option_name": "Temperature",
///       "display_choice_name": "Hot"
///     }
///   ]
/// }
/// ```
pub async fn add_item(
    State(state): State<AppState>,
    Path(order): Path<OrderId>,
    Json(request): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<AddItemResponse>), AppError> {
    let pairs: Vec<Selection> = request
        .selections
        .iter()
        .map(|s| Selection {
            option: s.option,
            choice: s.choice,
        })
        .collect();
    let verdict = state
        .validator
        .is_selection_set_valid(request.item, &pairs)
        .await?;
    if !verdict.ok {
        let reason = verdict
            .reason
            .unwrap_or_else(|| "Selection set is not valid.".to_owned());
        tracing::warn!(order = %order, %reason, "add_item rejected by validator");
        return Err(AppError::validation(reason));
    }

    let line = state
        .orders
        .add_item(
            order,
            request.item,
            request.qty,
            &request.display_item_name,
            &request.selections,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(AddItemResponse { line })))
}

/// Submit a pending order. The order must already have at least one line;
/// the gate itself changes nothing.
///
/// # Endpoint
///
/// ```text
/// POST /orders/:order/submit
/// ```
pub async fn submit_order(
    State(state): State<AppState>,
    Path(order): Path<OrderId>,
) -> Result<Json<Empty>, AppError> {
    if state.orders.lines(order).await?.is_empty() {
        return Err(AppError::validation("Order must have at least one line."));
    }
    state.orders.submit(order).await?;
    Ok(Json(Empty {}))
}

/// Complete a pending order.
///
/// # Endpoint
///
/// ```text
/// POST /orders/:order/complete
/// ```
pub async fn complete_order(
    State(state): State<AppState>,
    Path(order): Path<OrderId>,
) -> Result<Json<Empty>, AppError> {
    state.orders.complete(order).await?;
    Ok(Json(Empty {}))
}

/// Cancel a pending order.
///
/// # Endpoint
///
/// ```text
/// POST /orders/:order/cancel
/// ```
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order): Path<OrderId>,
) -> Result<Json<Empty>, AppError> {
    state.orders.cancel(order).await?;
    Ok(Json(Empty {}))
}

/// The order's lines with nested selections, as a row list.
///
/// # Endpoint
///
/// ```text
/// GET /orders/:order/lines
/// ```
pub async fn order_lines(
    State(state): State<AppState>,
    Path(order): Path<OrderId>,
) -> Result<Json<Vec<OrderLineView>>, AppError> {
    Ok(Json(state.orders.lines(order).await?))
}

/// The order's status, as a one-element row list.
///
/// # Endpoint
///
/// ```text
/// GET /orders/:order/status
/// ```
pub async fn order_status(
    State(state): State<AppState>,
    Path(order): Path<OrderId>,
) -> Result<Json<Vec<StatusRow>>, AppError> {
    let status = state.orders.status(order).await?;
    Ok(Json(vec![StatusRow { status }]))
}
