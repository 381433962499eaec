//! HTTP handlers, one per named core operation.
//!
//! Every handler decodes a flat input record, invokes exactly one core
//! operation, and relays the structured result: a success payload, a row
//! list for queries, or the `{"error"}` shape via
//! [`crate::error::AppError`].

use serde::Serialize;

pub mod accounts;
pub mod health;
pub mod menu;
pub mod orders;

/// The empty success payload `{}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Empty {}
