//! # Barista Web
//!
//! The dispatch layer over `barista-core`: an Axum router that maps each
//! inbound request to exactly one named core operation and relays the
//! structured result verbatim: a success payload, a row list for
//! queries, or the uniform `{"error": "<message>"}` shape.
//!
//! The core never sees HTTP; this crate is the swappable
//! request-correlation collaborator. It also owns the two orchestration
//! rules that sit between components:
//!
//! - `add_item` runs the caller-supplied selections through the Selection
//!   Validator first and aborts with the verdict's reason on rejection;
//! - `submit` requires the order to already have at least one line.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::router;
pub use state::AppState;
