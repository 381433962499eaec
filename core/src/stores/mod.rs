//! Store implementations.
//!
//! Only the in-memory backend ships with the core; durable backends plug
//! in behind the same [`crate::providers`] traits.

pub mod memory;
