//! Error types for catalog and order operations.

use std::fmt;
use thiserror::Error;

/// Result type alias for catalog and order operations.
pub type Result<T> = std::result::Result<T, CafeError>;

/// Error taxonomy shared by every component in the core.
///
/// Errors are values: operations never panic on a business-rule violation,
/// they return one of these variants with the message that is relayed to
/// the caller verbatim by the dispatch layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CafeError {
    /// A referenced id (or an item/option pairing) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed or out-of-range input, e.g. a zero quantity or a choice
    /// that does not belong to the stated option.
    #[error("{0}")]
    InvalidArgument(String),

    /// A uniqueness rule was violated, e.g. attaching an already-attached
    /// option or registering a taken username.
    #[error("{0}")]
    Conflict(String),

    /// The operation is illegal in the entity's current lifecycle state,
    /// e.g. completing a canceled order. The message names that state.
    #[error("{0}")]
    InvalidState(String),

    /// The storage backend failed. Never produced by a business rule.
    #[error("storage backend failure: {0}")]
    Storage(String),
}

impl CafeError {
    /// `NotFound` for an entity referenced by id, with the uniform
    /// "`{entity}` with ID {id} not found." message.
    #[must_use]
    pub fn not_found(entity: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{entity} with ID {id} not found."))
    }

    /// `InvalidArgument` with the given message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// `Conflict` with the given message.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// `InvalidState` with the given message.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// `Storage` with the given message.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Returns `true` if this error reports a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if this error is due to invalid caller input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this error reports a uniqueness violation.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns `true` if this error reports an illegal lifecycle state.
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
