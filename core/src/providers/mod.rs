//! Persistent-collection interfaces.
//!
//! This module defines the record types the core persists and the store
//! traits that abstract over their storage. The traits are a plain
//! persistent-collection interface: create, fetch-by-key, update-by-key,
//! delete-by-key and query-by-predicate, enforcing existence and
//! uniqueness but no other business rule.
//!
//! Components receive a store handle by value (dependency injection); the
//! in-memory implementations live in [`crate::stores::memory`], and any
//! durable backend can be swapped in by implementing the same traits.

use crate::state::{ChoiceId, ItemId, LineId, OptionId, OrderId, OrderStatus, SelectionId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod catalog;
pub mod credentials;
pub mod orders;
pub mod profiles;

// Re-export store traits
pub use catalog::CatalogStore;
pub use credentials::CredentialStore;
pub use orders::OrderStore;
pub use profiles::ProfileStore;

/// An orderable catalog item.
///
/// Items own no options directly; offerings are recorded as
/// [`Applicability`] pairings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item ID.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Whether the item is currently orderable. Defaults to `true`.
    pub is_active: bool,
}

/// A customization option, e.g. "Temperature" or "Milk".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    /// Option ID.
    pub id: OptionId,

    /// Display name.
    pub name: String,

    /// Whether every attached item requires at least one selection of
    /// this option.
    pub required: bool,

    /// Maximum number of selections of this option on one line. At least 1.
    pub max_choices: u32,
}

/// A concrete choice belonging to exactly one option for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice ID.
    pub id: ChoiceId,

    /// The option this choice belongs to.
    pub option: OptionId,

    /// Display name.
    pub name: String,
}

/// The fact that an option is offered on an item, plus that pairing's
/// independent disallow-set of choices.
///
/// The (item, option) pair is unique; the disallow-set only ever contains
/// choices that belong to the pairing's option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicability {
    /// The item offering the option.
    pub item: ItemId,

    /// The offered option.
    pub option: OptionId,

    /// Choices of the option excluded on this item.
    pub disallowed: HashSet<ChoiceId>,
}

impl Applicability {
    /// A fresh pairing with an empty disallow-set.
    #[must_use]
    pub fn new(item: ItemId, option: OptionId) -> Self {
        Self {
            item,
            option,
            disallowed: HashSet::new(),
        }
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,

    /// The user the order belongs to.
    pub user: UserId,

    /// Lifecycle status; monotone, see [`OrderStatus`].
    pub status: OrderStatus,

    /// When the order was opened.
    pub created_at: DateTime<Utc>,
}

/// One line of an order. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line ID.
    pub id: LineId,

    /// The order this line belongs to.
    pub order: OrderId,

    /// The ordered item.
    pub item: ItemId,

    /// Quantity, strictly positive.
    pub qty: u32,

    /// Snapshot of the item's display name at order time, decoupled from
    /// later catalog renames.
    pub display_item_name: String,
}

/// One chosen (option, choice) pair on a line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedChoice {
    /// Selection ID.
    pub id: SelectionId,

    /// The line this selection belongs to.
    pub line: LineId,

    /// The selected option.
    pub option: OptionId,

    /// The selected choice.
    pub choice: ChoiceId,

    /// Snapshot of the option's display name at order time.
    pub display_option_name: String,

    /// Snapshot of the choice's display name at order time.
    pub display_choice_name: String,
}

/// A stored login credential. The password itself is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The user the credential authenticates.
    pub user: UserId,

    /// Unique username.
    pub username: String,

    /// Salted password hash, `{salt}${digest}` with both parts base64.
    pub password_hash: String,
}

/// A user's display profile, keyed by user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The user the profile describes.
    pub user: UserId,

    /// Display name. Empty until set.
    pub name: String,

    /// Free-form bio. Empty until set.
    pub bio: String,

    /// Optional avatar reference (URL or encoded image).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Profile {
    /// An empty profile for the given user.
    #[must_use]
    pub const fn empty(user: UserId) -> Self {
        Self {
            user,
            name: String::new(),
            bio: String::new(),
            avatar: None,
        }
    }
}
