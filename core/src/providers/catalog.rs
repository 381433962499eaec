//! Catalog store trait.

use super::{Applicability, Choice, Item, MenuOption};
use crate::error::Result;
use crate::state::{ChoiceId, ItemId, OptionId};

/// Persistent collections for items, options, choices and applicability
/// pairings.
///
/// Implementations enforce referential existence and the (item, option)
/// uniqueness rule; everything else is the [`crate::catalog::Catalog`]
/// component's job. Every operation is internally atomic with respect to
/// its own records.
pub trait CatalogStore: Send + Sync {
    /// Persist a new item.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn insert_item(&self, item: &Item) -> Result<()>;

    /// Fetch an item by id.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the item does not exist.
    async fn item(&self, id: ItemId) -> Result<Item>;

    /// Set an item's active flag.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the item does not exist.
    async fn set_item_active(&self, id: ItemId, is_active: bool) -> Result<()>;

    /// Persist a new option.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn insert_option(&self, option: &MenuOption) -> Result<()>;

    /// Fetch an option by id.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the option does not exist.
    async fn option(&self, id: OptionId) -> Result<MenuOption>;

    /// Persist a new choice.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn insert_choice(&self, choice: &Choice) -> Result<()>;

    /// Fetch a choice by id.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the choice does not exist.
    async fn choice(&self, id: ChoiceId) -> Result<Choice>;

    /// All choices belonging to an option, in creation order. Empty when
    /// the option has no choices (or does not exist; callers validate
    /// existence separately).
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn choices_of(&self, option: OptionId) -> Result<Vec<Choice>>;

    /// Record that `option` is offered on `item`, with an empty
    /// disallow-set.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::Conflict` if the pair is already attached.
    async fn insert_applicability(&self, item: ItemId, option: OptionId) -> Result<()>;

    /// Remove the (item, option) pairing, discarding its disallow-set.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if no such pairing exists.
    async fn remove_applicability(&self, item: ItemId, option: OptionId) -> Result<()>;

    /// Fetch the (item, option) pairing.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if no such pairing exists.
    async fn applicability(&self, item: ItemId, option: OptionId) -> Result<Applicability>;

    /// All pairings for an item, in attachment order. Empty when the item
    /// has no attached options (or does not exist; callers validate
    /// existence separately).
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn applicabilities_for(&self, item: ItemId) -> Result<Vec<Applicability>>;

    /// Atomically add a choice to the pairing's disallow-set. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the pairing does not exist.
    async fn add_disallowed(
        &self,
        item: ItemId,
        option: OptionId,
        choice: ChoiceId,
    ) -> Result<()>;

    /// Atomically remove a choice from the pairing's disallow-set.
    /// Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the pairing does not exist.
    async fn remove_disallowed(
        &self,
        item: ItemId,
        option: OptionId,
        choice: ChoiceId,
    ) -> Result<()>;
}
