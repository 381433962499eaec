//! Catalog management component.
//!
//! Owns the orderable catalog: items, customization options, choices, and
//! the per-item applicability pairings with their disallow-sets. The
//! component enforces the catalog's consistency rules; referential
//! existence and pair uniqueness live in the injected [`CatalogStore`].

use crate::error::{CafeError, Result};
use crate::providers::{CatalogStore, Choice, Item, MenuOption};
use crate::state::{ChoiceId, ItemId, OptionId};

/// Catalog management operations over an injected store handle.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
}

impl<S: CatalogStore> Catalog<S> {
    /// Create a catalog component over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a new item. New items default to active. Always succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the store fails.
    pub async fn create_item(&self, name: &str, description: &str) -> Result<ItemId> {
        let item = Item {
            id: ItemId::new(),
            name: name.to_owned(),
            description: description.to_owned(),
            is_active: true,
        };
        self.store.insert_item(&item).await?;
        tracing::debug!(item = %item.id, name, "item created");
        Ok(item.id)
    }

    /// Activate or deactivate an item.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist.
    pub async fn set_item_active(&self, item: ItemId, is_active: bool) -> Result<()> {
        self.store.set_item_active(item, is_active).await
    }

    /// Create a new customization option.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `max_choices` is zero.
    pub async fn create_option(
        &self,
        name: &str,
        required: bool,
        max_choices: u32,
    ) -> Result<OptionId> {
        if max_choices < 1 {
            tracing::warn!(name, "rejected option with zero max_choices");
            return Err(CafeError::invalid_argument("maxChoices must be at least 1."));
        }
        let option = MenuOption {
            id: OptionId::new(),
            name: name.to_owned(),
            required,
            max_choices,
        };
        self.store.insert_option(&option).await?;
        Ok(option.id)
    }

    /// Create a new choice under an option.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the option does not exist.
    pub async fn create_choice(&self, option: OptionId, name: &str) -> Result<ChoiceId> {
        self.store.option(option).await?;
        let choice = Choice {
            id: ChoiceId::new(),
            option,
            name: name.to_owned(),
        };
        self.store.insert_choice(&choice).await?;
        Ok(choice.id)
    }

    /// Offer an option on an item.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either id is unknown, `Conflict` if the pair
    /// is already attached.
    pub async fn attach_option(&self, item: ItemId, option: OptionId) -> Result<()> {
        self.store.item(item).await?;
        self.store.option(option).await?;
        self.store.insert_applicability(item, option).await
    }

    /// Stop offering an option on an item. Discards the pair's disallow
    /// state entirely; re-attaching starts from an empty disallow-set.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such applicability exists (which also
    /// covers an unknown item or option).
    pub async fn detach_option(&self, item: ItemId, option: OptionId) -> Result<()> {
        self.store.remove_applicability(item, option).await
    }

    /// Exclude a choice of an attached option on this item. Idempotent:
    /// disallowing twice is not an error.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the applicability does not exist,
    /// `InvalidArgument` if the choice does not belong to the given option.
    pub async fn disallow_choice(
        &self,
        item: ItemId,
        option: OptionId,
        choice: ChoiceId,
    ) -> Result<()> {
        self.store.applicability(item, option).await?;
        self.ensure_choice_ownership(option, choice).await?;
        self.store.add_disallowed(item, option, choice).await
    }

    /// Re-admit a previously disallowed choice. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the applicability does not exist,
    /// `InvalidArgument` if the choice does not belong to the given option.
    pub async fn allow_choice(
        &self,
        item: ItemId,
        option: OptionId,
        choice: ChoiceId,
    ) -> Result<()> {
        self.store.applicability(item, option).await?;
        self.ensure_choice_ownership(option, choice).await?;
        self.store.remove_disallowed(item, option, choice).await
    }

    /// The options attached to an item, in attachment order, with their
    /// required/max-choices settings.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist.
    pub async fn options_for_item(&self, item: ItemId) -> Result<Vec<MenuOption>> {
        self.store.item(item).await?;
        let pairings = self.store.applicabilities_for(item).await?;
        let mut options = Vec::with_capacity(pairings.len());
        for pairing in pairings {
            options.push(self.store.option(pairing.option).await?);
        }
        Ok(options)
    }

    /// The option's choices offered on this item: its choices minus the
    /// pair's disallow-set, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the item does not exist or the pair is not
    /// attached.
    pub async fn choices_for(&self, item: ItemId, option: OptionId) -> Result<Vec<Choice>> {
        self.store.item(item).await?;
        let pairing = self.store.applicability(item, option).await?;
        let choices = self.store.choices_of(option).await?;
        Ok(choices
            .into_iter()
            .filter(|choice| !pairing.disallowed.contains(&choice.id))
            .collect())
    }

    async fn ensure_choice_ownership(&self, option: OptionId, choice: ChoiceId) -> Result<()> {
        let record = self.store.choice(choice).await?;
        if record.option == option {
            Ok(())
        } else {
            Err(CafeError::invalid_argument(format!(
                "Choice {choice} does not belong to option {option}."
            )))
        }
    }
}
