//! In-memory catalog store.

use crate::error::{CafeError, Result};
use crate::providers::{Applicability, CatalogStore, Choice, Item, MenuOption};
use crate::state::{ChoiceId, ItemId, OptionId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory catalog store.
///
/// Applicability pairings are kept per item in attachment order; choice
/// ids are kept per option in creation order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    inner: Arc<Mutex<Collections>>,
}

#[derive(Debug, Default)]
struct Collections {
    items: HashMap<ItemId, Item>,
    options: HashMap<OptionId, MenuOption>,
    choices: HashMap<ChoiceId, Choice>,
    choice_order: HashMap<OptionId, Vec<ChoiceId>>,
    applicabilities: HashMap<ItemId, Vec<Applicability>>,
}

impl MemoryCatalogStore {
    /// Create a new, empty catalog store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> Result<MutexGuard<'_, Collections>> {
        self.inner
            .lock()
            .map_err(|_| CafeError::storage("catalog store lock poisoned"))
    }
}

impl CatalogStore for MemoryCatalogStore {
    async fn insert_item(&self, item: &Item) -> Result<()> {
        let mut collections = self.collections()?;
        collections.items.insert(item.id, item.clone());
        Ok(())
    }

    async fn item(&self, id: ItemId) -> Result<Item> {
        self.collections()?
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| CafeError::not_found("Item", id))
    }

    async fn set_item_active(&self, id: ItemId, is_active: bool) -> Result<()> {
        let mut collections = self.collections()?;
        let item = collections
            .items
            .get_mut(&id)
            .ok_or_else(|| CafeError::not_found("Item", id))?;
        item.is_active = is_active;
        Ok(())
    }

    async fn insert_option(&self, option: &MenuOption) -> Result<()> {
        let mut collections = self.collections()?;
        collections.options.insert(option.id, option.clone());
        Ok(())
    }

    async fn option(&self, id: OptionId) -> Result<MenuOption> {
        self.collections()?
            .options
            .get(&id)
            .cloned()
            .ok_or_else(|| CafeError::not_found("Option", id))
    }

    async fn insert_choice(&self, choice: &Choice) -> Result<()> {
        let mut collections = self.collections()?;
        collections.choices.insert(choice.id, choice.clone());
        collections
            .choice_order
            .entry(choice.option)
            .or_default()
            .push(choice.id);
        Ok(())
    }

    async fn choice(&self, id: ChoiceId) -> Result<Choice> {
        self.collections()?
            .choices
            .get(&id)
            .cloned()
            .ok_or_else(|| CafeError::not_found("Choice", id))
    }

    async fn choices_of(&self, option: OptionId) -> Result<Vec<Choice>> {
        let collections = self.collections()?;
        let ids = collections.choice_order.get(&option);
        Ok(ids
            .into_iter()
            .flatten()
            .filter_map(|id| collections.choices.get(id).cloned())
            .collect())
    }

    async fn insert_applicability(&self, item: ItemId, option: OptionId) -> Result<()> {
        let mut collections = self.collections()?;
        let pairings = collections.applicabilities.entry(item).or_default();
        if pairings.iter().any(|a| a.option == option) {
            return Err(CafeError::conflict(format!(
                "Option {option} is already attached to item {item}."
            )));
        }
        pairings.push(Applicability::new(item, option));
        Ok(())
    }

    async fn remove_applicability(&self, item: ItemId, option: OptionId) -> Result<()> {
        let mut collections = self.collections()?;
        let pairings = collections.applicabilities.entry(item).or_default();
        let before = pairings.len();
        pairings.retain(|a| a.option != option);
        if pairings.len() == before {
            return Err(not_attached(item, option));
        }
        Ok(())
    }

    async fn applicability(&self, item: ItemId, option: OptionId) -> Result<Applicability> {
        self.collections()?
            .applicabilities
            .get(&item)
            .and_then(|pairings| pairings.iter().find(|a| a.option == option))
            .cloned()
            .ok_or_else(|| not_attached(item, option))
    }

    async fn applicabilities_for(&self, item: ItemId) -> Result<Vec<Applicability>> {
        Ok(self
            .collections()?
            .applicabilities
            .get(&item)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_disallowed(
        &self,
        item: ItemId,
        option: OptionId,
        choice: ChoiceId,
    ) -> Result<()> {
        let mut collections = self.collections()?;
        let pairing = collections
            .applicabilities
            .get_mut(&item)
            .and_then(|pairings| pairings.iter_mut().find(|a| a.option == option))
            .ok_or_else(|| not_attached(item, option))?;
        pairing.disallowed.insert(choice);
        Ok(())
    }

    async fn remove_disallowed(
        &self,
        item: ItemId,
        option: OptionId,
        choice: ChoiceId,
    ) -> Result<()> {
        let mut collections = self.collections()?;
        let pairing = collections
            .applicabilities
            .get_mut(&item)
            .and_then(|pairings| pairings.iter_mut().find(|a| a.option == option))
            .ok_or_else(|| not_attached(item, option))?;
        pairing.disallowed.remove(&choice);
        Ok(())
    }
}

fn not_attached(item: ItemId, option: OptionId) -> CafeError {
    CafeError::NotFound(format!("Option {option} is not attached to item {item}."))
}
