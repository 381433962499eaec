//! Selection-validity engine.
//!
//! Judges a whole candidate selection set against an item's catalog rules
//! and produces a single [`Verdict`]. Checks run from "is this selection
//! even well-formed" to "is the aggregate legal", and the first failing
//! check wins, so a rejection is always attributed to the most fundamental
//! violated rule:
//!
//! 1. every selected option is attached to the item
//! 2. every selected choice belongs to its stated option
//! 3. every required attached option appears at least once
//! 4. no option is selected more often than its `max_choices`
//! 5. no selected choice sits in the pairing's disallow-set
//!
//! The validator only reads the catalog; it never mutates anything, so the
//! verdict is a pure function of current catalog state and its inputs.

use crate::error::{CafeError, Result};
use crate::providers::{Applicability, CatalogStore};
use crate::state::{ItemId, OptionId, Selection, Verdict};

/// Selection-set validation over an injected catalog store handle.
#[derive(Debug, Clone)]
pub struct SelectionValidator<S> {
    store: S,
}

impl<S: CatalogStore> SelectionValidator<S> {
    /// Create a validator over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Decide whether `selections` is a legal configuration of `item`.
    ///
    /// The whole set is judged as one configuration; the result is a
    /// single verdict, not one per selection.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` only when `item` itself does not exist. Every
    /// other problem is reported inside the verdict, not as an error.
    pub async fn is_selection_set_valid(
        &self,
        item: ItemId,
        selections: &[Selection],
    ) -> Result<Verdict> {
        self.store.item(item).await?;
        let attached = self.store.applicabilities_for(item).await?;

        // 1. Attachment: each selected option must be offered on the item.
        for selection in selections {
            if !is_attached(&attached, selection.option) {
                return Ok(Verdict::reject(format!(
                    "Option {} is not attached to item {item}.",
                    selection.option
                )));
            }
        }

        // 2. Ownership: each choice must belong to its stated option.
        for selection in selections {
            match self.store.choice(selection.choice).await {
                Ok(choice) if choice.option == selection.option => {}
                Ok(_) | Err(CafeError::NotFound(_)) => {
                    return Ok(Verdict::reject(format!(
                        "Choice {} does not belong to option {}.",
                        selection.choice, selection.option
                    )));
                }
                Err(other) => return Err(other),
            }
        }

        // 3. Required coverage, in attachment order.
        for pairing in &attached {
            let option = self.store.option(pairing.option).await?;
            if option.required && !selections.iter().any(|s| s.option == pairing.option) {
                return Ok(Verdict::reject(format!(
                    "Required option {} is missing for item {item}.",
                    pairing.option
                )));
            }
        }

        // 4. Cardinality per distinct selected option.
        let mut counted: Vec<OptionId> = Vec::new();
        for selection in selections {
            if counted.contains(&selection.option) {
                continue;
            }
            counted.push(selection.option);
            let count = selections
                .iter()
                .filter(|s| s.option == selection.option)
                .count();
            let option = self.store.option(selection.option).await?;
            if count > option.max_choices as usize {
                return Ok(Verdict::reject(format!(
                    "Option {} exceeds its maximum allowed choices ({}).",
                    selection.option, option.max_choices
                )));
            }
        }

        // 5. Per-item exclusions.
        for selection in selections {
            let disallowed = attached
                .iter()
                .find(|pairing| pairing.option == selection.option)
                .is_some_and(|pairing| pairing.disallowed.contains(&selection.choice));
            if disallowed {
                return Ok(Verdict::reject(format!(
                    "Choice {} is disallowed for option {} on item {item}.",
                    selection.choice, selection.option
                )));
            }
        }

        Ok(Verdict::pass())
    }
}

fn is_attached(attached: &[Applicability], option: OptionId) -> bool {
    attached.iter().any(|pairing| pairing.option == option)
}
