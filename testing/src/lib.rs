//! # Barista Testing
//!
//! Shared fixtures for the barista workspace.
//!
//! This crate provides:
//! - A fresh, isolated in-memory environment per test
//! - The seeded espresso-bar catalog used by integration and dispatch
//!   tests (Latte/Americano with Temperature and Milk options)
//!
//! ## Example
//!
//! ```ignore
//! use barista_testing::EspressoBar;
//!
//! #[tokio::test]
//! async fn validates_a_latte() {
//!     let bar = EspressoBar::seed().await.unwrap();
//!     let verdict = bar
//!         .validator()
//!         .is_selection_set_valid(bar.latte, &[bar.select_hot()])
//!         .await
//!         .unwrap();
//!     assert!(verdict.ok);
//! }
//! ```

use barista_core::stores::memory::MemoryCatalogStore;
use barista_core::{
    Catalog, ChoiceId, ItemId, MemoryEnvironment, OptionId, Result, Selection, SelectionValidator,
};

/// The seeded espresso-bar catalog.
///
/// Two items, two options, four choices: Latte offers Temperature
/// (required, max 1) and Milk (optional, max 1); Americano offers only
/// Temperature.
#[derive(Debug, Clone)]
pub struct EspressoBar {
    /// The environment the catalog was seeded into.
    pub env: MemoryEnvironment,

    /// "Latte".
    pub latte: ItemId,

    /// "Americano".
    pub americano: ItemId,

    /// "Temperature", required, max 1.
    pub temperature: OptionId,

    /// "Milk", optional, max 1.
    pub milk: OptionId,

    /// "Hot" (Temperature).
    pub hot: ChoiceId,

    /// "Cold" (Temperature).
    pub cold: ChoiceId,

    /// "Whole Milk" (Milk).
    pub whole_milk: ChoiceId,

    /// "Oat Milk" (Milk).
    pub oat_milk: ChoiceId,
}

impl EspressoBar {
    /// Seed the espresso-bar catalog into a fresh in-memory environment.
    ///
    /// # Errors
    ///
    /// Returns error if any catalog write fails (it cannot for the memory
    /// backend, but the fixture propagates rather than unwraps).
    pub async fn seed() -> Result<Self> {
        let env = MemoryEnvironment::in_memory();
        let catalog = Catalog::new(env.catalog.clone());

        let latte = catalog
            .create_item("Latte", "Classic espresso and steamed milk")
            .await?;
        let americano = catalog
            .create_item("Americano", "Espresso with hot water")
            .await?;

        let temperature = catalog.create_option("Temperature", true, 1).await?;
        let milk = catalog.create_option("Milk", false, 1).await?;

        let hot = catalog.create_choice(temperature, "Hot").await?;
        let cold = catalog.create_choice(temperature, "Cold").await?;
        let whole_milk = catalog.create_choice(milk, "Whole Milk").await?;
        let oat_milk = catalog.create_choice(milk, "Oat Milk").await?;

        catalog.attach_option(latte, temperature).await?;
        catalog.attach_option(latte, milk).await?;
        catalog.attach_option(americano, temperature).await?;

        Ok(Self {
            env,
            latte,
            americano,
            temperature,
            milk,
            hot,
            cold,
            whole_milk,
            oat_milk,
        })
    }

    /// A catalog component over the seeded store.
    #[must_use]
    pub fn catalog(&self) -> Catalog<MemoryCatalogStore> {
        Catalog::new(self.env.catalog.clone())
    }

    /// A validator over the seeded store.
    #[must_use]
    pub fn validator(&self) -> SelectionValidator<MemoryCatalogStore> {
        SelectionValidator::new(self.env.catalog.clone())
    }

    /// The (Temperature, Hot) selection.
    #[must_use]
    pub const fn select_hot(&self) -> Selection {
        Selection {
            option: self.temperature,
            choice: self.hot,
        }
    }

    /// The (Milk, Whole Milk) selection.
    #[must_use]
    pub const fn select_whole_milk(&self) -> Selection {
        Selection {
            option: self.milk,
            choice: self.whole_milk,
        }
    }
}
