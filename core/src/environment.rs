//! Dependency-injection bundle for the core components.
//!
//! Every operation takes an explicit store handle rather than a
//! process-wide singleton; this bundle groups the four handles so a
//! dispatcher (or a test) can wire a complete environment in one place.

use crate::providers::{CatalogStore, CredentialStore, OrderStore, ProfileStore};
use crate::stores::memory::{
    MemoryCatalogStore, MemoryCredentialStore, MemoryOrderStore, MemoryProfileStore,
};

/// The four store handles the core components run against.
#[derive(Debug, Clone)]
pub struct CafeEnvironment<C, O, U, P>
where
    C: CatalogStore + Clone,
    O: OrderStore + Clone,
    U: CredentialStore + Clone,
    P: ProfileStore + Clone,
{
    /// Catalog store handle.
    pub catalog: C,

    /// Order store handle.
    pub orders: O,

    /// Credential store handle.
    pub credentials: U,

    /// Profile store handle.
    pub profiles: P,
}

impl<C, O, U, P> CafeEnvironment<C, O, U, P>
where
    C: CatalogStore + Clone,
    O: OrderStore + Clone,
    U: CredentialStore + Clone,
    P: ProfileStore + Clone,
{
    /// Bundle the given store handles.
    pub const fn new(catalog: C, orders: O, credentials: U, profiles: P) -> Self {
        Self {
            catalog,
            orders,
            credentials,
            profiles,
        }
    }
}

/// A fully in-memory environment.
pub type MemoryEnvironment =
    CafeEnvironment<MemoryCatalogStore, MemoryOrderStore, MemoryCredentialStore, MemoryProfileStore>;

impl MemoryEnvironment {
    /// A fresh, isolated in-memory environment.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            MemoryCatalogStore::new(),
            MemoryOrderStore::new(),
            MemoryCredentialStore::new(),
            MemoryProfileStore::new(),
        )
    }
}
