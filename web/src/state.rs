//! Shared application state for the dispatch layer.

use barista_core::stores::memory::{
    MemoryCatalogStore, MemoryCredentialStore, MemoryOrderStore, MemoryProfileStore,
};
use barista_core::{
    Catalog, Credentials, MemoryEnvironment, OrderDesk, Profiles, SelectionValidator,
};

/// The five core components, wired to one shared environment.
///
/// The catalog and validator share a store handle so the validator always
/// judges against the same catalog the handlers mutate.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog management component.
    pub catalog: Catalog<MemoryCatalogStore>,

    /// Selection-validity engine.
    pub validator: SelectionValidator<MemoryCatalogStore>,

    /// Order lifecycle component.
    pub orders: OrderDesk<MemoryOrderStore>,

    /// Credential component.
    pub credentials: Credentials<MemoryCredentialStore>,

    /// Profile component.
    pub profiles: Profiles<MemoryProfileStore>,
}

impl AppState {
    /// Wire the components over the given environment.
    #[must_use]
    pub fn new(env: MemoryEnvironment) -> Self {
        Self {
            catalog: Catalog::new(env.catalog.clone()),
            validator: SelectionValidator::new(env.catalog),
            orders: OrderDesk::new(env.orders),
            credentials: Credentials::new(env.credentials),
            profiles: Profiles::new(env.profiles),
        }
    }

    /// Wire the components over a fresh in-memory environment.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryEnvironment::in_memory())
    }
}
