//! In-memory profile store.

use crate::error::{CafeError, Result};
use crate::providers::{Profile, ProfileStore};
use crate::state::UserId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory profile store keyed by user.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    inner: Arc<Mutex<HashMap<UserId, Profile>>>,
}

impl MemoryProfileStore {
    /// Create a new, empty profile store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn profiles(&self) -> Result<MutexGuard<'_, HashMap<UserId, Profile>>> {
        self.inner
            .lock()
            .map_err(|_| CafeError::storage("profile store lock poisoned"))
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn profile(&self, user: UserId) -> Result<Option<Profile>> {
        Ok(self.profiles()?.get(&user).cloned())
    }

    async fn put_profile(&self, profile: &Profile) -> Result<()> {
        self.profiles()?.insert(profile.user, profile.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let store = MemoryProfileStore::new();
        let user = UserId::new();

        let mut profile = Profile::empty(user);
        profile.name = "Mara".to_owned();
        store.put_profile(&profile).await.unwrap();

        profile.bio = "barista".to_owned();
        store.put_profile(&profile).await.unwrap();

        let stored = store.profile(user).await.unwrap().unwrap();
        assert_eq!(stored.name, "Mara");
        assert_eq!(stored.bio, "barista");
    }
}
