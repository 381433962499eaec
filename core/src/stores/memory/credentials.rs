//! In-memory credential store.

use crate::error::{CafeError, Result};
use crate::providers::{Credential, CredentialStore};
use crate::state::UserId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory credential store with a username uniqueness index.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<Mutex<Collections>>,
}

#[derive(Debug, Default)]
struct Collections {
    by_user: HashMap<UserId, Credential>,
    user_by_username: HashMap<String, UserId>,
}

impl MemoryCredentialStore {
    /// Create a new, empty credential store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> Result<MutexGuard<'_, Collections>> {
        self.inner
            .lock()
            .map_err(|_| CafeError::storage("credential store lock poisoned"))
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn insert_credential(&self, credential: &Credential) -> Result<()> {
        let mut collections = self.collections()?;
        if collections
            .user_by_username
            .contains_key(&credential.username)
        {
            return Err(CafeError::conflict("Username already taken."));
        }
        collections
            .user_by_username
            .insert(credential.username.clone(), credential.user);
        collections.by_user.insert(credential.user, credential.clone());
        Ok(())
    }

    async fn credential_for(&self, user: UserId) -> Result<Credential> {
        self.collections()?
            .by_user
            .get(&user)
            .cloned()
            .ok_or_else(|| CafeError::not_found("User", user))
    }

    async fn credential_by_username(&self, username: &str) -> Result<Option<Credential>> {
        let collections = self.collections()?;
        Ok(collections
            .user_by_username
            .get(username)
            .and_then(|user| collections.by_user.get(user))
            .cloned())
    }

    async fn update_password_hash(&self, user: UserId, password_hash: &str) -> Result<()> {
        let mut collections = self.collections()?;
        let credential = collections
            .by_user
            .get_mut(&user)
            .ok_or_else(|| CafeError::not_found("User", user))?;
        credential.password_hash = password_hash.to_owned();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn credential(username: &str) -> Credential {
        Credential {
            user: UserId::new(),
            username: username.to_owned(),
            password_hash: "salt$digest".to_owned(),
        }
    }

    #[tokio::test]
    async fn username_is_unique() {
        let store = MemoryCredentialStore::new();
        store.insert_credential(&credential("mara")).await.unwrap();

        let err = store
            .insert_credential(&credential("mara"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn lookup_by_username_misses_quietly() {
        let store = MemoryCredentialStore::new();
        assert!(store
            .credential_by_username("nobody")
            .await
            .unwrap()
            .is_none());
    }
}
