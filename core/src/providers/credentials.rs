//! Credential store trait.

use super::Credential;
use crate::error::Result;
use crate::state::UserId;

/// Persistent collection for login credentials, unique by username.
pub trait CredentialStore: Send + Sync {
    /// Persist a new credential.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::Conflict` if the username is already taken.
    async fn insert_credential(&self, credential: &Credential) -> Result<()>;

    /// Fetch the credential for a user.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the user has no credential.
    async fn credential_for(&self, user: UserId) -> Result<Credential>;

    /// Look up a credential by username. `None` when the username is
    /// unknown; never an error for a miss.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn credential_by_username(&self, username: &str) -> Result<Option<Credential>>;

    /// Replace a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `CafeError::NotFound` if the user has no credential.
    async fn update_password_hash(&self, user: UserId, password_hash: &str) -> Result<()>;
}
