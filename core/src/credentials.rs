//! Credential component.
//!
//! A hashed-credential store: registration, login and password changes.
//! Passwords are stored as `{salt}${digest}` (both base64, SHA-256 over
//! salt‖password) and compared in constant time. Login reports the same
//! vague error for an unknown username and a wrong password.

use crate::error::{CafeError, Result};
use crate::providers::{Credential, CredentialStore};
use crate::state::UserId;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};

const LOGIN_REJECTED: &str = "Invalid username or password.";

/// Credential operations over an injected store handle.
#[derive(Debug, Clone)]
pub struct Credentials<S> {
    store: S,
}

impl<S: CredentialStore> Credentials<S> {
    /// Create a credential component over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new user under a unique username.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the username is already taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserId> {
        let credential = Credential {
            user: UserId::new(),
            username: username.to_owned(),
            password_hash: hash_password(password),
        };
        self.store.insert_credential(&credential).await?;
        tracing::debug!(user = %credential.user, "user registered");
        Ok(credential.user)
    }

    /// Authenticate a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` with an intentionally vague message on an
    /// unknown username or a wrong password.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserId> {
        let Some(credential) = self.store.credential_by_username(username).await? else {
            return Err(CafeError::invalid_argument(LOGIN_REJECTED));
        };
        if !verify_password(password, &credential.password_hash) {
            tracing::warn!(username, "failed login attempt");
            return Err(CafeError::invalid_argument(LOGIN_REJECTED));
        }
        Ok(credential.user)
    }

    /// Replace a user's password after verifying the old one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user has no credential, `InvalidArgument`
    /// if the old password does not match.
    pub async fn change_password(
        &self,
        user: UserId,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let credential = self.store.credential_for(user).await?;
        if !verify_password(old_password, &credential.password_hash) {
            return Err(CafeError::invalid_argument("Incorrect old password."));
        }
        self.store
            .update_password_hash(user, &hash_password(new_password))
            .await
    }

    /// Look up a user by username. `None` on a miss, never an error.
    ///
    /// # Errors
    ///
    /// Returns error if the store fails.
    pub async fn user_by_username(&self, username: &str) -> Result<Option<UserId>> {
        Ok(self
            .store
            .credential_by_username(username)
            .await?
            .map(|credential| credential.user))
    }
}

fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    let digest = salted_digest(&salt, password);
    format!("{}${}", BASE64.encode(salt), BASE64.encode(digest))
}

fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (BASE64.decode(salt), BASE64.decode(digest)) else {
        return false;
    };
    constant_time_eq(&salted_digest(&salt, password), &expected)
}

fn salted_digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::stores::memory::MemoryCredentialStore;

    fn credentials() -> Credentials<MemoryCredentialStore> {
        Credentials::new(MemoryCredentialStore::new())
    }

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = hash_password("espresso");
        let second = hash_password("espresso");
        assert_ne!(first, second);
        assert!(verify_password("espresso", &first));
        assert!(verify_password("espresso", &second));
        assert!(!verify_password("ristretto", &first));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify_password("espresso", "not-a-hash"));
        assert!(!verify_password("espresso", "!!$!!"));
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let credentials = credentials();
        let user = credentials.register("mara", "espresso").await.unwrap();
        assert_eq!(credentials.login("mara", "espresso").await.unwrap(), user);
        assert_eq!(
            credentials.user_by_username("mara").await.unwrap(),
            Some(user)
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let credentials = credentials();
        credentials.register("mara", "espresso").await.unwrap();
        let err = credentials.register("mara", "other").await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let credentials = credentials();
        credentials.register("mara", "espresso").await.unwrap();

        let unknown_user = credentials.login("nobody", "espresso").await.unwrap_err();
        let wrong_password = credentials.login("mara", "ristretto").await.unwrap_err();
        assert_eq!(unknown_user, wrong_password);
    }

    #[tokio::test]
    async fn change_password_requires_the_old_one() {
        let credentials = credentials();
        let user = credentials.register("mara", "espresso").await.unwrap();

        let err = credentials
            .change_password(user, "wrong", "flat-white")
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());

        credentials
            .change_password(user, "espresso", "flat-white")
            .await
            .unwrap();
        assert!(credentials.login("mara", "espresso").await.is_err());
        assert_eq!(
            credentials.login("mara", "flat-white").await.unwrap(),
            user
        );
    }

    #[tokio::test]
    async fn change_password_for_unknown_user_is_not_found() {
        let credentials = credentials();
        let err = credentials
            .change_password(UserId::new(), "old", "new")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
