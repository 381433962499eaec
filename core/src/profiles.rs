//! Profile component.
//!
//! A free-form display-profile record with create-or-update-by-user
//! semantics. Updates are tagged per field so "not provided" and
//! "explicitly cleared" cannot be confused.

use crate::error::{CafeError, Result};
use crate::providers::{Profile, ProfileStore};
use crate::state::UserId;

/// A tagged update for one profile field.
///
/// `Unchanged` leaves the stored value alone, `Set` overwrites it, `Clear`
/// resets it: to the empty default for mandatory fields, to absent for
/// optional ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Leave the stored value untouched.
    #[default]
    Unchanged,
    /// Overwrite the stored value.
    Set(T),
    /// Reset the field.
    Clear,
}

/// Profile operations over an injected store handle.
#[derive(Debug, Clone)]
pub struct Profiles<S> {
    store: S,
}

impl<S: ProfileStore> Profiles<S> {
    /// Create a profile component over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Create or update a user's profile, applying each tagged field
    /// update explicitly. A user without a profile gets one with empty
    /// defaults first. Always succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the store fails.
    pub async fn set_profile(
        &self,
        user: UserId,
        name: FieldUpdate<String>,
        bio: FieldUpdate<String>,
        avatar: FieldUpdate<String>,
    ) -> Result<()> {
        let mut profile = self
            .store
            .profile(user)
            .await?
            .unwrap_or_else(|| Profile::empty(user));

        match name {
            FieldUpdate::Set(value) => profile.name = value,
            FieldUpdate::Clear => profile.name.clear(),
            FieldUpdate::Unchanged => {}
        }
        match bio {
            FieldUpdate::Set(value) => profile.bio = value,
            FieldUpdate::Clear => profile.bio.clear(),
            FieldUpdate::Unchanged => {}
        }
        match avatar {
            FieldUpdate::Set(value) => profile.avatar = Some(value),
            FieldUpdate::Clear => profile.avatar = None,
            FieldUpdate::Unchanged => {}
        }

        self.store.put_profile(&profile).await
    }

    /// The user's current profile.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the user has no profile.
    pub async fn profile(&self, user: UserId) -> Result<Profile> {
        self.store
            .profile(user)
            .await?
            .ok_or_else(|| CafeError::not_found("UserProfile", user))
    }
}
