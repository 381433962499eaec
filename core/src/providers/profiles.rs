//! Profile store trait.

use super::Profile;
use crate::error::Result;
use crate::state::UserId;

/// Persistent collection for display profiles, keyed by user.
pub trait ProfileStore: Send + Sync {
    /// Fetch a user's profile. `None` when the user has none yet; never an
    /// error for a miss.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn profile(&self, user: UserId) -> Result<Option<Profile>>;

    /// Create or replace a user's profile.
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails.
    async fn put_profile(&self, profile: &Profile) -> Result<()>;
}
