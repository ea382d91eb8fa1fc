//! Result types exposed by the session store to the screen layer.

use crate::error::KitchenError;
use crate::recipe::Recipe;

/// Per-account data read back from the durable store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserData {
    /// Display name captured at registration; empty when never stored.
    pub display_name: String,
    /// The account's saved-recipe collection, in save order.
    pub saved_recipes: Vec<Recipe>,
}

/// Tagged outcome of a user-data read.
///
/// Reads never fail hard; a storage glitch must not crash a screen. The tag
/// lets callers tell "no data yet" apart from "failed to read", instead of
/// collapsing both to an empty profile.
#[derive(Debug)]
pub enum UserDataLoad {
    /// Data was read back from storage.
    Loaded(UserData),
    /// Nothing stored for this account yet.
    Missing,
    /// The read or the parse failed; callers render empty defaults.
    Degraded(KitchenError),
}

impl UserDataLoad {
    /// The data to render, empty defaults for `Missing` and `Degraded`.
    pub fn into_data(self) -> UserData {
        match self {
            Self::Loaded(data) => data,
            Self::Missing | Self::Degraded(_) => UserData::default(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

/// Outcome of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The recipe was appended to the collection.
    Saved,
    /// A recipe with the same identifier is already in the collection;
    /// nothing was written. Screens treat this as "already saved" and
    /// disable further save attempts.
    AlreadySaved,
    /// No account is active; nothing was written. Screens redirect to
    /// sign-in before retrying.
    NotSignedIn,
}

/// Outcome of a remove attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The recipe was removed from the collection.
    Removed,
    /// No entry matched the identifier; the collection was rewritten
    /// unchanged (removal is idempotent).
    NotSaved,
    /// No account is active; nothing was written.
    NotSignedIn,
}
