//! Saved-recipes screen boundary.
//!
//! Wraps the session store's CRUD in the contract screens rely on: absent
//! accounts gate to sign-in, and a second save of the same recipe comes
//! back as "already saved" so the save button can disable itself
//! idempotently.

use crate::screen::ScreenGate;
use kitchen_core::{Recipe, RemoveOutcome, SaveOutcome, SessionStore, Result};
use std::sync::Arc;

/// Save result as the screen displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    AlreadySaved,
}

pub struct SavedRecipesUseCase {
    store: Arc<SessionStore>,
}

impl SavedRecipesUseCase {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// The active account's saved collection, in save order.
    ///
    /// Degraded reads render as an empty list; the screen shows "no saved
    /// recipes yet" rather than an error.
    pub async fn list(&self) -> ScreenGate<Vec<Recipe>> {
        let Some(account) = self.store.current_account() else {
            return ScreenGate::RequiresLogin;
        };
        let load = self.store.load_user_data(&account.uid).await;
        if load.is_degraded() {
            tracing::warn!(uid = %account.uid, "rendering empty saved list after degraded read");
        }
        ScreenGate::Ready(load.into_data().saved_recipes)
    }

    /// Saves a recipe for the active account.
    pub async fn save(&self, recipe: Recipe) -> Result<ScreenGate<SaveStatus>> {
        let gate = match self.store.save_recipe(recipe).await? {
            SaveOutcome::Saved => ScreenGate::Ready(SaveStatus::Saved),
            SaveOutcome::AlreadySaved => ScreenGate::Ready(SaveStatus::AlreadySaved),
            SaveOutcome::NotSignedIn => ScreenGate::RequiresLogin,
        };
        Ok(gate)
    }

    /// Removes a recipe from the active account's collection.
    pub async fn remove(&self, recipe_id: &str) -> Result<ScreenGate<()>> {
        let gate = match self.store.remove_recipe(recipe_id).await? {
            RemoveOutcome::Removed | RemoveOutcome::NotSaved => ScreenGate::Ready(()),
            RemoveOutcome::NotSignedIn => ScreenGate::RequiresLogin,
        };
        Ok(gate)
    }

    /// Whether the active account already saved the given recipe id.
    /// False when signed out.
    pub async fn is_saved(&self, recipe_id: &str) -> bool {
        match self.list().await {
            ScreenGate::Ready(recipes) => recipes.iter().any(|r| r.id == recipe_id),
            ScreenGate::RequiresLogin => false,
        }
    }
}
