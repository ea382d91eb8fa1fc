//! The session and recipe store.
//!
//! Bridges identity-provider session events to application state and owns
//! CRUD over the per-account saved-recipe collection in the durable
//! key-value store. The collection is never cached across calls: every
//! mutation reads the blob fresh, updates it and writes it back whole.

use crate::account::AccountRef;
use crate::error::{KitchenError, Result};
use crate::identity::IdentityProvider;
use crate::keys;
use crate::recipe::Recipe;
use crate::session::model::{RemoveOutcome, SaveOutcome, UserData, UserDataLoad};
use crate::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, watch};

/// Session context plus per-account saved-recipe CRUD.
///
/// One instance owns the "current account" view for the process lifetime.
/// It must remain the only writer of the recipe-collection keys; the
/// no-duplicate invariant is enforced here at insertion time, not by the
/// store underneath.
///
/// Mutating operations are serialized per account through an async lock,
/// so two rapid saves cannot interleave their read-modify-write windows
/// and clobber each other.
pub struct SessionStore {
    identity: Arc<dyn IdentityProvider>,
    storage: Arc<dyn KeyValueStore>,
    /// Latest session state as published by the identity provider.
    session_rx: watch::Receiver<Option<AccountRef>>,
    /// One write lock per account id.
    write_locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SessionStore {
    pub fn new(identity: Arc<dyn IdentityProvider>, storage: Arc<dyn KeyValueStore>) -> Self {
        let session_rx = identity.subscribe();
        Self {
            identity,
            storage,
            session_rx,
            write_locks: StdMutex::new(HashMap::new()),
        }
    }

    /// The currently signed-in account, if any.
    pub fn current_account(&self) -> Option<AccountRef> {
        self.session_rx.borrow().clone()
    }

    /// Subscribes to session transitions. The receiver sees the current
    /// account immediately and one update per sign-in/sign-out.
    pub fn subscribe(&self) -> watch::Receiver<Option<AccountRef>> {
        self.identity.subscribe()
    }

    /// Creates an account and persists its display name under
    /// `user_<uid>_username`.
    ///
    /// Provider rejections (malformed email, weak password, duplicate
    /// account) surface as [`KitchenError::Auth`] with the provider's
    /// message. A failure to persist the display name also propagates; the
    /// account exists at that point but the profile write did not stick.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<AccountRef> {
        let account = self.identity.create_account(email, password).await?;
        self.storage
            .set(&keys::username_key(&account.uid), display_name)
            .await?;
        tracing::debug!(uid = %account.uid, "registered account");
        Ok(account)
    }

    /// Signs in with email/password credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<AccountRef> {
        self.identity.authenticate(email, password).await
    }

    /// Exchanges a third-party identity token for a session.
    pub async fn login_with_token(&self, token: &str) -> Result<AccountRef> {
        self.identity.authenticate_with_token(token).await
    }

    /// Ends the session. The current-account view transitions to `None`
    /// through the provider's session channel.
    pub async fn logout(&self) -> Result<()> {
        self.identity.end_session().await
    }

    /// Reads an account's display name and saved-recipe collection.
    ///
    /// Never fails: absent keys mean a fresh account, and read or parse
    /// errors degrade to empty defaults with the error reported in the
    /// [`UserDataLoad`] tag (and logged) rather than propagated.
    pub async fn load_user_data(&self, uid: &str) -> UserDataLoad {
        let display_name = match self.storage.get(&keys::username_key(uid)).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(uid, error = %err, "degraded read of display name");
                return UserDataLoad::Degraded(err);
            }
        };
        let raw_recipes = match self.storage.get(&keys::saved_recipes_key(uid)).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(uid, error = %err, "degraded read of saved recipes");
                return UserDataLoad::Degraded(err);
            }
        };

        if display_name.is_none() && raw_recipes.is_none() {
            return UserDataLoad::Missing;
        }

        let saved_recipes = match raw_recipes {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(recipes) => recipes,
                Err(err) => {
                    tracing::warn!(uid, error = %err, "saved-recipe blob failed to parse");
                    return UserDataLoad::Degraded(err.into());
                }
            },
        };

        UserDataLoad::Loaded(UserData {
            display_name: display_name.unwrap_or_default(),
            saved_recipes,
        })
    }

    /// Saves a recipe into the active account's collection.
    ///
    /// Membership is checked by recipe identifier; an already-present id
    /// returns [`SaveOutcome::AlreadySaved`] without writing. Locally
    /// authored recipes are normalized (synthetic id, placeholder
    /// thumbnail, `Custom` category/area) before the save; every saved
    /// entry gets a `savedAt` timestamp. With no active account nothing is
    /// read or written.
    ///
    /// Storage failures on this path propagate so the screen can tell the
    /// user the save did not persist.
    pub async fn save_recipe(&self, recipe: Recipe) -> Result<SaveOutcome> {
        let Some(account) = self.current_account() else {
            tracing::debug!("save attempted with no active account");
            return Ok(SaveOutcome::NotSignedIn);
        };

        let lock = self.account_lock(&account.uid);
        let _guard = lock.lock().await;

        let mut collection = self.read_collection(&account.uid).await?;
        let entry = if recipe.is_custom {
            recipe.normalized_custom().stamped()
        } else {
            recipe.stamped()
        };
        if collection.iter().any(|saved| saved.id == entry.id) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        collection.push(entry);
        self.write_collection(&account.uid, &collection).await?;
        Ok(SaveOutcome::Saved)
    }

    /// Removes the entry matching `recipe_id` from the active account's
    /// collection. The filtered collection is written back even when
    /// nothing matched, so removal is idempotent. Storage failures
    /// propagate.
    pub async fn remove_recipe(&self, recipe_id: &str) -> Result<RemoveOutcome> {
        let Some(account) = self.current_account() else {
            tracing::debug!("remove attempted with no active account");
            return Ok(RemoveOutcome::NotSignedIn);
        };

        let lock = self.account_lock(&account.uid);
        let _guard = lock.lock().await;

        let mut collection = self.read_collection(&account.uid).await?;
        let before = collection.len();
        collection.retain(|saved| saved.id != recipe_id);
        let removed = collection.len() != before;
        self.write_collection(&account.uid, &collection).await?;
        if removed {
            Ok(RemoveOutcome::Removed)
        } else {
            Ok(RemoveOutcome::NotSaved)
        }
    }

    /// Strict collection read for mutation paths. An absent blob is an
    /// empty collection; a malformed blob is an error here, unlike the
    /// lenient [`Self::load_user_data`] path.
    async fn read_collection(&self, uid: &str) -> Result<Vec<Recipe>> {
        match self.storage.get(&keys::saved_recipes_key(uid)).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(KitchenError::from),
        }
    }

    async fn write_collection(&self, uid: &str, collection: &[Recipe]) -> Result<()> {
        let blob = serde_json::to_string(collection)?;
        self.storage
            .set(&keys::saved_recipes_key(uid), &blob)
            .await?;
        tracing::debug!(uid, entries = collection.len(), "wrote saved-recipe collection");
        Ok(())
    }

    fn account_lock(&self, uid: &str) -> Arc<Mutex<()>> {
        let mut locks = self.write_locks.lock().expect("write lock map poisoned");
        locks
            .entry(uid.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
