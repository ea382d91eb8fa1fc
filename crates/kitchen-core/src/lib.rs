//! Domain layer for SmartKitchen.
//!
//! Holds the models, the boundary traits for the external collaborators
//! (identity provider, durable key-value store, generative client) and the
//! session/recipe store that ties them together. Concrete adapters live in
//! `kitchen-infrastructure`; screen-boundary use cases in
//! `kitchen-application`.

pub mod account;
pub mod error;
pub mod generation;
pub mod identity;
pub mod keys;
pub mod recipe;
pub mod session;
pub mod storage;
pub mod suggestion;

pub use account::AccountRef;
pub use error::{KitchenError, Result};
pub use generation::{RecipeGenerator, strip_markdown_emphasis};
pub use identity::IdentityProvider;
pub use recipe::Recipe;
pub use session::{RemoveOutcome, SaveOutcome, SessionStore, UserData, UserDataLoad};
pub use storage::KeyValueStore;
pub use suggestion::MealType;
