//! Screen-boundary use cases for SmartKitchen.
//!
//! Each use case consumes the session store and one of the external
//! clients and exposes exactly the contract the screens rely on: the
//! requires-login gate, idempotent "already saved" handling and
//! display-ready generated text.

pub mod discovery;
pub mod generation;
pub mod saved_recipes;
pub mod screen;

pub use discovery::DiscoveryUseCase;
pub use generation::RecipeGenerationUseCase;
pub use saved_recipes::{SaveStatus, SavedRecipesUseCase};
pub use screen::ScreenGate;
