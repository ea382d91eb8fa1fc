//! Session state and the per-account saved-recipe store.

pub mod model;
pub mod store;

pub use model::{RemoveOutcome, SaveOutcome, UserData, UserDataLoad};
pub use store::SessionStore;
