//! Concrete adapters for SmartKitchen's external collaborators: durable
//! key-value stores, an in-memory identity provider, the generative-text
//! client and the public recipe/news APIs.

pub mod config;
pub mod file_store;
pub mod gemini;
pub mod identity_memory;
pub mod mealdb;
pub mod memory_store;
pub mod news;
pub mod paths;

pub use crate::config::KitchenConfig;
pub use crate::file_store::FileKeyValueStore;
pub use crate::gemini::GeminiClient;
pub use crate::identity_memory::MemoryIdentityProvider;
pub use crate::mealdb::MealDbClient;
pub use crate::memory_store::MemoryKeyValueStore;
pub use crate::news::{NewsArticle, NewsClient};
pub use crate::paths::KitchenPaths;
