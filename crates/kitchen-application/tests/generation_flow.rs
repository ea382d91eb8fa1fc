//! Generation screen contract: cleanup of generated text and saving it as
//! a locally authored recipe.

use async_trait::async_trait;
use kitchen_application::{RecipeGenerationUseCase, SaveStatus, ScreenGate};
use kitchen_core::recipe::{CUSTOM_ORIGIN, PLACEHOLDER_THUMBNAIL};
use kitchen_core::{RecipeGenerator, Result, SessionStore};
use kitchen_infrastructure::{MemoryIdentityProvider, MemoryKeyValueStore};
use std::sync::Arc;

/// Generator double returning a fixed markdown-formatted recipe.
struct CannedGenerator;

#[async_trait]
impl RecipeGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok("## Garlic Pasta\nA quick dish.\n**Ingredients:**\n* pasta\n* garlic".to_string())
    }
}

fn wire_up() -> (RecipeGenerationUseCase, Arc<SessionStore>) {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let storage = Arc::new(MemoryKeyValueStore::new());
    let store = Arc::new(SessionStore::new(identity, storage));
    (
        RecipeGenerationUseCase::new(Arc::new(CannedGenerator), store.clone()),
        store,
    )
}

#[tokio::test]
async fn generated_text_is_stripped_of_markdown() {
    let (screen, _) = wire_up();
    let text = screen.generate("pasta for 2").await.unwrap();
    assert!(!text.contains('*'));
    assert!(!text.contains('#'));
    assert!(text.contains("Garlic Pasta"));
}

#[tokio::test]
async fn saving_generated_text_builds_a_custom_recipe() {
    let (screen, store) = wire_up();
    store
        .register("ada@example.com", "password1", "Ada")
        .await
        .unwrap();

    let text = screen.generate("pasta for 2").await.unwrap();
    let ingredients = vec!["pasta".to_string(), "garlic".to_string()];
    let saved = screen
        .save_generated(&text, &ingredients, "Smart Generated")
        .await
        .unwrap();
    assert_eq!(saved.ready(), Some(SaveStatus::Saved));

    let account = store.current_account().unwrap();
    let data = store.load_user_data(&account.uid).await.into_data();
    let recipe = &data.saved_recipes[0];
    assert_eq!(recipe.title, "Garlic Pasta");
    assert!(recipe.id.starts_with("custom_"));
    assert_eq!(recipe.thumbnail, PLACEHOLDER_THUMBNAIL);
    assert_eq!(recipe.category, "Smart Generated");
    assert_eq!(recipe.area, CUSTOM_ORIGIN);
    assert_eq!(recipe.ingredients, ingredients);
    assert!(recipe.is_custom);
    assert!(recipe.saved_at.is_some());
}

#[tokio::test]
async fn saving_while_signed_out_requires_login() {
    let (screen, _) = wire_up();
    let text = screen.generate("pasta").await.unwrap();
    let gate = screen.save_generated(&text, &[], "Smart Generated").await.unwrap();
    assert_eq!(gate, ScreenGate::RequiresLogin);
}
