//! AI recipe generation screen boundary.
//!
//! Runs a caller-built prompt through the generative client, applies the
//! required markdown cleanup, and can save the result as a locally
//! authored recipe the way the generation screens do: title taken from the
//! first line of the text, the ingredient list the user assembled, and a
//! synthetic identifier from the save path.

use crate::saved_recipes::SaveStatus;
use crate::screen::ScreenGate;
use kitchen_core::{
    Recipe, RecipeGenerator, Result, SaveOutcome, SessionStore, strip_markdown_emphasis,
};
use std::sync::Arc;

/// Title used when the generated text yields none.
const FALLBACK_TITLE: &str = "Generated Recipe";

pub struct RecipeGenerationUseCase {
    generator: Arc<dyn RecipeGenerator>,
    store: Arc<SessionStore>,
}

impl RecipeGenerationUseCase {
    pub fn new(generator: Arc<dyn RecipeGenerator>, store: Arc<SessionStore>) -> Self {
        Self { generator, store }
    }

    /// Generates recipe text and strips markdown emphasis markers from it.
    /// The returned text is display-ready.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let raw = self.generator.generate(prompt).await?;
        Ok(strip_markdown_emphasis(&raw))
    }

    /// Saves previously generated text as a custom recipe for the active
    /// account.
    ///
    /// `category` is screen-specific ("Smart Generated", or the dish the
    /// user asked for); the store fills in the remaining custom defaults.
    pub async fn save_generated(
        &self,
        text: &str,
        ingredients: &[String],
        category: &str,
    ) -> Result<ScreenGate<SaveStatus>> {
        let mut recipe = Recipe::custom(derive_recipe_title(text));
        recipe.instructions = text.to_string();
        recipe.ingredients = ingredients.to_vec();
        recipe.category = category.to_string();

        let gate = match self.store.save_recipe(recipe).await? {
            SaveOutcome::Saved => ScreenGate::Ready(SaveStatus::Saved),
            SaveOutcome::AlreadySaved => ScreenGate::Ready(SaveStatus::AlreadySaved),
            SaveOutcome::NotSignedIn => ScreenGate::RequiresLogin,
        };
        Ok(gate)
    }
}

/// Recipe name from generated text: the first non-empty line, minus any
/// leading heading markers.
fn derive_recipe_title(text: &str) -> String {
    text.lines()
        .map(|line| line.trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .map(|line| line.to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_first_non_empty_line() {
        let text = "\n## Garlic Pasta\nA quick weeknight dish.";
        assert_eq!(derive_recipe_title(text), "Garlic Pasta");
    }

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(derive_recipe_title(""), FALLBACK_TITLE);
        assert_eq!(derive_recipe_title("  \n##  \n"), FALLBACK_TITLE);
    }
}
