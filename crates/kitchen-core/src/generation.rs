//! Generative recipe client boundary.

use crate::error::Result;
use async_trait::async_trait;

/// A stateless request/response wrapper around a text-generation endpoint.
///
/// Implementations perform no retry, no backoff and no timeout; a slow call
/// simply resolves (or rejects) whenever the endpoint does.
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Generates recipe text for the given prompt.
    ///
    /// The returned text is raw model output. Callers must run it through
    /// [`strip_markdown_emphasis`] before display.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Removes the markdown emphasis markers generative models sprinkle over
/// recipe text (`**`, `*`, `##`, `#`). Required post-processing before any
/// generated text reaches the user.
pub fn strip_markdown_emphasis(text: &str) -> String {
    text.replace("**", "")
        .replace('*', "")
        .replace("##", "")
        .replace('#', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bold_and_headings() {
        let raw = "## Garlic Pasta\n**Ingredients:**\n* pasta\n* garlic\n# Tips";
        let clean = strip_markdown_emphasis(raw);
        assert_eq!(clean, " Garlic Pasta\nIngredients:\n pasta\n garlic\n Tips");
    }

    #[test]
    fn plain_text_is_untouched() {
        let raw = "Boil the pasta for 9 minutes.";
        assert_eq!(strip_markdown_emphasis(raw), raw);
    }
}
