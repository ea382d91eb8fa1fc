//! Home screen discovery: time-of-day meal suggestions and food news.

use kitchen_core::{MealType, Recipe, Result};
use kitchen_infrastructure::{MealDbClient, NewsArticle, NewsClient};

pub struct DiscoveryUseCase {
    meals: MealDbClient,
    news: Option<NewsClient>,
}

impl DiscoveryUseCase {
    /// `news` is optional; without an API key the home screen simply shows
    /// no headlines.
    pub fn new(meals: MealDbClient, news: Option<NewsClient>) -> Self {
        Self { meals, news }
    }

    /// The meal slot to suggest for right now.
    pub fn meal_type(&self) -> MealType {
        MealType::current()
    }

    /// Fetches up to `count` random meal suggestions. Individual fetch
    /// failures are logged and skipped; the screen renders whatever came
    /// back.
    pub async fn suggestions(&self, count: usize) -> Vec<Recipe> {
        let mut recipes = Vec::with_capacity(count);
        for _ in 0..count {
            match self.meals.random().await {
                Ok(recipe) => recipes.push(recipe),
                Err(err) => {
                    tracing::warn!(error = %err, "random meal fetch failed");
                }
            }
        }
        recipes
    }

    /// The first `limit` food headlines, or none when no news client is
    /// configured.
    pub async fn headlines(&self, limit: usize) -> Result<Vec<NewsArticle>> {
        match &self.news {
            Some(client) => client.food_headlines(limit).await,
            None => Ok(Vec::new()),
        }
    }
}
