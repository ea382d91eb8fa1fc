//! TheMealDB client.
//!
//! Source of the externally-sourced recipes: random suggestions for the
//! home screen and id lookups for detail views. Responses come back in the
//! provider's `meals` envelope; each meal object deserializes straight into
//! [`Recipe`] through its wire shape, ingredient slots included.

use kitchen_core::{KitchenError, Recipe, Result};
use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches one random meal.
    pub async fn random(&self) -> Result<Recipe> {
        let payload = self.fetch("random.php").await?;
        parse_meals(&payload)?
            .into_iter()
            .next()
            .ok_or_else(|| KitchenError::request("random meal endpoint returned no meals"))
    }

    /// Looks a meal up by its provider id.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the provider knows no meal with that id.
    pub async fn lookup(&self, id: &str) -> Result<Option<Recipe>> {
        let payload = self.fetch(&format!("lookup.php?i={}", id)).await?;
        Ok(parse_meals(&payload)?.into_iter().next())
    }

    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| KitchenError::request(format!("meal request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(KitchenError::request(format!(
                "meal endpoint returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|err| KitchenError::request(format!("failed to parse meal response: {err}")))
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the provider's `meals` envelope. A JSON `null` means no match
/// and yields an empty list.
fn parse_meals(payload: &Value) -> Result<Vec<Recipe>> {
    match payload.get("meals") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(meals) => serde_json::from_value(meals.clone()).map_err(KitchenError::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_meal_envelope() {
        let payload = serde_json::json!({
            "meals": [{
                "idMeal": "52977",
                "strMeal": "Corba",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/58oia61564916529.jpg",
                "strInstructions": "Pick through your lentils...",
                "strCategory": "Side",
                "strArea": "Turkish",
                "strIngredient1": "Lentils",
                "strIngredient2": "Onion",
                "strIngredient3": "",
                "strMeasure1": "1 cup"
            }]
        });
        let meals = parse_meals(&payload).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].id, "52977");
        assert_eq!(meals[0].title, "Corba");
        assert_eq!(meals[0].ingredients, vec!["Lentils", "Onion"]);
        assert!(!meals[0].is_custom);
    }

    #[test]
    fn null_meals_means_no_match() {
        let payload = serde_json::json!({ "meals": null });
        assert!(parse_meals(&payload).unwrap().is_empty());
    }
}
