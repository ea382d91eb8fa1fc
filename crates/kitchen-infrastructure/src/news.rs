//! Food news headlines.
//!
//! Small wrapper around the NewsAPI `everything` endpoint; the home screen
//! shows the first few food-related articles of the day.

use kitchen_core::{KitchenError, Result};
use reqwest::Client;
use serde::Deserialize;

const BASE_URL: &str = "https://newsapi.org/v2/everything";
const QUERY: &str = "food";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the first `limit` food-related headlines.
    pub async fn food_headlines(&self, limit: usize) -> Result<Vec<NewsArticle>> {
        let url = format!("{}?q={}&apiKey={}", self.base_url, QUERY, self.api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| KitchenError::request(format!("news request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(KitchenError::request(format!(
                "news endpoint returned {}",
                response.status()
            )));
        }

        let body: NewsResponse = response.json().await.map_err(|err| {
            KitchenError::request(format!("failed to parse news response: {err}"))
        })?;

        Ok(body.articles.into_iter().take(limit).collect())
    }
}
