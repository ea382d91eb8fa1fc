//! Gemini-backed recipe text generation.
//!
//! Thin request/response wrapper around the Generative Language
//! `generateContent` endpoint. No retry, no backoff, no timeout; the call
//! resolves whenever the endpoint does. Callers strip markdown emphasis
//! from the returned text before display
//! ([`kitchen_core::strip_markdown_emphasis`]).

use async_trait::async_trait;
use kitchen_core::{KitchenError, RecipeGenerator, Result};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new client using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name if needed.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl RecipeGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                KitchenError::generation(format!("generation request failed: {err}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response.json().await.map_err(|err| {
            KitchenError::generation(format!("failed to parse generation response: {err}"))
        })?;

        extract_generated_text(&payload)
            .ok_or_else(|| KitchenError::generation("generation returned no candidates"))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Joins the text parts of every candidate in a `generateContent` response.
fn extract_generated_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

/// Pulls the endpoint's own error message out of the response body when it
/// is JSON, falling back to the raw body.
fn map_http_error(status: StatusCode, body: String) -> KitchenError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    KitchenError::generation_with_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let payload = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Garlic Pasta\n" },
                        { "text": "Boil the pasta." }
                    ]
                }
            }]
        });
        assert_eq!(
            extract_generated_text(&payload).unwrap(),
            "Garlic Pasta\n\nBoil the pasta."
        );
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(extract_generated_text(&serde_json::json!({ "candidates": [] })).is_none());
        assert!(extract_generated_text(&serde_json::json!({})).is_none());
    }

    #[test]
    fn http_error_message_comes_from_error_body() {
        let body = r#"{"error": {"message": "API key not valid."}}"#;
        let err = map_http_error(StatusCode::BAD_REQUEST, body.to_string());
        match err {
            KitchenError::Generation {
                status_code,
                message,
            } => {
                assert_eq!(status_code, Some(400));
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_is_passed_through() {
        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());
        assert!(err.to_string().contains("boom"));
    }
}
