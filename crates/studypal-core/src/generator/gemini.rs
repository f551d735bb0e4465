//! Gemini `generateContent` client.

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::PlanGenerator;
use crate::error::{Result, StudyError};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "STUDYPAL_GEMINI_MODEL";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "STUDYPAL_GEMINI_BASE_URL";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini API endpoint root
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const NULL_RESPONSE: &str = "Failed to generate revision plan: API returned null response";

/// Connection settings for [`GeminiGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Reads the configuration from `GEMINI_API_KEY`,
    /// `STUDYPAL_GEMINI_MODEL` and `STUDYPAL_GEMINI_BASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: get(API_KEY_ENV),
            model: get(MODEL_ENV).unwrap_or(defaults.model),
            base_url: get(BASE_URL_ENV).unwrap_or(defaults.base_url),
        }
    }

    /// Replaces the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

impl GeminiResponse {
    /// Text of the first candidate, or `None` if it carries no text.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Gemini-backed plan generator.
pub struct GeminiGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a generator configured from the environment.
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    /// The active configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl PlanGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| StudyError::generation(format!("{API_KEY_ENV} not set")))?;

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        info!("Requesting revision plan from {}", self.config.model);
        debug!("Prompt: {prompt}");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {e}");
                StudyError::generation(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("API returned status {status}"));
            error!("Gemini returned {status}: {message}");
            return Err(StudyError::generation(message));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| StudyError::generation(e.to_string()))?;

        let text = body.into_text().ok_or_else(|| {
            error!("Gemini returned no text");
            StudyError::generation(NULL_RESPONSE)
        })?;
        debug!("Gemini response: {text}");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::from_lookup(|_| None);
        assert_eq!(config, GeminiConfig::default());
        assert_eq!(config.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_config_from_lookup() {
        let config = GeminiConfig::from_lookup(|key| match key {
            API_KEY_ENV => Some("secret".to_string()),
            MODEL_ENV => Some("gemini-pro".to_string()),
            BASE_URL_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let generator = GeminiGenerator::new(GeminiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..GeminiConfig::default()
        });
        assert_eq!(
            generator.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Day 1"},{"text":" more"}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("Day 1 more"));
    }

    #[test]
    fn test_response_without_text() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(response.into_text().is_none());

        let response: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(response.into_text().is_none());
    }

    #[tokio::test]
    async fn test_missing_key_is_generation_error() {
        let generator = GeminiGenerator::new(GeminiConfig::default());
        assert!(!generator.is_configured());
        let err = generator.generate("prompt").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error generating revision plan: GEMINI_API_KEY not set"
        );
    }
}
