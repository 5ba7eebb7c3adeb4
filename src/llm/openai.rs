//! OpenAI-compatible chat-completions client.
//!
//! Works against api.openai.com or any endpoint speaking the same wire
//! format (vLLM, LiteLLM, Ollama's `/v1`). The request is deliberately
//! minimal — model, temperature, max_tokens, one user message — because
//! the exact wire schema is owned by the provider, not by this crate.

use crate::config::PolishConfig;
use crate::error::PolishError;
use crate::llm::CompletionProvider;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Default API base when `OPENAI_API_HOST` is not set.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Completion provider for OpenAI-compatible chat endpoints.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
    timeout_secs: u64,
}

impl OpenAiProvider {
    /// Create a provider from a [`PolishConfig`].
    ///
    /// A missing API key is not an error here: misconfiguration surfaces
    /// as an authentication failure at the first call, the same path a
    /// wrong key or endpoint would take.
    pub fn from_config(config: &PolishConfig) -> Result<Self, PolishError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| {
                PolishError::Internal(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout_secs: config.api_timeout_secs,
        })
    }

    fn build_headers(&self) -> Result<HeaderMap, PolishError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(ref key) = self.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", key)).map_err(|e| {
                    PolishError::ProviderNotConfigured {
                        hint: format!("API key is not a valid header value: {}", e),
                    }
                })?,
            );
        }
        Ok(headers)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, PolishError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        });

        debug!(model = %self.model, prompt_chars = prompt.len(), "Submitting completion request");

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PolishError::ApiTimeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    PolishError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PolishError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: ChatResponse = response.json().await.map_err(|e| {
            PolishError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse API response: {}", e),
            }
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(PolishError::EmptyCompletion)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Chat-completions response, reduced to the field we take.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolishConfig;

    #[test]
    fn from_config_trims_trailing_slash() {
        let config = PolishConfig::builder()
            .base_url("http://localhost:11434/v1/")
            .build()
            .unwrap();
        let provider = OpenAiProvider::from_config(&config).unwrap();
        assert_eq!(provider.base_url, "http://localhost:11434/v1");
    }

    #[test]
    fn from_config_defaults_to_openai() {
        let provider = OpenAiProvider::from_config(&PolishConfig::default()).unwrap();
        assert_eq!(provider.base_url, "https://api.openai.com/v1");
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn response_parsing_takes_first_choice() {
        let raw = r#"{"choices":[{"message":{"content":"fixed text"}},{"message":{"content":"ignored"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "fixed text");
    }
}
