//! Configuration for a polish run.
//!
//! Everything a request needs is held in one [`PolishConfig`], constructed
//! once at process start and passed by reference into each request. There is
//! no ambient global client: the web server keeps a config in its shared
//! state, the CLI builds one from flags, and tests inject a stub provider
//! through [`PolishConfig::provider`].

use crate::error::PolishError;
use crate::llm::CompletionProvider;
use crate::pipeline::ingest::DocumentLoader;
use std::fmt;
use std::sync::Arc;

/// Environment variable naming the model identifier.
pub const ENV_MODEL: &str = "OPENAI_MODEL";
/// Environment variable holding the API credential.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the API base endpoint URL.
pub const ENV_API_HOST: &str = "OPENAI_API_HOST";

/// Configuration for grammar correction and style rewriting.
///
/// Built via [`PolishConfig::builder()`], [`PolishConfig::from_env()`] or
/// [`PolishConfig::default()`].
///
/// # Example
/// ```rust
/// use docpolish::PolishConfig;
///
/// let config = PolishConfig::builder()
///     .model("gpt-4o-mini")
///     .api_timeout_secs(90)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct PolishConfig {
    /// Completion model identifier. Default: "gpt-4o-mini".
    pub model: String,

    /// API credential. If None, the provider fails at the first call —
    /// there is deliberately no pre-flight check, matching the behaviour
    /// of a misconfigured endpoint or model.
    pub api_key: Option<String>,

    /// API base endpoint URL. If None, the OpenAI default is used.
    /// Any OpenAI-compatible endpoint (vLLM, LiteLLM, Ollama) works here.
    pub base_url: Option<String>,

    /// Sampling temperature. Default: 0.0.
    ///
    /// Zero keeps both calls deterministic for identical input, as far as
    /// the hosted model allows. Determinism is not guaranteed across
    /// provider versions.
    pub temperature: f32,

    /// Maximum tokens the model may generate per call. Default: 4096.
    pub max_tokens: usize,

    /// Per-completion-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Pre-constructed completion provider. Takes precedence over the
    /// model/key/endpoint fields. Used by tests to stub the remote call
    /// and by callers that need custom middleware.
    pub provider: Option<Arc<dyn CompletionProvider>>,

    /// Pre-constructed document loader. If None, the PDF extractor is
    /// used. The second stub seam, for tests that drive the PDF branch
    /// without a file on disk.
    pub loader: Option<Arc<dyn DocumentLoader>>,
}

impl Default for PolishConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.0,
            max_tokens: 4096,
            api_timeout_secs: 60,
            provider: None,
            loader: None,
        }
    }
}

impl fmt::Debug for PolishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolishConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("provider", &self.provider.as_ref().map(|_| "<dyn CompletionProvider>"))
            .field("loader", &self.loader.as_ref().map(|_| "<dyn DocumentLoader>"))
            .finish()
    }
}

impl PolishConfig {
    /// Create a new builder for `PolishConfig`.
    pub fn builder() -> PolishConfigBuilder {
        PolishConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a config from the process environment.
    ///
    /// Reads `OPENAI_MODEL`, `OPENAI_API_KEY` and `OPENAI_API_HOST`. None of
    /// them is required here; a missing credential surfaces as an API error
    /// at the first remote call.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(model) = std::env::var(ENV_MODEL) {
            if !model.is_empty() {
                config.model = model;
            }
        }
        config.api_key = std::env::var(ENV_API_KEY).ok().filter(|k| !k.is_empty());
        config.base_url = std::env::var(ENV_API_HOST).ok().filter(|u| !u.is_empty());
        config
    }
}

/// Builder for [`PolishConfig`].
#[derive(Debug)]
pub struct PolishConfigBuilder {
    config: PolishConfig,
}

impl PolishConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    pub fn loader(mut self, loader: Arc<dyn DocumentLoader>) -> Self {
        self.config.loader = Some(loader);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PolishConfig, PolishError> {
        let c = &self.config;
        if c.model.is_empty() {
            return Err(PolishError::InvalidConfig("Model must not be empty".into()));
        }
        if !(0.0..=2.0).contains(&c.temperature) {
            return Err(PolishError::InvalidConfig(format!(
                "Temperature must be 0.0–2.0, got {}",
                c.temperature
            )));
        }
        if c.api_timeout_secs == 0 {
            return Err(PolishError::InvalidConfig(
                "API timeout must be ≥ 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_deterministic_sampling() {
        let config = PolishConfig::default();
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn builder_clamps_temperature() {
        let config = PolishConfig::builder().temperature(5.0).build().unwrap();
        assert_eq!(config.temperature, 2.0);
    }

    #[test]
    fn builder_rejects_empty_model() {
        let err = PolishConfig::builder().model("").build().unwrap_err();
        assert!(err.to_string().contains("Model"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = PolishConfig::builder().api_key("sk-secret").build().unwrap();
        let dbg = format!("{:?}", config);
        assert!(!dbg.contains("sk-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
