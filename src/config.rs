//! Configuration for the joke endpoint

use std::env;

/// Default chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Environment variable holding the bearer credential
pub const DEFAULT_API_KEY_VAR: &str = "PUBLIC_OPENAI_API_KEY";
/// Prompt sent with every request
pub const DEFAULT_PROMPT: &str =
    "Tell me a short, harsh, but funny joke. Keep it under 30 words. No explanations.";

/// Overrides read by [`JokeConfig::from_env`]
pub const ENDPOINT_OVERRIDE_VAR: &str = "JOKE_API_URL";
pub const MODEL_OVERRIDE_VAR: &str = "JOKE_MODEL";

/// Credential baked in at build time, used when the runtime variable is absent
const BUILD_TIME_API_KEY: Option<&str> = option_env!("PUBLIC_OPENAI_API_KEY");

/// Configuration for the joke fetcher
#[derive(Clone, Debug, PartialEq)]
pub struct JokeConfig {
    /// Chat-completion URL
    pub endpoint: String,

    /// Model identifier sent in the request body
    pub model: String,

    /// The single user-role message
    pub prompt: String,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Environment variable the credential is read from at call time
    pub api_key_var: String,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            max_tokens: 60,
            temperature: 0.9,
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
        }
    }
}

impl JokeConfig {
    /// Defaults plus any endpoint/model overrides found in the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = non_empty_var(ENDPOINT_OVERRIDE_VAR) {
            config.endpoint = endpoint;
        }
        if let Some(model) = non_empty_var(MODEL_OVERRIDE_VAR) {
            config.model = model;
        }
        config
    }

    /// Set the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Read the credential from a different environment variable
    pub fn with_api_key_var(mut self, var: impl Into<String>) -> Self {
        self.api_key_var = var.into();
        self
    }

    /// Resolve the credential. Empty values count as missing.
    ///
    /// Only the default variable falls back to the build-time value.
    pub fn api_key(&self) -> Option<String> {
        non_empty_var(&self.api_key_var).or_else(|| {
            if self.api_key_var == DEFAULT_API_KEY_VAR {
                BUILD_TIME_API_KEY
                    .filter(|k| !k.trim().is_empty())
                    .map(str::to_string)
            } else {
                None
            }
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("Endpoint URL is required".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("Model identifier is required".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be within 0.0..=2.0, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be positive".to_string());
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
