//! Completion Gateway: the one call site in the pipeline whose failure
//! propagates. Everything downstream of it (normalization, enrichment)
//! needs the raw completion text to exist.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::config::{ScoutConfig, DEMO_KEY_SENTINEL};
use crate::core::error::ScoutError;

/// Fixed system instruction for every completion call.
pub const SYSTEM_PROMPT: &str = "You are a competitive intelligence analyst. When analyzing websites, search the web for accurate, up-to-date information. Always return valid JSON responses as requested.";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 4096;

/// Abstraction over a language-model text completion call.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Whether a real credential is configured. `false` routes every
    /// endpoint into demo mode; checked once per request, never per
    /// call site.
    fn is_live(&self) -> bool;

    /// Send one prompt and return the raw completion text.
    ///
    /// `augmented` marks prompts that benefit from retrieval-augmented
    /// generation. It currently selects the same model either way; the
    /// flag is carried (and logged) so a future model split does not
    /// change call sites.
    async fn complete(&self, prompt: &str, augmented: bool) -> Result<String, ScoutError>;
}

/// Live gateway speaking the OpenAI-compatible chat-completions wire
/// format, so local endpoints (Ollama, LM Studio) work via base URL.
pub struct OpenAiCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAiCompletionClient {
    pub fn new(http: reqwest::Client, config: &ScoutConfig) -> Self {
        Self {
            http,
            base_url: config.resolve_llm_base_url(),
            api_key: config.resolve_llm_api_key(),
            model: config.resolve_llm_model(),
        }
    }

    /// Drill the first choice's message content out of a completions
    /// response, or empty string when absent.
    pub fn content_from_response(value: &Value) -> String {
        value
            .get("choices")
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    fn is_live(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty() && k != DEMO_KEY_SENTINEL)
    }

    async fn complete(&self, prompt: &str, augmented: bool) -> Result<String, ScoutError> {
        // Same model regardless of `augmented` today.
        let model = &self.model;
        debug!(model, augmented, "dispatching completion");

        let key = self.api_key.as_deref().unwrap_or_default();
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .http
            .post(url)
            .bearer_auth(key.trim())
            .json(&body)
            .send()
            .await
            .map_err(|e| ScoutError::Gateway(format!("chat.completions request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ScoutError::Gateway(format!(
                "chat.completions returned {status}: {text}"
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ScoutError::Gateway(format!("chat.completions response unreadable: {e}")))?;

        Ok(Self::content_from_response(&value))
    }
}
