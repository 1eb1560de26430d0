//! HTTP client for the chat-completion provider.
//!
//! One blocking round trip per invocation: no retries, no streaming, no
//! caching. A missing API key is detected before any network I/O so the
//! server can answer "not configured" instead of timing out.

use std::time::Duration;

use serde::Serialize;

/// Default endpoint when `DOUBAO_API_URL` is unset.
const DEFAULT_API_URL: &str = "https://ark.cn-beijing.volces.com/api/v3/chat/completions";

/// Default model when `DOUBAO_MODEL` is unset.
const DEFAULT_MODEL: &str = "doubao-seed-1-6-flash-250828";

/// Provider calls are given a fixed 60 second budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors from the provider client.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No API key is configured; nothing was sent upstream.
    #[error("AI provider is not configured (missing API key)")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("AI provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("AI provider error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider reply carried no usable content, or a structured
    /// feature failed to parse the reply as the expected JSON.
    #[error("AI reply missing usable content: {0}")]
    MissingContent(String),
}

/// One turn of a chat conversation, provider wire format.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct ChatMessage {
    /// `system`, `user`, or `assistant`.
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling parameters for one completion call.
#[derive(Debug, Clone, Copy)]
pub struct Sampling {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
            top_p: 0.9,
        }
    }
}

/// Token budget for a reply of roughly `length` characters: twice the
/// requested length, clamped to the provider's useful range.
pub fn reply_token_budget(length: u32) -> u32 {
    length.saturating_mul(2).clamp(256, 2000)
}

/// Provider connection settings, loaded from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Bearer token; `None` means the AI surface is disabled.
    pub api_key: Option<String>,
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl ProviderConfig {
    /// Read `DOUBAO_API_KEY`, `DOUBAO_API_URL`, and `DOUBAO_MODEL`. A
    /// missing or blank key leaves the client unconfigured rather than
    /// failing startup.
    pub fn from_env() -> Self {
        let api_key = std::env::var("DOUBAO_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let api_url =
            std::env::var("DOUBAO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var("DOUBAO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            api_url,
            model,
        }
    }
}

/// Client for the provider's chat-completions endpoint.
pub struct ChatClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

impl ChatClient {
    /// Build a client from provider settings. Infallible: an unconfigured
    /// key is only surfaced when a completion is requested.
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Run one chat completion and return the raw provider JSON.
    ///
    /// Fails with [`AiError::NotConfigured`] before any network I/O when
    /// no API key is set.
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        sampling: Sampling,
    ) -> Result<serde_json::Value, AiError> {
        let api_key = self.config.api_key.as_deref().ok_or(AiError::NotConfigured)?;

        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            top_p: sampling.top_p,
        };

        tracing::debug!(
            model = %self.config.model,
            messages = messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }

    /// Run one chat completion and extract the assistant's text content.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        sampling: Sampling,
    ) -> Result<String, AiError> {
        let raw = self.chat(messages, sampling).await?;
        extract_content(&raw)
    }
}

/// Pull `choices[0].message.content` out of a raw provider reply,
/// trimmed. Blank or absent content is an error.
pub fn extract_content(raw: &serde_json::Value) -> Result<String, AiError> {
    let content = raw
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| AiError::MissingContent("reply has no choices[0].message.content".into()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(AiError::MissingContent("reply content is blank".into()));
    }
    Ok(trimmed.to_string())
}
