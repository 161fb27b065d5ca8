use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::{
    ChatMessage, CompletionRequest, CompletionResponse, DomainError, SamplingParams,
};

/// Public GLM endpoint (OpenAI-compatible chat completions).
pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
pub const DEFAULT_MODEL: &str = "glm-4-6";
/// Long enough for the largest reasoning responses.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
const COMPLETIONS_PATH: &str = "/chat/completions";

/// Transport settings for [`GlmClient`], built once at startup.
#[derive(Debug, Clone)]
pub struct GlmClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl GlmClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error body returned by the endpoint on non-success statuses.
#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// HTTP client for a GLM (or any OpenAI-compatible) chat-completions endpoint.
///
/// Implements [`CompletionClient`] so the consultation façade stays decoupled
/// from transport and serialization details. One POST per call, no retries;
/// the configured timeout bounds the whole request.
pub struct GlmClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    timeout: Duration,
}

impl GlmClient {
    pub fn new(config: &GlmClientConfig) -> Result<Self, DomainError> {
        if config.api_key.trim().is_empty() {
            return Err(DomainError::configuration("API key must not be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            url: format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            timeout: config.timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Timeouts are named as such; other failures carry their full source chain,
    /// since reqwest's own Display stops at the outermost layer.
    fn transport_error(&self, stage: &str, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            return DomainError::transport(format!(
                "GlmClient: {stage}: request timed out after {}s",
                self.timeout.as_secs_f64()
            ));
        }

        let mut message = format!("GlmClient: {stage}: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        DomainError::transport(message)
    }

    /// Prefer the endpoint's own `error.message`; otherwise describe the status
    /// the way the transport would.
    fn error_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status code {}", status.as_u16()))
    }
}

#[async_trait]
impl CompletionClient for GlmClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        sampling: SamplingParams,
    ) -> Result<String, DomainError> {
        let request = CompletionRequest::new(&self.model, messages, sampling);

        debug!(
            "GlmClient: sending {} messages to {} (model={}, max_tokens={})",
            request.messages().len(),
            self.url,
            request.model(),
            request.max_tokens()
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error("request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GlmClient: API returned {status}: {body}");
            return Err(DomainError::remote_api(
                status.as_u16(),
                Self::error_message(status, &body),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error("failed to read response", e))?;
        let api_response: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            DomainError::transport(format!("GlmClient: failed to parse response: {e}"))
        })?;

        debug!(
            "GlmClient: completion {} used {} prompt + {} completion tokens",
            api_response.id,
            api_response.usage.prompt_tokens,
            api_response.usage.completion_tokens
        );

        api_response.into_first_content()
    }
}
