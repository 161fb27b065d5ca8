use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{CompletionClient, ConsultationService, DispatchToolUseCase};
use crate::connector::{
    GlmClient, GlmClientConfig, MockCompletion, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::domain::{DomainError, OperationProfile, ResponseFormat, SamplingParams};

/// Process-wide settings, collected once at startup and never re-read.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Bearer credential for the completion endpoint. Required unless
    /// `mock_llm` is set.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Wrap the four standard tools' output in the structured response block.
    pub structured_responses: bool,
    /// Answer from [`MockCompletion`] instead of calling the network.
    pub mock_llm: bool,
    /// Overrides for the four standard tools' sampling. Unset values keep
    /// [`SamplingParams::STANDARD`].
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            structured_responses: false,
            mock_llm: false,
            temperature: None,
            top_p: None,
            max_tokens: None,
        }
    }
}

impl ContainerConfig {
    /// Profile for the four standard tools, with any sampling overrides applied.
    pub fn standard_profile(&self) -> Result<OperationProfile, DomainError> {
        let format = if self.structured_responses {
            ResponseFormat::StructuredWrap
        } else {
            ResponseFormat::Identity
        };
        let profile = OperationProfile::standard().with_format(format);

        if self.temperature.is_none() && self.top_p.is_none() && self.max_tokens.is_none() {
            return Ok(profile);
        }

        let base = SamplingParams::STANDARD;
        let sampling = SamplingParams::new(
            self.temperature.unwrap_or(base.temperature()),
            self.top_p.unwrap_or(base.top_p()),
            self.max_tokens.unwrap_or(base.max_tokens()),
        )?;
        debug!("Standard sampling overridden: {:?}", sampling);
        Ok(profile.with_sampling(sampling))
    }
}

pub struct Container {
    consultation_service: Arc<ConsultationService>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client: Arc<dyn CompletionClient> = if config.mock_llm {
            debug!("Using mock completion client");
            Arc::new(MockCompletion::new())
        } else {
            let api_key = config
                .api_key
                .as_deref()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| {
                    DomainError::configuration(
                        "GLM_API_KEY environment variable (or --api-key) is required",
                    )
                })?;

            let client_config = GlmClientConfig::new(api_key)
                .with_base_url(&config.base_url)
                .with_model(&config.model)
                .with_timeout(Duration::from_secs(config.timeout_secs));
            let client = GlmClient::new(&client_config)?;
            debug!(
                "Using GLM completion client at {} (model {})",
                client.url(),
                client.model()
            );
            Arc::new(client)
        };

        Self::with_client(client, &config)
    }

    /// Build around an already constructed client (used by tests and embedders).
    pub fn with_client(
        client: Arc<dyn CompletionClient>,
        config: &ContainerConfig,
    ) -> Result<Self> {
        let consultation_service = Arc::new(
            ConsultationService::new(client)
                .with_standard_profile(config.standard_profile()?),
        );

        Ok(Self {
            consultation_service,
        })
    }

    pub fn consultation_service(&self) -> Arc<ConsultationService> {
        self.consultation_service.clone()
    }

    pub fn dispatch_use_case(&self) -> DispatchToolUseCase {
        DispatchToolUseCase::new(self.consultation_service.clone())
    }
}
