use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::CompletionClient;
use crate::domain::prompts::{
    advanced_reasoning_prompt, code_analysis_query, consultation_message, decision_review_query,
    system_design_query, ARCHITECT_SYSTEM_PROMPT,
};
use crate::domain::{ChatMessage, DomainError, OperationProfile, ToolKind};

const ADVANCED_REASONING_TASK: &str = "advanced_reasoning";

/// The architecture-consultation façade.
///
/// Each operation renders a fixed prompt template from its inputs and sends it
/// through the [`CompletionClient`]. Client errors are propagated unchanged.
pub struct ConsultationService {
    client: Arc<dyn CompletionClient>,
    standard: OperationProfile,
    reasoning: OperationProfile,
}

impl ConsultationService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            standard: OperationProfile::standard(),
            reasoning: OperationProfile::reasoning(),
        }
    }

    /// Profile used by the four consultation tools.
    pub fn with_standard_profile(mut self, profile: OperationProfile) -> Self {
        self.standard = profile;
        self
    }

    pub fn standard_profile(&self) -> OperationProfile {
        self.standard
    }

    pub async fn consult_architecture(
        &self,
        query: &str,
        context: Option<&str>,
    ) -> Result<String, DomainError> {
        self.consult(ToolKind::ConsultArchitecture, consultation_message(query, context))
            .await
    }

    pub async fn analyze_code_architecture(
        &self,
        code: &str,
        language: &str,
        question: &str,
    ) -> Result<String, DomainError> {
        self.consult(
            ToolKind::AnalyzeCodeArchitecture,
            code_analysis_query(code, language, question),
        )
        .await
    }

    pub async fn design_system_architecture(
        &self,
        requirements: &str,
    ) -> Result<String, DomainError> {
        self.consult(
            ToolKind::DesignSystemArchitecture,
            system_design_query(requirements),
        )
        .await
    }

    pub async fn review_technical_decision(
        &self,
        decision: &str,
        context: &str,
    ) -> Result<String, DomainError> {
        self.consult(
            ToolKind::ReviewTechnicalDecision,
            decision_review_query(decision, context),
        )
        .await
    }

    /// Single user message, no architect persona, reasoning profile.
    pub async fn advanced_reasoning(
        &self,
        task: &str,
        context: &str,
        expected_outcome: &str,
    ) -> Result<String, DomainError> {
        let messages = vec![ChatMessage::user(advanced_reasoning_prompt(
            task,
            context,
            expected_outcome,
        ))];
        self.run(ADVANCED_REASONING_TASK, messages, self.reasoning)
            .await
    }

    async fn consult(&self, kind: ToolKind, user_message: String) -> Result<String, DomainError> {
        let messages = vec![
            ChatMessage::system(ARCHITECT_SYSTEM_PROMPT),
            ChatMessage::user(user_message),
        ];
        self.run(kind.name(), messages, self.standard).await
    }

    async fn run(
        &self,
        task_type: &str,
        messages: Vec<ChatMessage>,
        profile: OperationProfile,
    ) -> Result<String, DomainError> {
        info!("Running {} consultation", task_type);
        let start_time = Instant::now();

        let content = self.client.complete(messages, profile.sampling()).await?;

        debug!(
            "{} consultation finished in {:?} ({} chars)",
            task_type,
            start_time.elapsed(),
            content.len()
        );
        Ok(profile.format().apply(content, task_type))
    }
}
