use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ConsultationService;
use crate::domain::{ConsultationTool, DomainError, ToolInvocation, ToolResult};

/// Routes a tool invocation to the matching consultation and wraps the outcome
/// in a [`ToolResult`].
///
/// Every failure, including unknown tools and missing arguments, is returned
/// as an error-flagged result so one bad call never tears down the transport.
pub struct DispatchToolUseCase {
    service: Arc<ConsultationService>,
}

impl DispatchToolUseCase {
    pub fn new(service: Arc<ConsultationService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, invocation: ToolInvocation) -> ToolResult {
        info!("Dispatching tool call: {}", invocation.name());

        match self.run(&invocation).await {
            Ok(text) => ToolResult::success(text),
            Err(e) => {
                warn!("Tool {} failed: {}", invocation.name(), e);
                ToolResult::error(&e)
            }
        }
    }

    async fn run(&self, invocation: &ToolInvocation) -> Result<String, DomainError> {
        // Validation happens before any request leaves the process.
        let tool = ConsultationTool::parse(invocation)?;

        match tool {
            ConsultationTool::ConsultArchitecture(input) => {
                self.service
                    .consult_architecture(&input.query, input.context.as_deref())
                    .await
            }
            ConsultationTool::AnalyzeCodeArchitecture(input) => {
                self.service
                    .analyze_code_architecture(&input.code, &input.language, &input.question)
                    .await
            }
            ConsultationTool::DesignSystemArchitecture(input) => {
                self.service
                    .design_system_architecture(&input.requirements)
                    .await
            }
            ConsultationTool::ReviewTechnicalDecision(input) => {
                self.service
                    .review_technical_decision(&input.decision, &input.context)
                    .await
            }
        }
    }
}
