use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::DomainError;

use super::super::Container;

pub struct ConsultationController<'a> {
    container: &'a Container,
}

impl<'a> ConsultationController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn consult(&self, query: String, context: Option<String>) -> Result<String> {
        let answer = self
            .container
            .consultation_service()
            .consult_architecture(&query, context.as_deref())
            .await?;
        Ok(answer)
    }

    pub async fn analyze(&self, file: &Path, language: String, question: String) -> Result<String> {
        let code = tokio::fs::read_to_string(file)
            .await
            .map_err(DomainError::from)
            .with_context(|| format!("failed to read {}", file.display()))?;

        let answer = self
            .container
            .consultation_service()
            .analyze_code_architecture(&code, &language, &question)
            .await?;
        Ok(answer)
    }

    pub async fn design(&self, requirements: String) -> Result<String> {
        let answer = self
            .container
            .consultation_service()
            .design_system_architecture(&requirements)
            .await?;
        Ok(answer)
    }

    pub async fn review(&self, decision: String, context: String) -> Result<String> {
        let answer = self
            .container
            .consultation_service()
            .review_technical_decision(&decision, &context)
            .await?;
        Ok(answer)
    }

    pub async fn reason(&self, task: String, context: String, expected: String) -> Result<String> {
        let answer = self
            .container
            .consultation_service()
            .advanced_reasoning(&task, &context, &expected)
            .await?;
        Ok(answer)
    }
}
