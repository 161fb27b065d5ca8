use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{ConsultationController, ToolsController};

pub struct Router<'a> {
    consultation_controller: ConsultationController<'a>,
    tools_controller: ToolsController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            consultation_controller: ConsultationController::new(container),
            tools_controller: ToolsController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Consult { query, context } => {
                self.consultation_controller.consult(query, context).await
            }
            Commands::Analyze {
                file,
                language,
                question,
            } => {
                self.consultation_controller
                    .analyze(&file, language, question)
                    .await
            }
            Commands::Design { requirements } => {
                self.consultation_controller.design(requirements).await
            }
            Commands::Review { decision, context } => {
                self.consultation_controller.review(decision, context).await
            }
            Commands::Reason {
                task,
                context,
                expected,
            } => {
                self.consultation_controller
                    .reason(task, context, expected)
                    .await
            }
            Commands::Tools => self.tools_controller.list(),
            Commands::Mcp { .. } => bail!("the mcp command is served by main, not routed"),
        }
    }
}
