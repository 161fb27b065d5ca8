use anyhow::Result;
use serde_json::{json, Value};

use crate::domain::ToolKind;

pub struct ToolsController;

impl ToolsController {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> Result<String> {
        let tools: Vec<Value> = ToolKind::ALL
            .into_iter()
            .map(|kind| {
                json!({
                    "name": kind.name(),
                    "description": kind.description(),
                    "inputSchema": kind.input_schema(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&tools)?)
    }
}

impl Default for ToolsController {
    fn default() -> Self {
        Self::new()
    }
}
