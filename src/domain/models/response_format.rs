use serde::{Deserialize, Serialize};

use super::SamplingParams;

const GUIDANCE_NOTE: &str = "\
This response is structured for consumption by downstream agents:
- Tagged blocks for reliable parsing
- Clear separation of concepts
- Actionable implementation steps
- Enterprise-grade quality standards";

/// How the model's raw text is shaped before it is returned to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Return the text exactly as the model produced it.
    #[default]
    Identity,
    /// Enclose the text in a typed response block followed by a guidance note.
    StructuredWrap,
}

impl ResponseFormat {
    pub fn apply(&self, content: String, task_type: &str) -> String {
        match self {
            ResponseFormat::Identity => content,
            ResponseFormat::StructuredWrap => format!(
                "<consultation_response type=\"{task_type}\">\n\
                 <analysis>\n{content}\n</analysis>\n\n\
                 <implementation_guidance>\n{GUIDANCE_NOTE}\n</implementation_guidance>\n\
                 </consultation_response>"
            ),
        }
    }
}

/// Sampling and formatting settings bound to one consultation operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationProfile {
    sampling: SamplingParams,
    format: ResponseFormat,
}

impl OperationProfile {
    pub fn standard() -> Self {
        Self {
            sampling: SamplingParams::STANDARD,
            format: ResponseFormat::Identity,
        }
    }

    pub fn reasoning() -> Self {
        Self {
            sampling: SamplingParams::REASONING,
            format: ResponseFormat::StructuredWrap,
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn sampling(&self) -> SamplingParams {
        self.sampling
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }
}

impl Default for OperationProfile {
    fn default() -> Self {
        Self::standard()
    }
}
