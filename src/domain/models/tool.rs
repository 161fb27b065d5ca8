use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

/// Input parameters for the consult_architecture tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConsultArchitectureInput {
    /// The architectural question or problem requiring expert consultation
    pub query: String,

    /// Optional additional context about the system, requirements, or constraints
    #[serde(default)]
    pub context: Option<String>,
}

/// Input parameters for the analyze_code_architecture tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeCodeInput {
    /// The source code to analyze
    pub code: String,

    /// Programming language of the code (e.g., typescript, python, go, java)
    pub language: String,

    /// Specific architectural question about the code
    pub question: String,
}

/// Input parameters for the design_system_architecture tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DesignSystemInput {
    /// Detailed system requirements, constraints, and objectives
    pub requirements: String,
}

/// Input parameters for the review_technical_decision tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReviewDecisionInput {
    /// The technical decision to review
    pub decision: String,

    /// Context including current architecture, constraints, and objectives
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    ConsultArchitecture,
    AnalyzeCodeArchitecture,
    DesignSystemArchitecture,
    ReviewTechnicalDecision,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::ConsultArchitecture,
        ToolKind::AnalyzeCodeArchitecture,
        ToolKind::DesignSystemArchitecture,
        ToolKind::ReviewTechnicalDecision,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::ConsultArchitecture => "consult_architecture",
            ToolKind::AnalyzeCodeArchitecture => "analyze_code_architecture",
            ToolKind::DesignSystemArchitecture => "design_system_architecture",
            ToolKind::ReviewTechnicalDecision => "review_technical_decision",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::ConsultArchitecture => {
                "Consult an expert model for software architecture guidance, system design \
                 patterns, scalability strategies, and technical decision-making. Use this for \
                 high-level architectural questions requiring deep technical expertise."
            }
            ToolKind::AnalyzeCodeArchitecture => {
                "Analyze code from an architectural perspective. Evaluates design patterns, SOLID \
                 principles, scalability, security implications, and provides improvement \
                 recommendations."
            }
            ToolKind::DesignSystemArchitecture => {
                "Design a complete system architecture based on requirements. Provides component \
                 breakdown, data flow patterns, technology recommendations, and deployment \
                 strategies."
            }
            ToolKind::ReviewTechnicalDecision => {
                "Review and evaluate a technical decision. Assesses impact, trade-offs, \
                 alternatives, risks, and provides recommendations."
            }
        }
    }

    /// JSON schema of the tool's arguments, generated from its input struct.
    pub fn input_schema(&self) -> Map<String, Value> {
        let schema = match self {
            ToolKind::ConsultArchitecture => schemars::schema_for!(ConsultArchitectureInput),
            ToolKind::AnalyzeCodeArchitecture => schemars::schema_for!(AnalyzeCodeInput),
            ToolKind::DesignSystemArchitecture => schemars::schema_for!(DesignSystemInput),
            ToolKind::ReviewTechnicalDecision => schemars::schema_for!(ReviewDecisionInput),
        };
        match serde_json::to_value(schema) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated tool call: one variant per tool, each carrying its typed input.
#[derive(Debug, Clone)]
pub enum ConsultationTool {
    ConsultArchitecture(ConsultArchitectureInput),
    AnalyzeCodeArchitecture(AnalyzeCodeInput),
    DesignSystemArchitecture(DesignSystemInput),
    ReviewTechnicalDecision(ReviewDecisionInput),
}

impl ConsultationTool {
    /// Resolve the tool by name and check its required arguments. Unknown
    /// argument keys are ignored.
    pub fn parse(invocation: &ToolInvocation) -> Result<Self, DomainError> {
        let kind = ToolKind::from_name(invocation.name())
            .ok_or_else(|| DomainError::unknown_tool(invocation.name()))?;
        let args = Value::Object(invocation.arguments().clone());

        let tool = match kind {
            ToolKind::ConsultArchitecture => Self::ConsultArchitecture(decode(kind, args)?),
            ToolKind::AnalyzeCodeArchitecture => Self::AnalyzeCodeArchitecture(decode(kind, args)?),
            ToolKind::DesignSystemArchitecture => {
                Self::DesignSystemArchitecture(decode(kind, args)?)
            }
            ToolKind::ReviewTechnicalDecision => Self::ReviewTechnicalDecision(decode(kind, args)?),
        };
        Ok(tool)
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::ConsultArchitecture(_) => ToolKind::ConsultArchitecture,
            Self::AnalyzeCodeArchitecture(_) => ToolKind::AnalyzeCodeArchitecture,
            Self::DesignSystemArchitecture(_) => ToolKind::DesignSystemArchitecture,
            Self::ReviewTechnicalDecision(_) => ToolKind::ReviewTechnicalDecision,
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(kind: ToolKind, args: Value) -> Result<T, DomainError> {
    serde_json::from_value(args)
        .map_err(|e| DomainError::invalid_input(format!("invalid arguments for {kind}: {e}")))
}

/// An incoming tool call as delivered by the host protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolInvocation {
    name: String,
    #[serde(default)]
    arguments: Map<String, Value>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Map<String, Value>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), Value::String(value.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

impl ToolContent {
    pub fn text(&self) -> &str {
        match self {
            ToolContent::Text { text } => text,
        }
    }
}

/// Protocol output envelope; a failed call is still a well-formed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    content: Vec<ToolContent>,
    is_error: bool,
}

impl ToolResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(err: &DomainError) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: format!("Error: {err}"),
            }],
            is_error: true,
        }
    }

    pub fn content(&self) -> &[ToolContent] {
        &self.content
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// All text items joined with newlines.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(ToolContent::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
