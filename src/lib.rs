pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{CompletionClient, ConsultationService, DispatchToolUseCase};

pub use cli::Commands;

pub use connector::{
    ArchitectureMcpServer, GlmClient, GlmClientConfig, MockCompletion, DEFAULT_BASE_URL,
    DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};

pub use domain::{
    ChatMessage, CompletionRequest, CompletionResponse, ConsultationTool, DomainError,
    OperationProfile, ResponseFormat, Role, SamplingParams, ToolContent, ToolInvocation, ToolKind,
    ToolResult,
};
