use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("remote model returned empty response")]
    EmptyCompletion,

    #[error("remote API error ({status}): {message}")]
    RemoteApi { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn remote_api(status: u16, msg: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            message: msg.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Fatal errors stop the process; everything else is reported per call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_remote_api(&self) -> bool {
        matches!(self, Self::RemoteApi { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
