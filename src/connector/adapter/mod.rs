mod glm_client;
pub mod mcp;
mod mock_completion;

pub use glm_client::*;
pub use mcp::ArchitectureMcpServer;
pub use mock_completion::*;
