use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start MCP (Model Context Protocol) server for integration with AI tools
    Mcp {
        /// Run as HTTP server on specified port (e.g., --http 8080)
        #[arg(long)]
        http: Option<u16>,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Ask a general architecture question
    Consult {
        query: String,

        /// Additional context about the system, requirements, or constraints
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Analyze a source file from an architectural perspective
    Analyze {
        file: PathBuf,

        /// Programming language of the file (e.g., rust, python, go)
        #[arg(short = 'L', long)]
        language: String,

        #[arg(short, long)]
        question: String,
    },

    /// Design a system architecture from requirements
    Design { requirements: String },

    /// Review a technical decision
    Review {
        decision: String,

        #[arg(short, long)]
        context: String,
    },

    /// Run an advanced reasoning consultation (mathematical / algorithmic tasks)
    Reason {
        task: String,

        #[arg(short, long)]
        context: String,

        /// What a successful answer should contain
        #[arg(short, long)]
        expected: String,
    },

    /// Print the MCP tool catalogue as JSON
    Tools,
}
