use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use archconsult::connector::api::{Container, ContainerConfig, Router};
use archconsult::{
    ArchitectureMcpServer, Commands, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser)]
#[command(name = "archconsult")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Bearer credential for the completion endpoint
    #[arg(long, global = true, env = "GLM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "GLM_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, global = true, env = "GLM_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Upper bound for a single completion request, in seconds
    #[arg(
        long,
        global = true,
        env = "GLM_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    timeout_secs: u64,

    /// Sampling temperature for the four consultation tools, within [0, 1]
    #[arg(long, global = true, env = "GLM_TEMPERATURE")]
    temperature: Option<f32>,

    /// Nucleus sampling cutoff for the four consultation tools, within [0, 1]
    #[arg(long, global = true, env = "GLM_TOP_P")]
    top_p: Option<f32>,

    /// Completion length limit for the four consultation tools
    #[arg(long, global = true, env = "GLM_MAX_TOKENS")]
    max_tokens: Option<u32>,

    /// Wrap tool output in a structured response block
    #[arg(long, global = true, env = "GLM_STRUCTURED_RESPONSES")]
    structured: bool,

    /// Answer with an offline mock instead of calling the endpoint
    #[arg(long, global = true)]
    mock_llm: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr: stdout carries the MCP stdio framing.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = ContainerConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.model,
        timeout_secs: cli.timeout_secs,
        structured_responses: cli.structured,
        mock_llm: cli.mock_llm,
        temperature: cli.temperature,
        top_p: cli.top_p,
        max_tokens: cli.max_tokens,
    };

    // Fails before any tool is registered when the credential is missing.
    let container = Container::new(config)?;

    match cli.command {
        Commands::Mcp { http, public } => {
            let server = ArchitectureMcpServer::new(Arc::new(container));
            match http {
                Some(port) => {
                    let ip = if public {
                        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
                    } else {
                        IpAddr::V4(Ipv4Addr::LOCALHOST)
                    };
                    server.serve_http(SocketAddr::new(ip, port)).await?;
                }
                None => server.serve_stdio().await?,
            }
            info!("MCP server stopped");
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_mcp_http_flags_parse() {
        let cli = Cli::try_parse_from([
            "archconsult",
            "--mock-llm",
            "mcp",
            "--http",
            "8080",
            "--public",
        ])
        .unwrap();
        assert!(cli.mock_llm);
        assert!(matches!(
            cli.command,
            Commands::Mcp {
                http: Some(8080),
                public: true
            }
        ));
    }

    #[test]
    fn test_analyze_requires_language_and_question() {
        let res = Cli::try_parse_from([
            "archconsult",
            "analyze",
            "src/main.rs",
            "--language",
            "rust",
        ]);
        assert!(res.is_err(), "--question should be required");
    }

    #[test]
    fn test_model_defaults_when_unset() {
        let cli = Cli::try_parse_from(["archconsult", "tools"]).unwrap();
        assert_eq!(cli.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!cli.base_url.is_empty());
    }

    #[test]
    fn test_sampling_flags_parse() {
        let cli = Cli::try_parse_from([
            "archconsult",
            "--temperature",
            "0.3",
            "--max-tokens",
            "2048",
            "tools",
        ])
        .unwrap();
        assert_eq!(cli.temperature, Some(0.3));
        assert_eq!(cli.top_p, None);
        assert_eq!(cli.max_tokens, Some(2048));
    }
}
