//! Loads descriptor directories and runs one discovery query.
//!
//! Usage:
//!
//! ```text
//! discovery_registry [--config <path>] [--agent-cards-dir <dir>] \
//!     [--mcp-servers-dir <dir>] <command> [args]
//! ```
//!
//! Results are written to stdout as JSON; logs go to stderr and honour
//! `RUST_LOG`.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use discovery_registry::bootstrap::DiscoveryRegistry;
use discovery_registry::config::{ConfigError, RegistryConfig};
use discovery_registry::tools::{
    FindAgentsRequest, FindServersRequest, ListServersRequest, ToolError,
};
use serde::Serialize;
use serde_json::json;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Query a discovery registry of agents and MCP servers")]
struct Cli {
    /// JSON configuration file.
    #[arg(long, env = "DISCOVERY_CONFIG")]
    config: Option<Utf8PathBuf>,
    /// Directory of agent card descriptor files.
    #[arg(long, env = "DISCOVERY_AGENT_CARDS_DIR")]
    agent_cards_dir: Option<Utf8PathBuf>,
    /// Directory of MCP server descriptor files.
    #[arg(long, env = "DISCOVERY_MCP_SERVERS_DIR")]
    mcp_servers_dir: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search agent cards by relevance.
    FindAgents {
        /// Free-text query; empty or `*` lists every card.
        #[arg(default_value = "*")]
        query: String,
        /// Maximum number of results.
        #[arg(long)]
        limit: Option<usize>,
        /// Number of results to skip.
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
    /// Search MCP servers by compatibility.
    FindServers {
        /// Agent type the server must support.
        #[arg(long)]
        agent_type: Option<String>,
        /// Capability the server must offer; repeatable.
        #[arg(long = "capability")]
        capabilities: Vec<String>,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Results per page.
        #[arg(long, default_value_t = 20)]
        page_size: usize,
    },
    /// Show one agent card by id or name.
    GetAgent {
        /// Storage key of the card.
        #[arg(long)]
        id: Option<String>,
        /// Name of the card.
        #[arg(long)]
        name: Option<String>,
    },
    /// Show one MCP server by id or name.
    GetServer {
        /// Id, `id:version`, or storage key of the server.
        #[arg(long)]
        id: Option<String>,
        /// Name of the server.
        #[arg(long)]
        name: Option<String>,
    },
    /// List MCP servers with optional filters.
    ListServers {
        /// Name fragment or capability.
        #[arg(long)]
        category: Option<String>,
        /// Status; servers without one count as `active`.
        #[arg(long)]
        status: Option<String>,
        /// Capability the server must offer; repeatable.
        #[arg(long = "capability")]
        capabilities: Vec<String>,
    },
    /// Print registry counts and load failures.
    Summary,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => RegistryConfig::from_json_file(path)?,
        None => RegistryConfig::default(),
    };
    if let Some(directory) = cli.agent_cards_dir {
        config.agent_cards_dir = Some(directory);
    }
    if let Some(directory) = cli.mcp_servers_dir {
        config.mcp_servers_dir = Some(directory);
    }

    let (registry, report) = DiscoveryRegistry::bootstrap(&config);
    let tools = registry.tools();

    match cli.command {
        Command::FindAgents {
            query,
            limit,
            offset,
        } => {
            let mut request = FindAgentsRequest::new(query).with_offset(offset);
            if let Some(cap) = limit {
                request = request.with_limit(cap);
            }
            emit(&tools.find_agents(&request))
        }
        Command::FindServers {
            agent_type,
            capabilities,
            page,
            page_size,
        } => {
            let mut request = FindServersRequest::new().with_page(page, page_size);
            if let Some(wanted) = agent_type {
                request = request.with_agent_type(wanted);
            }
            if !capabilities.is_empty() {
                request = request.with_required_capabilities(capabilities);
            }
            emit(&tools.find_servers(&request)?)
        }
        Command::GetAgent { id, name } => {
            emit(&tools.get_agent(id.as_deref(), name.as_deref())?)
        }
        Command::GetServer { id, name } => {
            emit(&tools.get_server(id.as_deref(), name.as_deref())?)
        }
        Command::ListServers {
            category,
            status,
            capabilities,
        } => {
            let mut request = ListServersRequest::new();
            if let Some(wanted) = category {
                request = request.with_category(wanted);
            }
            if let Some(wanted) = status {
                request = request.with_status(wanted);
            }
            if !capabilities.is_empty() {
                request = request.with_capabilities(capabilities);
            }
            emit(&tools.list_servers(&request))
        }
        Command::Summary => {
            let failures: Vec<_> = [report.agent_cards(), report.mcp_servers()]
                .into_iter()
                .flatten()
                .flat_map(|load| load.failures())
                .map(|failure| {
                    json!({ "file": failure.file(), "error": failure.error().to_string() })
                })
                .collect();
            emit(&json!({
                "agent_cards": registry.store().agent_card_count(),
                "mcp_servers": registry.store().mcp_server_count(),
                "load_failures": failures,
            }))
        }
    }
}

fn emit(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
