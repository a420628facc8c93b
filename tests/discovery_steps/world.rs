//! Shared world state for discovery registry BDD scenarios.

use camino::Utf8PathBuf;
use discovery_registry::descriptor::{AgentCard, McpServer};
use discovery_registry::registry::{LoadReport, RegistryStore};
use discovery_registry::tools::{DiscoveryTools, ServerMatch, ToolResult};
use rstest::fixture;
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

/// Scenario world for discovery behaviour tests.
pub struct DiscoveryWorld {
    /// The store under test.
    pub store: Arc<RegistryStore>,
    /// Temporary directory kept alive for loader scenarios.
    pub temp_dir: Option<TempDir>,
    /// Directory handed to the loader.
    pub descriptor_dir: Option<Utf8PathBuf>,
    /// Result of the last agent search.
    pub agent_results: Vec<AgentCard>,
    /// Result of the last server search.
    pub server_results: Option<ToolResult<Vec<ServerMatch>>>,
    /// Report of the last directory load.
    pub load_report: Option<LoadReport>,
}

impl DiscoveryWorld {
    /// Creates a world around an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(RegistryStore::new()),
            temp_dir: None,
            descriptor_dir: None,
            agent_results: Vec::new(),
            server_results: None,
            load_report: None,
        }
    }

    /// Returns tools over the world's store.
    #[must_use]
    pub fn tools(&self) -> DiscoveryTools {
        DiscoveryTools::new(Arc::clone(&self.store))
    }
}

impl Default for DiscoveryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}

/// Builds an agent card with a single skill.
pub fn agent_card(name: &str, skill: &str) -> Result<AgentCard, eyre::Report> {
    let card = serde_json::from_value(agent_card_json(name, "1", skill))?;
    Ok(card)
}

/// JSON form of an agent card with a single skill.
pub fn agent_card_json(name: &str, version: &str, skill: &str) -> serde_json::Value {
    json!({
        "name": name,
        "version": version,
        "description": format!("The {name}"),
        "capabilities": { "streaming": true },
        "skills": [{
            "id": skill,
            "name": skill,
            "description": format!("Can {skill}")
        }]
    })
}

/// Builds a streamable HTTP server offering `capabilities` to one agent type.
pub fn mcp_server(
    id: &str,
    version: &str,
    capabilities: &[&str],
    agent_type: &str,
) -> Result<McpServer, eyre::Report> {
    let server = serde_json::from_value(json!({
        "id": id,
        "name": format!("{id} server"),
        "version": version,
        "capabilities": capabilities,
        "connection": {
            "transport": "streamable_http",
            "endpoint": "https://mcp.example/api",
            "auth_method": "none"
        },
        "compatibility": { "agent_types": [agent_type] }
    }))?;
    Ok(server)
}

/// Splits a comma-separated step argument.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}
