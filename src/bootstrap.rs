//! Construct-then-load lifecycle of a discovery registry.
//!
//! [`DiscoveryRegistry::bootstrap`] creates one store, loads the configured
//! descriptor directories into it, and hands the same shared store to the
//! tool and resource surfaces. Loading happens before the handle is
//! returned, so no caller observes a partially loaded registry.

use crate::config::RegistryConfig;
use crate::registry::{LoadReport, RegistryStore};
use crate::resources::RegistryResources;
use crate::search::{CompatibilityMatcher, RelevanceRanker};
use crate::tools::DiscoveryTools;
use std::sync::Arc;
use tracing::info;

/// Reports of the startup directory loads.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    agent_cards: Option<LoadReport>,
    mcp_servers: Option<LoadReport>,
}

impl BootstrapReport {
    /// Returns the agent card load report, if a directory was configured.
    #[must_use]
    pub const fn agent_cards(&self) -> Option<&LoadReport> {
        self.agent_cards.as_ref()
    }

    /// Returns the MCP server load report, if a directory was configured.
    #[must_use]
    pub const fn mcp_servers(&self) -> Option<&LoadReport> {
        self.mcp_servers.as_ref()
    }
}

/// A loaded registry with its tool and resource surfaces.
#[derive(Debug, Clone)]
pub struct DiscoveryRegistry {
    store: Arc<RegistryStore>,
    tools: DiscoveryTools,
    resources: RegistryResources,
}

impl DiscoveryRegistry {
    /// Wraps an existing store using the weights from `config`.
    #[must_use]
    pub fn with_store(store: Arc<RegistryStore>, config: &RegistryConfig) -> Self {
        let tools = DiscoveryTools::new(Arc::clone(&store))
            .with_ranker(RelevanceRanker::new(config.ranking))
            .with_matcher(CompatibilityMatcher::new(config.compatibility));
        let resources = RegistryResources::new(Arc::clone(&store));
        Self {
            store,
            tools,
            resources,
        }
    }

    /// Creates a store, loads the configured directories, and wires the
    /// surfaces to it.
    #[must_use]
    pub fn bootstrap(config: &RegistryConfig) -> (Self, BootstrapReport) {
        let store = Arc::new(RegistryStore::new());
        let report = BootstrapReport {
            agent_cards: config
                .agent_cards_dir
                .as_deref()
                .map(|directory| store.load_agent_cards_from_directory(directory)),
            mcp_servers: config
                .mcp_servers_dir
                .as_deref()
                .map(|directory| store.load_mcp_servers_from_directory(directory)),
        };
        info!(
            agent_cards = store.agent_card_count(),
            mcp_servers = store.mcp_server_count(),
            "discovery registry ready"
        );
        (Self::with_store(store, config), report)
    }

    /// Returns the shared store.
    #[must_use]
    pub const fn store(&self) -> &Arc<RegistryStore> {
        &self.store
    }

    /// Returns the discovery tools.
    #[must_use]
    pub const fn tools(&self) -> &DiscoveryTools {
        &self.tools
    }

    /// Returns the resource surface.
    #[must_use]
    pub const fn resources(&self) -> &RegistryResources {
        &self.resources
    }
}
