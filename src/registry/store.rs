//! Concurrent in-memory store for agent cards and MCP servers.

use crate::descriptor::{AgentCard, CapabilityFlag, McpServer};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

/// Thread-safe catalog of agent cards and MCP servers.
///
/// Both collections sit behind one lock, so compound operations such as the
/// identity upsert in [`RegistryStore::register_mcp_server`] are observed
/// atomically. Reads return clones; callers never alias stored descriptors.
#[derive(Debug, Default)]
pub struct RegistryStore {
    state: RwLock<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    agent_cards: BTreeMap<String, AgentCard>,
    mcp_servers: BTreeMap<String, McpServer>,
}

impl RegistryState {
    fn server_key_by_identity(&self, reference: &str) -> Option<String> {
        self.mcp_servers
            .iter()
            .find(|(_, server)| server.is_referenced_by(reference))
            .map(|(key, _)| key.clone())
    }
}

impl RegistryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves the maps half-written, so a poisoned lock still
    // guards consistent state.
    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or replaces the agent card stored under `key`.
    pub fn register_agent_card(&self, key: impl Into<String>, card: AgentCard) {
        let storage_key = key.into();
        let mut state = self.write_state();
        let replaced = state.agent_cards.insert(storage_key.clone(), card).is_some();
        info!(key = %storage_key, replaced, "registered agent card");
    }

    /// Inserts `server` under `key`, replacing any entry with the same identity.
    ///
    /// An existing entry shares the identity when its `id` equals the new
    /// server's `id` or its `id:version` equals the new `id:version`. That
    /// entry is removed wherever it is stored before the insert.
    pub fn register_mcp_server(&self, key: impl Into<String>, server: McpServer) {
        let storage_key = key.into();
        let mut state = self.write_state();

        let previous_key = state
            .mcp_servers
            .iter()
            .find(|(_, existing)| existing.shares_identity_with(&server))
            .map(|(existing_key, _)| existing_key.clone());
        if let Some(existing_key) = previous_key {
            info!(
                previous_key = %existing_key,
                id = server.id(),
                "replacing MCP server with matching identity"
            );
            state.mcp_servers.remove(&existing_key);
        }

        state.mcp_servers.insert(storage_key.clone(), server);
        info!(key = %storage_key, "registered MCP server");
    }

    /// Removes the agent card stored under `key`.
    #[must_use]
    pub fn unregister_agent_card(&self, key: &str) -> Option<AgentCard> {
        let removed = self.write_state().agent_cards.remove(key);
        if removed.is_some() {
            info!(key, "unregistered agent card");
        } else {
            warn!(key, "agent card not found for unregistration");
        }
        removed
    }

    /// Removes an MCP server by storage key, falling back to `id` or
    /// `id:version`.
    #[must_use]
    pub fn unregister_mcp_server(&self, key: &str) -> Option<McpServer> {
        let mut state = self.write_state();
        let storage_key = if state.mcp_servers.contains_key(key) {
            Some(key.to_owned())
        } else {
            state.server_key_by_identity(key)
        };
        let removed = storage_key.and_then(|found| state.mcp_servers.remove(&found));
        if removed.is_some() {
            info!(key, "unregistered MCP server");
        } else {
            warn!(key, "MCP server not found for unregistration");
        }
        removed
    }

    /// Returns the agent card stored under `key`.
    #[must_use]
    pub fn get_agent_card(&self, key: &str) -> Option<AgentCard> {
        let card = self.read_state().agent_cards.get(key).cloned();
        if card.is_none() {
            warn!(key, "agent card not found");
        }
        card
    }

    /// Alias of [`RegistryStore::get_agent_card`].
    #[must_use]
    pub fn get_agent_card_by_id(&self, id: &str) -> Option<AgentCard> {
        self.get_agent_card(id)
    }

    /// Returns the MCP server stored under `reference`, or the first whose
    /// `id` or `id:version` equals it.
    #[must_use]
    pub fn get_mcp_server_by_id(&self, reference: &str) -> Option<McpServer> {
        let state = self.read_state();
        let server = state.mcp_servers.get(reference).cloned().or_else(|| {
            state
                .mcp_servers
                .values()
                .find(|server| server.is_referenced_by(reference))
                .cloned()
        });
        if server.is_none() {
            warn!(reference, "MCP server not found");
        }
        server
    }

    /// Returns the first MCP server whose name equals `name` exactly.
    #[must_use]
    pub fn get_mcp_server_by_name(&self, name: &str) -> Option<McpServer> {
        self.read_state()
            .mcp_servers
            .values()
            .find(|server| server.name() == name)
            .cloned()
    }

    /// Returns every agent card whose name equals `name` exactly.
    #[must_use]
    pub fn find_agent_cards_by_name(&self, name: &str) -> Vec<AgentCard> {
        self.list_agent_cards_where(|card| card.name() == name)
    }

    /// Returns every agent card with `flag` enabled.
    #[must_use]
    pub fn find_agent_cards_by_capability(&self, flag: CapabilityFlag) -> Vec<AgentCard> {
        self.list_agent_cards_where(|card| card.has_capability(flag))
    }

    /// Returns every MCP server listing `capability`.
    #[must_use]
    pub fn find_mcp_servers_by_capability(&self, capability: &str) -> Vec<McpServer> {
        self.list_mcp_servers_where(|server| {
            server.capabilities().iter().any(|entry| entry == capability)
        })
    }

    /// Returns a snapshot of every agent card in key order.
    #[must_use]
    pub fn list_agent_cards(&self) -> Vec<AgentCard> {
        self.list_agent_cards_where(|_| true)
    }

    /// Returns a snapshot of the agent cards accepted by `predicate`.
    #[must_use]
    pub fn list_agent_cards_where(&self, predicate: impl Fn(&AgentCard) -> bool) -> Vec<AgentCard> {
        self.read_state()
            .agent_cards
            .values()
            .filter(|card| predicate(card))
            .cloned()
            .collect()
    }

    /// Returns a snapshot of every MCP server in key order.
    #[must_use]
    pub fn list_mcp_servers(&self) -> Vec<McpServer> {
        self.list_mcp_servers_where(|_| true)
    }

    /// Returns a snapshot of the MCP servers accepted by `predicate`.
    #[must_use]
    pub fn list_mcp_servers_where(&self, predicate: impl Fn(&McpServer) -> bool) -> Vec<McpServer> {
        self.read_state()
            .mcp_servers
            .values()
            .filter(|server| predicate(server))
            .cloned()
            .collect()
    }

    /// Returns the storage keys of all agent cards.
    #[must_use]
    pub fn agent_card_keys(&self) -> Vec<String> {
        self.read_state().agent_cards.keys().cloned().collect()
    }

    /// Returns the storage keys of all MCP servers.
    #[must_use]
    pub fn mcp_server_keys(&self) -> Vec<String> {
        self.read_state().mcp_servers.keys().cloned().collect()
    }

    /// Returns the number of stored agent cards.
    #[must_use]
    pub fn agent_card_count(&self) -> usize {
        self.read_state().agent_cards.len()
    }

    /// Returns the number of stored MCP servers.
    #[must_use]
    pub fn mcp_server_count(&self) -> usize {
        self.read_state().mcp_servers.len()
    }
}
