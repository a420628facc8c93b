//! Discovery tool operations over a shared registry store.

use super::{
    FindAgentsRequest, FindServersRequest, ListServersRequest, ServerMatch, ToolError, ToolResult,
};
use crate::descriptor::{AgentCard, McpServer};
use crate::registry::RegistryStore;
use crate::search::{
    CompatibilityMatcher, CompatibilityQuery, FieldFilters, OffsetWindow, RelevanceRanker,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Name under which the agent search is exposed.
pub const FIND_AGENTS_TOOL: &str = "find_a2a_agents";
/// Name under which the server compatibility search is exposed.
pub const FIND_SERVERS_TOOL: &str = "find_mcp_servers";
/// Name under which the agent lookup is exposed.
pub const GET_AGENT_TOOL: &str = "get_agent_details";
/// Name under which the server lookup is exposed.
pub const GET_SERVER_TOOL: &str = "get_mcp_server_details";
/// Name under which the server listing is exposed.
pub const LIST_SERVERS_TOOL: &str = "list_mcp_servers";

const AGENT_KIND: &str = "agent";
const SERVER_KIND: &str = "MCP server";

/// Query and lookup operations backed by a [`RegistryStore`].
#[derive(Debug, Clone)]
pub struct DiscoveryTools {
    store: Arc<RegistryStore>,
    ranker: RelevanceRanker,
    matcher: CompatibilityMatcher,
}

impl DiscoveryTools {
    /// Creates tools with default ranking and compatibility weights.
    #[must_use]
    pub fn new(store: Arc<RegistryStore>) -> Self {
        Self {
            store,
            ranker: RelevanceRanker::default(),
            matcher: CompatibilityMatcher::default(),
        }
    }

    /// Replaces the relevance ranker.
    #[must_use]
    pub const fn with_ranker(mut self, ranker: RelevanceRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Replaces the compatibility matcher.
    #[must_use]
    pub const fn with_matcher(mut self, matcher: CompatibilityMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &Arc<RegistryStore> {
        &self.store
    }

    /// Searches agent cards by relevance to a free-text query.
    ///
    /// Never fails: malformed filters yield an empty list.
    #[must_use]
    pub fn find_agents(&self, request: &FindAgentsRequest) -> Vec<AgentCard> {
        self.find_agents_where(request, |_| true)
    }

    /// Like [`DiscoveryTools::find_agents`], also applying `predicate`
    /// before ranking.
    #[must_use]
    pub fn find_agents_where(
        &self,
        request: &FindAgentsRequest,
        predicate: impl Fn(&AgentCard) -> bool,
    ) -> Vec<AgentCard> {
        info!(
            query = request.query(),
            filters = request.filters().len(),
            limit = ?request.limit(),
            offset = request.offset(),
            "executing agent search"
        );
        match self.try_find_agents(request, predicate) {
            Ok(cards) => {
                info!(results = cards.len(), "agent search finished");
                cards
            }
            Err(err) => {
                error!(error = %err, "agent search failed");
                Vec::new()
            }
        }
    }

    fn try_find_agents(
        &self,
        request: &FindAgentsRequest,
        predicate: impl Fn(&AgentCard) -> bool,
    ) -> ToolResult<Vec<AgentCard>> {
        let filters = FieldFilters::parse(request.filters())?;
        let candidates = filters.retain(self.store.list_agent_cards_where(predicate))?;
        let window = OffsetWindow::new(request.offset(), request.limit());
        Ok(self.ranker.search(request.query(), candidates, window))
    }

    /// Finds MCP servers compatible with an agent, best first.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidInput`] for a zero page or page size or a
    /// malformed filter path, and [`ToolError::NoServersRegistered`] when the
    /// registry holds no servers at all. No compatible server is an empty
    /// list, not an error.
    pub fn find_servers(&self, request: &FindServersRequest) -> ToolResult<Vec<ServerMatch>> {
        info!(
            agent_type = ?request.agent_type(),
            required_capabilities = ?request.required_capabilities(),
            page = request.page(),
            page_size = request.page_size(),
            "executing server search"
        );
        if request.page_size() == 0 {
            return Err(ToolError::invalid_input("page_size must be at least 1"));
        }
        let window = OffsetWindow::for_page(request.page(), request.page_size())
            .ok_or_else(|| ToolError::invalid_input("page must be at least 1"))?;
        let filters = FieldFilters::parse(request.filters())
            .map_err(|err| ToolError::invalid_input(err.to_string()))?;

        let servers = self.store.list_mcp_servers();
        if servers.is_empty() {
            warn!("no MCP servers found in registry");
            return Err(ToolError::NoServersRegistered);
        }

        let mut query = CompatibilityQuery::new();
        if let Some(agent_type) = request.agent_type() {
            query = query.with_agent_type(agent_type);
        }
        if let Some(required) = request.required_capabilities() {
            query = query.with_required_capabilities(required.iter().cloned());
        }

        let candidates = filters.retain(servers)?;
        let ranked = self.matcher.rank(&query, candidates);
        let compatible = ranked.len();
        let page: Vec<ServerMatch> = window
            .apply(ranked)
            .into_iter()
            .map(|(server, score)| ServerMatch::new(server, score))
            .collect();
        info!(compatible, returned = page.len(), "server search finished");
        Ok(page)
    }

    /// Looks up an agent card by id, then by name.
    ///
    /// Several cards sharing the name resolve to the first.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidInput`] when neither identifier is given
    /// and [`ToolError::NotFound`] when neither resolves.
    pub fn get_agent(&self, id: Option<&str>, name: Option<&str>) -> ToolResult<AgentCard> {
        let (lookup_id, lookup_name) = identifiers(id, name)?;

        if let Some(agent_id) = lookup_id {
            info!(agent_id, "looking up agent by id");
            if let Some(card) = self.store.get_agent_card_by_id(agent_id) {
                return Ok(card);
            }
            warn!(agent_id, "no agent found with id");
        }

        let Some(agent_name) = lookup_name else {
            return Err(ToolError::not_found(AGENT_KIND, lookup_id.unwrap_or_default()));
        };
        info!(agent_name, "looking up agent by name");
        let matches = self.store.find_agent_cards_by_name(agent_name);
        if matches.len() > 1 {
            warn!(
                agent_name,
                count = matches.len(),
                "multiple agents share the name, using the first"
            );
        }
        matches
            .into_iter()
            .next()
            .ok_or_else(|| ToolError::not_found(AGENT_KIND, agent_name))
    }

    /// Looks up an MCP server by id (or `id:version`), then by name.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidInput`] when neither identifier is given
    /// and [`ToolError::NotFound`] when neither resolves.
    pub fn get_server(&self, id: Option<&str>, name: Option<&str>) -> ToolResult<McpServer> {
        let (lookup_id, lookup_name) = identifiers(id, name)?;

        if let Some(server_id) = lookup_id {
            info!(server_id, "looking up MCP server by id");
            if let Some(server) = self.store.get_mcp_server_by_id(server_id) {
                return Ok(server);
            }
        }

        let Some(server_name) = lookup_name else {
            return Err(ToolError::not_found(SERVER_KIND, lookup_id.unwrap_or_default()));
        };
        info!(server_name, "looking up MCP server by name");
        self.store
            .get_mcp_server_by_name(server_name)
            .ok_or_else(|| ToolError::not_found(SERVER_KIND, server_name))
    }

    /// Lists MCP servers passing the request's filters.
    #[must_use]
    pub fn list_servers(&self, request: &ListServersRequest) -> Vec<McpServer> {
        let servers = self
            .store
            .list_mcp_servers_where(|server| request.accepts(server));
        info!(count = servers.len(), "listed MCP servers");
        servers
    }
}

/// Drops blank identifiers and requires at least one to remain.
fn identifiers<'a>(
    id: Option<&'a str>,
    name: Option<&'a str>,
) -> ToolResult<(Option<&'a str>, Option<&'a str>)> {
    let present = |value: Option<&'a str>| value.filter(|text| !text.trim().is_empty());
    match (present(id), present(name)) {
        (None, None) => Err(ToolError::invalid_input(
            "either an id or a name must be provided",
        )),
        pair => Ok(pair),
    }
}
