//! Parameter objects for the discovery tools.

use crate::descriptor::McpServer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default number of servers per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Parameters of an agent relevance search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindAgentsRequest {
    query: String,
    filters: BTreeMap<String, Value>,
    limit: Option<usize>,
    offset: usize,
}

impl FindAgentsRequest {
    /// Creates a request for `query` with no filters or pagination.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Adds an exact-match filter on a `__`-separated field path.
    #[must_use]
    pub fn with_filter(mut self, path: impl Into<String>, expected: Value) -> Self {
        self.filters.insert(path.into(), expected);
        self
    }

    /// Caps the number of results.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` results.
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the field filters.
    #[must_use]
    pub const fn filters(&self) -> &BTreeMap<String, Value> {
        &self.filters
    }

    /// Returns the result cap, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the number of skipped results.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Parameters of a server compatibility search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindServersRequest {
    agent_type: Option<String>,
    required_capabilities: Option<Vec<String>>,
    page: usize,
    page_size: usize,
    filters: BTreeMap<String, Value>,
}

impl Default for FindServersRequest {
    fn default() -> Self {
        Self {
            agent_type: None,
            required_capabilities: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: BTreeMap::new(),
        }
    }
}

impl FindServersRequest {
    /// Creates a request with no requirements for the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires servers to support `agent_type`.
    #[must_use]
    pub fn with_agent_type(mut self, agent_type: impl Into<String>) -> Self {
        self.agent_type = Some(agent_type.into());
        self
    }

    /// Requires servers to offer every capability in `capabilities`.
    #[must_use]
    pub fn with_required_capabilities(
        mut self,
        capabilities: impl IntoIterator<Item = String>,
    ) -> Self {
        self.required_capabilities = Some(capabilities.into_iter().collect());
        self
    }

    /// Selects a 1-based page of `page_size` results.
    #[must_use]
    pub const fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Adds an exact-match filter on a `__`-separated field path.
    #[must_use]
    pub fn with_filter(mut self, path: impl Into<String>, expected: Value) -> Self {
        self.filters.insert(path.into(), expected);
        self
    }

    /// Returns the required agent type, if any.
    #[must_use]
    pub fn agent_type(&self) -> Option<&str> {
        self.agent_type.as_deref()
    }

    /// Returns the required capabilities, if any.
    #[must_use]
    pub fn required_capabilities(&self) -> Option<&[String]> {
        self.required_capabilities.as_deref()
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the field filters.
    #[must_use]
    pub const fn filters(&self) -> &BTreeMap<String, Value> {
        &self.filters
    }
}

/// Filters for listing MCP servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListServersRequest {
    category: Option<String>,
    status: Option<String>,
    capabilities: Option<Vec<String>>,
}

impl ListServersRequest {
    /// Creates an unfiltered listing request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps servers whose name contains `category` or that list it as a
    /// capability, ignoring case.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keeps servers whose effective status equals `status`, ignoring case.
    /// A blank status filters nothing.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Keeps servers offering every listed capability, ignoring case.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: impl IntoIterator<Item = String>) -> Self {
        self.capabilities = Some(capabilities.into_iter().collect());
        self
    }

    /// Returns whether `server` passes every supplied filter.
    #[must_use]
    pub fn accepts(&self, server: &McpServer) -> bool {
        let offered: Vec<String> = server
            .capabilities()
            .iter()
            .map(|capability| capability.to_lowercase())
            .collect();

        let category_ok = non_blank(self.category.as_deref()).is_none_or(|category| {
            let wanted = category.to_lowercase();
            server.name().to_lowercase().contains(&wanted) || offered.contains(&wanted)
        });
        let status_ok = non_blank(self.status.as_deref())
            .is_none_or(|status| status.eq_ignore_ascii_case(server.status()));
        let capabilities_ok = self.capabilities.as_deref().is_none_or(|required| {
            required
                .iter()
                .all(|capability| offered.contains(&capability.to_lowercase()))
        });
        category_ok && status_ok && capabilities_ok
    }
}

/// Treats a whitespace-only filter value as not given.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

/// A server returned by a compatibility search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerMatch {
    server: McpServer,
    compatibility_score: f64,
}

impl ServerMatch {
    pub(crate) const fn new(server: McpServer, compatibility_score: f64) -> Self {
        Self {
            server,
            compatibility_score,
        }
    }

    /// Returns the matched server.
    #[must_use]
    pub const fn server(&self) -> &McpServer {
        &self.server
    }

    /// Returns the score in `[0.0, 1.0]`.
    #[must_use]
    pub const fn compatibility_score(&self) -> f64 {
        self.compatibility_score
    }
}
