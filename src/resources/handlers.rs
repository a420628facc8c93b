//! Resource reads over a shared registry store.

use super::{ApiResponse, ErrorCode, Meta};
use crate::descriptor::{AgentCard, McpServer};
use crate::registry::RegistryStore;
use crate::search::OffsetWindow;
use std::sync::Arc;
use tracing::{error, info};

/// URI of the agent card listing.
pub const AGENT_CARDS_URI: &str = "resource://agent_cards";
/// URI template of a single agent card.
pub const AGENT_CARD_URI_TEMPLATE: &str = "resource://agent_cards/{agent_id}";
/// URI of the MCP server listing.
pub const MCP_SERVERS_URI: &str = "resource://mcp_servers";
/// URI template of a single MCP server.
pub const MCP_SERVER_URI_TEMPLATE: &str = "resource://mcp_servers/{server_id}";

/// Default page size of the listing resources.
pub const DEFAULT_LIMIT: i64 = 20;
/// Largest accepted page size.
pub const MAX_LIMIT: i64 = 100;

/// Read-only resource surface returning [`ApiResponse`] envelopes.
///
/// Every read produces an envelope; failures are reported in it rather
/// than returned as errors.
#[derive(Debug, Clone)]
pub struct RegistryResources {
    store: Arc<RegistryStore>,
}

impl RegistryResources {
    /// Creates resources over `store`.
    #[must_use]
    pub const fn new(store: Arc<RegistryStore>) -> Self {
        Self { store }
    }

    /// Reads one agent card by storage key.
    #[must_use]
    pub fn get_agent_card(&self, agent_id: &str) -> ApiResponse<AgentCard> {
        info!(agent_id, "retrieving agent card");
        if !is_valid_identifier(agent_id) {
            error!(agent_id, "invalid agent_id format");
            return ApiResponse::error(
                ErrorCode::ValidationError,
                format!("Invalid agent_id format: {agent_id}"),
            );
        }
        match self.store.get_agent_card_by_id(agent_id) {
            Some(card) => ApiResponse::success(
                card,
                format!("Agent card '{agent_id}' retrieved successfully"),
            ),
            None => ApiResponse::error(
                ErrorCode::NotFound,
                format!("Agent card {agent_id} not found"),
            ),
        }
    }

    /// Reads one page of agent cards.
    #[must_use]
    pub fn list_agent_cards(&self, limit: i64, offset: i64) -> ApiResponse<Vec<AgentCard>> {
        info!(limit, offset, "retrieving agent cards");
        list_page(
            self.store.list_agent_cards(),
            limit,
            offset,
            "A list of all agent cards available to the model.",
        )
    }

    /// Reads one MCP server by storage key, `id`, or `id:version`.
    #[must_use]
    pub fn get_mcp_server(&self, server_id: &str) -> ApiResponse<McpServer> {
        info!(server_id, "retrieving MCP server");
        if !is_valid_identifier(server_id) {
            error!(server_id, "invalid server_id format");
            return ApiResponse::error(
                ErrorCode::ValidationError,
                format!("Invalid server_id format: {server_id}"),
            );
        }
        match self.store.get_mcp_server_by_id(server_id) {
            Some(server) => ApiResponse::success(
                server,
                format!("MCP server '{server_id}' retrieved successfully"),
            ),
            None => ApiResponse::error(
                ErrorCode::NotFound,
                format!("MCP server {server_id} not found"),
            ),
        }
    }

    /// Reads one page of MCP servers.
    #[must_use]
    pub fn list_mcp_servers(&self, limit: i64, offset: i64) -> ApiResponse<Vec<McpServer>> {
        info!(limit, offset, "retrieving MCP servers");
        list_page(
            self.store.list_mcp_servers(),
            limit,
            offset,
            "A list of all MCP servers available to the model.",
        )
    }
}

/// Accepts non-empty identifiers of ASCII alphanumerics and `_ - . :`.
fn is_valid_identifier(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|character| character.is_ascii_alphanumeric() || "_-.:".contains(character))
}

fn list_page<T>(items: Vec<T>, limit: i64, offset: i64, message: &str) -> ApiResponse<Vec<T>> {
    let window = match validate_window(limit, offset) {
        Ok(window) => window,
        Err(reason) => {
            error!(limit, offset, reason, "invalid pagination parameters");
            return ApiResponse::error(ErrorCode::ValidationError, reason)
                .with_meta(Meta::paged(1, limit, 0));
        }
    };

    let total = i64::try_from(items.len()).unwrap_or(i64::MAX);
    let page = offset
        .checked_div(limit)
        .map_or(1, |full_pages| full_pages.saturating_add(1));
    let data = window.apply(items);
    ApiResponse::success(data, message).with_meta(Meta::paged(page, limit, total))
}

fn validate_window(limit: i64, offset: i64) -> Result<OffsetWindow, &'static str> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err("limit must be between 1 and 100");
    }
    let skip = usize::try_from(offset).map_err(|_| "offset must be >= 0")?;
    let take = usize::try_from(limit).map_err(|_| "limit must be between 1 and 100")?;
    Ok(OffsetWindow::new(skip, Some(take)))
}
