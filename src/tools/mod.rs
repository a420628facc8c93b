//! Discovery tools: relevance search, compatibility search, and lookups.
//!
//! [`DiscoveryTools`] is the action-style surface an external transport
//! routes tool calls to. Lookups convert store misses into
//! [`ToolError::NotFound`]; the agent search alone swallows its errors and
//! degrades to an empty result.

mod discovery;
mod error;
mod requests;

pub use discovery::{
    DiscoveryTools, FIND_AGENTS_TOOL, FIND_SERVERS_TOOL, GET_AGENT_TOOL, GET_SERVER_TOOL,
    LIST_SERVERS_TOOL,
};
pub use error::{ToolError, ToolResult};
pub use requests::{
    DEFAULT_PAGE_SIZE, FindAgentsRequest, FindServersRequest, ListServersRequest, ServerMatch,
};

#[cfg(test)]
mod tests;
