//! Descriptor model for agent cards and MCP servers.
//!
//! Descriptors are the records held by the registry. Each has a wire form
//! (`*Document`) that parses any structurally well-typed JSON, and a
//! validated form built through `TryFrom` that enforces the invariants:
//!
//! - required strings are non-blank and required lists are non-empty
//! - an agent card's capabilities object enables at least one flag
//! - a server connection uses exactly the fields of its transport
//!
//! Validated descriptors deserialize through their document type, so parsing
//! JSON straight into [`AgentCard`] or [`McpServer`] validates as well.

mod agent_card;
mod authentication;
mod capabilities;
mod connection;
mod error;
mod fields;
mod mcp_server;
mod skill;

pub use agent_card::{AgentCard, AgentCardDocument};
pub use authentication::Authentication;
pub use capabilities::{AgentCapabilities, CapabilitiesDocument, CapabilityFlag};
pub use connection::{
    ConnectionDocument, ServerConnection, StdioConnection, StreamableHttpConnection, TransportKind,
};
pub use error::{DescriptorError, ParseCapabilityFlagError};
pub use fields::composite_key;
pub use mcp_server::{
    CompatibilityDocument, DEFAULT_SERVER_STATUS, McpServer, McpServerDocument,
    ServerCompatibility,
};
pub use skill::{Skill, SkillDocument};

#[cfg(test)]
mod tests;
