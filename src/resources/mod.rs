//! Resource-style reads returning uniform envelopes.

mod envelope;
mod handlers;

pub use envelope::{ApiResponse, ErrorCode, Meta, ResponseStatus};
pub use handlers::{
    AGENT_CARD_URI_TEMPLATE, AGENT_CARDS_URI, DEFAULT_LIMIT, MAX_LIMIT, MCP_SERVER_URI_TEMPLATE,
    MCP_SERVERS_URI, RegistryResources,
};

#[cfg(test)]
mod tests;
