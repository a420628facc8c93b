//! Unit tests for the registry store and loader.

mod store_tests;

use crate::descriptor::{
    AgentCapabilities, AgentCard, CapabilityFlag, McpServer, ServerCompatibility,
    ServerConnection,
};

fn agent_card(name: &str, version: &str) -> AgentCard {
    AgentCard::new(name, version)
        .expect("valid card")
        .with_capabilities(
            AgentCapabilities::with_flags([CapabilityFlag::Streaming]).expect("valid flags"),
        )
}

fn mcp_server(id: &str, version: &str, capabilities: &[&str]) -> McpServer {
    let connection = ServerConnection::streamable_http("https://mcp.example/api", "oauth2")
        .expect("valid connection");
    let compatibility = ServerCompatibility::new(["nlp-agent".to_owned()]).expect("valid");
    McpServer::new(
        id,
        format!("{id} server"),
        version,
        capabilities.iter().map(|name| (*name).to_owned()),
        connection,
        compatibility,
    )
    .expect("valid server")
}
