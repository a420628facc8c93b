//! Unit tests for search components.

mod ranker_tests;

use crate::descriptor::{AgentCard, McpServer};
use serde_json::json;

fn card_with_skill(name: &str, skill_name: &str, skill_description: &str) -> AgentCard {
    serde_json::from_value(json!({
        "name": name,
        "version": "1",
        "capabilities": { "streaming": true },
        "skills": [{
            "id": format!("{skill_name}-id"),
            "name": skill_name,
            "description": skill_description,
            "tags": ["demo"]
        }]
    }))
    .expect("valid card")
}

fn server(id: &str, capabilities: &[&str], agent_types: &[&str]) -> McpServer {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("{id} server"),
        "version": "1",
        "capabilities": capabilities,
        "connection": {
            "transport": "streamable_http",
            "endpoint": "https://mcp.example",
            "auth_method": "none"
        },
        "compatibility": { "agent_types": agent_types }
    }))
    .expect("valid server")
}
