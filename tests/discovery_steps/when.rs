//! When steps for discovery registry BDD scenarios.

use super::world::DiscoveryWorld;
use discovery_registry::tools::{FindAgentsRequest, FindServersRequest};
use rstest_bdd_macros::when;

#[when(r#"agents are searched for "{query}""#)]
fn agents_are_searched(world: &mut DiscoveryWorld, query: String) {
    world.agent_results = world.tools().find_agents(&FindAgentsRequest::new(query));
}

#[when(r#"servers are searched for agent type "{agent_type}" needing "{capability}""#)]
fn servers_are_searched(world: &mut DiscoveryWorld, agent_type: String, capability: String) {
    let request = FindServersRequest::new()
        .with_agent_type(agent_type)
        .with_required_capabilities([capability]);
    world.server_results = Some(world.tools().find_servers(&request));
}

#[when("the agent card directory is loaded")]
fn agent_card_directory_is_loaded(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    let directory = world
        .descriptor_dir
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no descriptor directory in scenario world"))?;
    world.load_report = Some(world.store.load_agent_cards_from_directory(directory));
    Ok(())
}
