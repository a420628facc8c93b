//! Then steps for discovery registry BDD scenarios.

use super::world::{DiscoveryWorld, split_list};
use discovery_registry::registry::LoadReport;
use discovery_registry::tools::{ServerMatch, ToolError};
use rstest_bdd_macros::then;

fn server_matches(world: &DiscoveryWorld) -> Result<&[ServerMatch], eyre::Report> {
    match world.server_results.as_ref() {
        Some(Ok(matches)) => Ok(matches),
        Some(Err(err)) => Err(eyre::eyre!("server search failed: {err}")),
        None => Err(eyre::eyre!("no server search in scenario world")),
    }
}

fn load_report(world: &DiscoveryWorld) -> Result<&LoadReport, eyre::Report> {
    world
        .load_report
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no load report in scenario world"))
}

#[then(r#"the agent results are "{names}""#)]
fn agent_results_are(world: &DiscoveryWorld, names: String) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = world.agent_results.iter().map(|card| card.name()).collect();
    let expected = split_list(&names);
    if actual != expected {
        return Err(eyre::eyre!("expected agents {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("{count:usize} agents are returned")]
fn agents_returned(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    if world.agent_results.len() != count {
        return Err(eyre::eyre!(
            "expected {count} agents, found {}",
            world.agent_results.len()
        ));
    }
    Ok(())
}

#[then(r#"server "{id}" is returned with score {score:f64}"#)]
#[expect(clippy::float_arithmetic, reason = "tolerance comparison of scores")]
fn server_returned_with_score(
    world: &DiscoveryWorld,
    id: String,
    score: f64,
) -> Result<(), eyre::Report> {
    let found = server_matches(world)?
        .iter()
        .find(|candidate| candidate.server().id() == id)
        .ok_or_else(|| eyre::eyre!("server '{id}' missing from results"))?;
    if (found.compatibility_score() - score).abs() > 1e-9 {
        return Err(eyre::eyre!(
            "expected score {score}, found {}",
            found.compatibility_score()
        ));
    }
    Ok(())
}

#[then(r#"only server "{id}" is returned"#)]
fn only_server_returned(world: &DiscoveryWorld, id: String) -> Result<(), eyre::Report> {
    let ids: Vec<&str> = server_matches(world)?
        .iter()
        .map(|candidate| candidate.server().id())
        .collect();
    if ids != [id.as_str()] {
        return Err(eyre::eyre!("expected only '{id}', found {ids:?}"));
    }
    Ok(())
}

#[then("the search reports that no servers are registered")]
fn no_servers_registered(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    match world.server_results.as_ref() {
        Some(Err(ToolError::NoServersRegistered)) => Ok(()),
        other => Err(eyre::eyre!("expected NoServersRegistered, got {other:?}")),
    }
}

#[then("the registry holds {count:usize} MCP server")]
fn registry_holds_servers(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.store.mcp_server_count();
    if held != count {
        return Err(eyre::eyre!("expected {count} servers, found {held}"));
    }
    Ok(())
}

#[then(r#"server "{id}" resolves to version "{version}""#)]
fn server_resolves_to_version(
    world: &DiscoveryWorld,
    id: String,
    version: String,
) -> Result<(), eyre::Report> {
    let server = world
        .store
        .get_mcp_server_by_id(&id)
        .ok_or_else(|| eyre::eyre!("server '{id}' not found"))?;
    if server.version() != version {
        return Err(eyre::eyre!(
            "expected version {version}, found {}",
            server.version()
        ));
    }
    Ok(())
}

#[then("{count:usize} agent cards are loaded")]
fn agent_cards_loaded(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let report = load_report(world)?;
    if report.loaded() != count || world.store.agent_card_count() != count {
        return Err(eyre::eyre!(
            "expected {count} loaded cards, report says {} and store holds {}",
            report.loaded(),
            world.store.agent_card_count()
        ));
    }
    Ok(())
}

#[then("{count:usize} file is reported as failed")]
fn files_reported_failed(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let failed = load_report(world)?.failures().len();
    if failed != count {
        return Err(eyre::eyre!("expected {count} failures, found {failed}"));
    }
    Ok(())
}

#[then("the directory is reported missing")]
fn directory_reported_missing(world: &DiscoveryWorld) -> Result<(), eyre::Report> {
    if !load_report(world)?.directory_missing() {
        return Err(eyre::eyre!("expected the directory to be reported missing"));
    }
    Ok(())
}
