//! Given steps for discovery registry BDD scenarios.

use super::world::{DiscoveryWorld, agent_card, agent_card_json, mcp_server, split_list};
use camino::Utf8Path;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tempfile::TempDir;

#[given(r#"an agent card "{name}" with skill "{skill}""#)]
fn an_agent_card_with_skill(
    world: &mut DiscoveryWorld,
    name: String,
    skill: String,
) -> Result<(), eyre::Report> {
    let card = agent_card(&name, &skill).wrap_err("build agent card for scenario")?;
    world.store.register_agent_card(card.storage_key(), card);
    Ok(())
}

#[given(r#"an MCP server "{id}" version "{version}" offering "{capabilities}" to "{agent_type}""#)]
fn an_mcp_server(
    world: &mut DiscoveryWorld,
    id: String,
    version: String,
    capabilities: String,
    agent_type: String,
) -> Result<(), eyre::Report> {
    let server = mcp_server(&id, &version, &split_list(&capabilities), &agent_type)
        .wrap_err("build MCP server for scenario")?;
    world.store.register_mcp_server(server.composite_key(), server);
    Ok(())
}

#[given("a directory with {valid:usize} valid cards and {malformed:usize} malformed file")]
fn a_descriptor_directory(
    world: &mut DiscoveryWorld,
    valid: usize,
    malformed: usize,
) -> Result<(), eyre::Report> {
    let temp = TempDir::new().wrap_err("create descriptor directory")?;
    let root = Utf8Path::from_path(temp.path())
        .ok_or_else(|| eyre::eyre!("temporary directory is not valid UTF-8"))?
        .to_owned();
    for index in 0..valid {
        let value = agent_card_json(&format!("agent{index}"), "1", "translate");
        std::fs::write(root.join(format!("valid{index}.json")), value.to_string())
            .wrap_err("write valid descriptor")?;
    }
    for index in 0..malformed {
        std::fs::write(root.join(format!("broken{index}.json")), "{ \"name\": ")
            .wrap_err("write malformed descriptor")?;
    }
    world.descriptor_dir = Some(root);
    world.temp_dir = Some(temp);
    Ok(())
}

#[given("a descriptor directory that does not exist")]
fn a_missing_descriptor_directory(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    let temp = TempDir::new().wrap_err("create parent directory")?;
    let root = Utf8Path::from_path(temp.path())
        .ok_or_else(|| eyre::eyre!("temporary directory is not valid UTF-8"))?;
    world.descriptor_dir = Some(root.join("absent"));
    world.temp_dir = Some(temp);
    Ok(())
}
