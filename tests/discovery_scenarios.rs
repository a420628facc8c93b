//! Behaviour tests for agent search, server matching, and directory loading.

mod discovery_steps;

use discovery_steps::world::{DiscoveryWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/agent_search.feature",
    name = "Skill match ranks the matching agent and drops the rest"
)]
fn skill_match_ranks_matching_agent(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/agent_search.feature",
    name = "Wildcard search returns every agent"
)]
fn wildcard_search_returns_every_agent(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/agent_search.feature",
    name = "Query without shared tokens returns nothing"
)]
fn unmatched_query_returns_nothing(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_matching.feature",
    name = "Case-insensitive match on agent type and capability scores one"
)]
fn case_insensitive_match_scores_one(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_matching.feature",
    name = "Unsupported agent type is a hard fail"
)]
fn unsupported_agent_type_is_hard_fail(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_matching.feature",
    name = "Searching an empty registry is reported distinctly"
)]
fn empty_registry_is_reported(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/server_matching.feature",
    name = "Re-registering a server id replaces the earlier version"
)]
fn reregistering_server_replaces_version(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_loading.feature",
    name = "A malformed file does not abort the batch"
)]
fn malformed_file_does_not_abort_batch(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/directory_loading.feature",
    name = "A missing directory loads nothing"
)]
fn missing_directory_loads_nothing(world: DiscoveryWorld) {
    let _ = world;
}
