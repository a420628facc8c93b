//! Tests for [`RegistryStore`] identity resolution and snapshots.

use super::{agent_card, mcp_server};
use crate::descriptor::{AgentCapabilities, CapabilityFlag};
use crate::registry::RegistryStore;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn store() -> RegistryStore {
    RegistryStore::new()
}

// ── Agent cards ────────────────────────────────────────────────────

#[rstest]
fn agent_card_registration_upserts_by_exact_key(store: RegistryStore) {
    store.register_agent_card("nlp:1", agent_card("nlp", "1"));
    store.register_agent_card("nlp:1", agent_card("nlp", "1").with_description("updated"));
    store.register_agent_card("nlp-copy", agent_card("nlp", "1"));

    assert_eq!(store.agent_card_count(), 2);
    let stored = store.get_agent_card("nlp:1").expect("card stored");
    assert_eq!(stored.description(), Some("updated"));
    assert_eq!(store.get_agent_card_by_id("nlp:1"), Some(stored));
}

#[rstest]
fn missing_agent_card_is_a_sentinel_not_an_error(store: RegistryStore) {
    assert!(store.get_agent_card("absent").is_none());
    assert!(store.unregister_agent_card("absent").is_none());
}

#[rstest]
fn unregister_agent_card_removes_exact_key(store: RegistryStore) {
    store.register_agent_card("nlp:1", agent_card("nlp", "1"));

    let removed = store.unregister_agent_card("nlp:1").expect("card removed");
    assert_eq!(removed.name(), "nlp");
    assert_eq!(store.agent_card_count(), 0);
}

#[rstest]
fn agent_cards_are_found_by_name_and_capability(store: RegistryStore) {
    let pushing = agent_card("pusher", "1").with_capabilities(
        AgentCapabilities::with_flags([CapabilityFlag::PushNotifications]).expect("valid"),
    );
    store.register_agent_card("nlp:1", agent_card("nlp", "1"));
    store.register_agent_card("nlp:2", agent_card("nlp", "2"));
    store.register_agent_card("pusher:1", pushing);

    assert_eq!(store.find_agent_cards_by_name("nlp").len(), 2);
    assert!(store.find_agent_cards_by_name("NLP").is_empty());

    let pushers = store.find_agent_cards_by_capability(CapabilityFlag::PushNotifications);
    assert_eq!(pushers.len(), 1);
    assert_eq!(
        store.find_agent_cards_by_capability(CapabilityFlag::Streaming).len(),
        2
    );
    assert!(
        store
            .find_agent_cards_by_capability(CapabilityFlag::StateTransitionHistory)
            .is_empty()
    );
}

#[rstest]
fn list_with_predicate_returns_matching_snapshot(store: RegistryStore) {
    store.register_agent_card("a:1", agent_card("a", "1"));
    store.register_agent_card("b:1", agent_card("b", "1"));

    let all = store.list_agent_cards();
    let only_b = store.list_agent_cards_where(|card| card.name() == "b");

    assert_eq!(all.len(), 2);
    assert_eq!(only_b.len(), 1);
    assert_eq!(store.agent_card_keys(), vec!["a:1".to_owned(), "b:1".to_owned()]);
}

// ── MCP servers ────────────────────────────────────────────────────

#[rstest]
fn same_id_under_new_key_replaces_old_entry(store: RegistryStore) {
    store.register_mcp_server("srv1:1", mcp_server("srv1", "1", &["streaming"]));
    store.register_mcp_server("srv1:2", mcp_server("srv1", "2", &["streaming"]));

    assert_eq!(store.mcp_server_count(), 1);
    assert_eq!(store.mcp_server_keys(), vec!["srv1:2".to_owned()]);
}

#[rstest]
fn distinct_ids_are_kept_side_by_side(store: RegistryStore) {
    store.register_mcp_server("srv1:1", mcp_server("srv1", "1", &["a"]));
    store.register_mcp_server("srv2:1", mcp_server("srv2", "1", &["b"]));

    assert_eq!(store.mcp_server_count(), 2);
}

#[rstest]
#[case("srv1:1")]
#[case("srv1")]
#[case("custom-key")]
fn server_lookup_falls_back_to_identity(store: RegistryStore, #[case] reference: &str) {
    store.register_mcp_server("custom-key", mcp_server("srv1", "1", &["streaming"]));

    let found = store.get_mcp_server_by_id(reference).expect("server resolves");
    assert_eq!(found.id(), "srv1");
}

#[rstest]
fn unregister_server_falls_back_to_identity(store: RegistryStore) {
    store.register_mcp_server("custom-key", mcp_server("srv1", "1", &["streaming"]));

    assert!(store.unregister_mcp_server("srv9").is_none());
    let removed = store.unregister_mcp_server("srv1:1").expect("removed by identity");
    assert_eq!(removed.id(), "srv1");
    assert_eq!(store.mcp_server_count(), 0);
}

#[rstest]
fn server_name_lookup_is_case_sensitive(store: RegistryStore) {
    store.register_mcp_server("srv1:1", mcp_server("srv1", "1", &["streaming"]));

    assert!(store.get_mcp_server_by_name("srv1 server").is_some());
    assert!(store.get_mcp_server_by_name("SRV1 SERVER").is_none());
}

#[rstest]
fn servers_are_found_by_capability_membership(store: RegistryStore) {
    store.register_mcp_server("srv1:1", mcp_server("srv1", "1", &["streaming", "secure"]));
    store.register_mcp_server("srv2:1", mcp_server("srv2", "1", &["secure"]));

    assert_eq!(store.find_mcp_servers_by_capability("secure").len(), 2);
    assert_eq!(store.find_mcp_servers_by_capability("streaming").len(), 1);
    assert!(store.find_mcp_servers_by_capability("batch").is_empty());
}

// ── Concurrency ────────────────────────────────────────────────────

#[rstest]
fn concurrent_upserts_never_duplicate_an_identity() {
    let store = Arc::new(RegistryStore::new());

    std::thread::scope(|scope| {
        for writer in 0..8_u32 {
            let shared = Arc::clone(&store);
            scope.spawn(move || {
                for round in 0..10_u32 {
                    for slot in 0..5_u32 {
                        let id = format!("srv{slot}");
                        let version = format!("{writer}.{round}");
                        let key = format!("{id}:{version}");
                        shared.register_mcp_server(key, mcp_server(&id, &version, &["streaming"]));
                    }
                }
            });
        }
        for _ in 0..4 {
            let shared = Arc::clone(&store);
            scope.spawn(move || {
                for _ in 0..50 {
                    let servers = shared.list_mcp_servers();
                    let mut ids: Vec<&str> = servers.iter().map(|server| server.id()).collect();
                    ids.sort_unstable();
                    let before = ids.len();
                    ids.dedup();
                    assert_eq!(before, ids.len(), "snapshot held duplicate identities");
                }
            });
        }
    });

    assert_eq!(store.mcp_server_count(), 5);
}
