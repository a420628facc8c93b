//! Discovery registry for agent cards and MCP servers.
//!
//! The crate keeps an in-memory, thread-safe catalog of two descriptor
//! kinds and answers relevance and compatibility queries over it.
//!
//! # Architecture
//!
//! - [`descriptor`]: validated agent card and MCP server records
//! - [`registry`]: the concurrent store and directory loader
//! - [`search`]: filter paths, relevance ranking, compatibility scoring
//! - [`tools`]: action-style search and lookup operations
//! - [`resources`]: paginated reads wrapped in response envelopes
//! - [`config`] and [`bootstrap`]: settings and startup wiring
//!
//! The store is built once, loaded, then shared by reference:
//!
//! ```no_run
//! use discovery_registry::bootstrap::DiscoveryRegistry;
//! use discovery_registry::config::RegistryConfig;
//! use discovery_registry::tools::FindAgentsRequest;
//!
//! let config = RegistryConfig::default().with_agent_cards_dir("static/agent_cards");
//! let (registry, _report) = DiscoveryRegistry::bootstrap(&config);
//! let cards = registry.tools().find_agents(&FindAgentsRequest::new("translate"));
//! ```

pub mod bootstrap;
pub mod config;
pub mod descriptor;
pub mod registry;
pub mod resources;
pub mod search;
pub mod tools;
