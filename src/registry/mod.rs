//! Registry store and directory loader.
//!
//! [`RegistryStore`] owns every registered descriptor. Agent cards are keyed
//! by caller-chosen strings (the loader uses `name:version`); MCP servers are
//! upserted by identity so one logical server never appears under two keys.

mod loader;
mod store;

pub use loader::{LoadError, LoadFailure, LoadReport};
pub use store::RegistryStore;

#[cfg(test)]
mod tests;
