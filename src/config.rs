//! Registry configuration.
//!
//! Configuration is a JSON document; every field is optional and falls back
//! to [`RegistryConfig::default`]. A representative file is:
//!
//! ```json
//! {
//!   "agent_cards_dir": "static/agent_cards",
//!   "mcp_servers_dir": "static/mcp_servers",
//!   "ranking": { "name": 3, "description": 2, "skills": 2, "capabilities": 1 },
//!   "compatibility": { "agent_type": 0.5, "capabilities": 0.5 }
//! }
//! ```

use crate::search::{CompatibilityWeights, RankingWeights};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not a valid configuration document.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The path does not name a file.
    #[error("config path {0} has no file name")]
    NotAFile(Utf8PathBuf),
}

/// Settings for bootstrapping a discovery registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Directory of agent card descriptor files.
    pub agent_cards_dir: Option<Utf8PathBuf>,
    /// Directory of MCP server descriptor files.
    pub mcp_servers_dir: Option<Utf8PathBuf>,
    /// Relevance ranking weights.
    pub ranking: RankingWeights,
    /// Compatibility scoring weights.
    pub compatibility: CompatibilityWeights,
}

impl RegistryConfig {
    /// Reads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::NotAFile(path.to_owned()))?;
        let text = read_file(path, file_name).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the text is not a valid
    /// configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Sets the agent card directory.
    #[must_use]
    pub fn with_agent_cards_dir(mut self, directory: impl Into<Utf8PathBuf>) -> Self {
        self.agent_cards_dir = Some(directory.into());
        self
    }

    /// Sets the MCP server directory.
    #[must_use]
    pub fn with_mcp_servers_dir(mut self, directory: impl Into<Utf8PathBuf>) -> Self {
        self.mcp_servers_dir = Some(directory.into());
        self
    }
}

fn read_file(path: &Utf8Path, file_name: &str) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
