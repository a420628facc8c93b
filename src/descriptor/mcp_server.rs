//! MCP server descriptor.

use super::{
    Authentication, ConnectionDocument, DescriptorError, ServerConnection,
    fields::{composite_key, require_entries, require_text},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

const RECORD: &str = "MCPServer";

/// Status reported for servers that do not declare one.
pub const DEFAULT_SERVER_STATUS: &str = "active";

/// Wire form of a server's compatibility block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityDocument {
    /// Agent types the server supports.
    #[serde(default)]
    pub agent_types: Vec<String>,
    /// Free-form requirements.
    #[serde(default)]
    pub requirements: BTreeMap<String, Value>,
}

/// Validated compatibility block; `agent_types` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CompatibilityDocument")]
pub struct ServerCompatibility {
    agent_types: Vec<String>,
    requirements: BTreeMap<String, Value>,
}

impl ServerCompatibility {
    /// Creates a compatibility block with no extra requirements.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EmptyList`] when `agent_types` is empty.
    pub fn new(agent_types: impl IntoIterator<Item = String>) -> Result<Self, DescriptorError> {
        Self::try_from(CompatibilityDocument {
            agent_types: agent_types.into_iter().collect(),
            requirements: BTreeMap::new(),
        })
    }

    /// Returns the supported agent types.
    #[must_use]
    pub fn agent_types(&self) -> &[String] {
        &self.agent_types
    }

    /// Returns the free-form requirements.
    #[must_use]
    pub const fn requirements(&self) -> &BTreeMap<String, Value> {
        &self.requirements
    }
}

impl TryFrom<CompatibilityDocument> for ServerCompatibility {
    type Error = DescriptorError;

    fn try_from(document: CompatibilityDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            agent_types: require_entries(
                document.agent_types,
                "ServerCompatibility",
                "agent_types",
            )?,
            requirements: document.requirements,
        })
    }
}

/// Wire form of an MCP server as found in descriptor files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerDocument {
    /// Caller-chosen identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Server version.
    #[serde(default)]
    pub version: String,
    /// Capability names.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Connection settings.
    pub connection: ConnectionDocument,
    /// Compatibility block.
    pub compatibility: CompatibilityDocument,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Authentication hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    /// Operational status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Validated descriptor of a tool-serving MCP endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "McpServerDocument")]
pub struct McpServer {
    id: String,
    name: String,
    version: String,
    capabilities: Vec<String>,
    connection: ServerConnection,
    compatibility: ServerCompatibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

impl McpServer {
    /// Creates a server descriptor from its required parts.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when `id`, `name`, or `version` is blank or
    /// `capabilities` is empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        capabilities: impl IntoIterator<Item = String>,
        connection: ServerConnection,
        compatibility: ServerCompatibility,
    ) -> Result<Self, DescriptorError> {
        Ok(Self {
            id: require_text(id.into(), RECORD, "id")?,
            name: require_text(name.into(), RECORD, "name")?,
            version: require_text(version.into(), RECORD, "version")?,
            capabilities: require_entries(
                capabilities.into_iter().collect(),
                RECORD,
                "capabilities",
            )?,
            connection,
            compatibility,
            description: None,
            authentication: None,
            status: None,
        })
    }

    /// Parses and validates a server from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the text is malformed or fails
    /// validation.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the authentication hints.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Sets the operational status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the caller-chosen identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the capability names.
    #[must_use]
    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Returns the connection settings.
    #[must_use]
    pub const fn connection(&self) -> &ServerConnection {
        &self.connection
    }

    /// Returns the compatibility block.
    #[must_use]
    pub const fn compatibility(&self) -> &ServerCompatibility {
        &self.compatibility
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the authentication hints, if any.
    #[must_use]
    pub const fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    /// Returns the declared status, falling back to `"active"`.
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_SERVER_STATUS)
    }

    /// Returns the `id:version` composite key.
    #[must_use]
    pub fn composite_key(&self) -> String {
        composite_key(&self.id, &self.version)
    }

    /// Returns whether `reference` names this server by `id` or `id:version`.
    #[must_use]
    pub fn is_referenced_by(&self, reference: &str) -> bool {
        self.id == reference || self.composite_key() == reference
    }

    /// Returns whether `other` denotes the same logical server.
    ///
    /// Two servers share an identity when their ids match or their
    /// `id:version` keys match.
    #[must_use]
    pub fn shares_identity_with(&self, other: &Self) -> bool {
        self.id == other.id || self.composite_key() == other.composite_key()
    }
}

impl TryFrom<McpServerDocument> for McpServer {
    type Error = DescriptorError;

    fn try_from(document: McpServerDocument) -> Result<Self, Self::Error> {
        let connection = ServerConnection::try_from(document.connection)?;
        let compatibility = ServerCompatibility::try_from(document.compatibility)?;
        let server = Self::new(
            document.id,
            document.name,
            document.version,
            document.capabilities,
            connection,
            compatibility,
        )?;
        Ok(Self {
            description: document.description,
            authentication: document.authentication,
            status: document.status,
            ..server
        })
    }
}
