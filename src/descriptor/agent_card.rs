//! Agent card descriptor.

use super::{
    AgentCapabilities, Authentication, CapabilitiesDocument, CapabilityFlag, DescriptorError,
    Skill, SkillDocument,
    fields::{composite_key, parse_http_url, require_text},
};
use serde::{Deserialize, Serialize};
use url::Url;

const RECORD: &str = "AgentCard";

/// Wire form of an agent card as found in descriptor files.
///
/// Parsing a document never validates; convert it with
/// [`AgentCard::try_from`] to enforce the descriptor invariants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCardDocument {
    /// Agent name.
    #[serde(default)]
    pub name: String,
    /// Agent version.
    #[serde(default)]
    pub version: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Endpoint URL of the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Organisation providing the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Link to human documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Capability flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<CapabilitiesDocument>,
    /// Authentication hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    /// Default accepted input modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_input_modes: Option<Vec<String>>,
    /// Default produced output modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_output_modes: Option<Vec<String>>,
    /// Advertised skills.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillDocument>>,
}

/// Validated capability descriptor of a remote agent.
///
/// `name` and `version` are never blank. Cards are immutable once built;
/// replacing a registered card means registering a new one under the same
/// key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "AgentCardDocument")]
pub struct AgentCard {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capabilities: Option<AgentCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_input_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_output_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skills: Option<Vec<Skill>>,
}

impl AgentCard {
    /// Creates a card with the required name and version.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EmptyField`] when either value is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        Self::try_from(AgentCardDocument {
            name: name.into(),
            version: version.into(),
            ..AgentCardDocument::default()
        })
    }

    /// Parses and validates a card from its JSON text.
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

    /// Sets the provider.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the agent endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when `url` is not an absolute HTTP(S) URL.
    pub fn with_url(mut self, url: &str) -> Result<Self, DescriptorError> {
        self.url = Some(parse_http_url(url, "url")?);
        Ok(self)
    }

    /// Sets the capability flags.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: AgentCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Sets the authentication hints.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Replaces the advertised skills.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills = Some(skills.into_iter().collect());
        self
    }

    /// Returns the agent name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the agent version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the endpoint URL, if any.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Returns the provider, if any.
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the documentation link, if any.
    #[must_use]
    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    /// Returns the capability flags, if declared.
    #[must_use]
    pub const fn capabilities(&self) -> Option<&AgentCapabilities> {
        self.capabilities.as_ref()
    }

    /// Returns whether the card declares `flag` as `true`.
    #[must_use]
    pub fn has_capability(&self, flag: CapabilityFlag) -> bool {
        self.capabilities
            .as_ref()
            .is_some_and(|capabilities| capabilities.is_enabled(flag))
    }

    /// Returns the authentication hints, if any.
    #[must_use]
    pub const fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    /// Returns the default input modes, or an empty slice.
    #[must_use]
    pub fn default_input_modes(&self) -> &[String] {
        self.default_input_modes.as_deref().unwrap_or_default()
    }

    /// Returns the default output modes, or an empty slice.
    #[must_use]
    pub fn default_output_modes(&self) -> &[String] {
        self.default_output_modes.as_deref().unwrap_or_default()
    }

    /// Returns the advertised skills, or an empty slice.
    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        self.skills.as_deref().unwrap_or_default()
    }

    /// Returns the `name:version` key used by the directory loader.
    #[must_use]
    pub fn storage_key(&self) -> String {
        composite_key(&self.name, &self.version)
    }
}

impl TryFrom<AgentCardDocument> for AgentCard {
    type Error = DescriptorError;

    fn try_from(document: AgentCardDocument) -> Result<Self, Self::Error> {
        let name = require_text(document.name, RECORD, "name")?;
        let version = require_text(document.version, RECORD, "version")?;
        let url = document
            .url
            .as_deref()
            .map(|raw| parse_http_url(raw, "url"))
            .transpose()?;
        let capabilities = document
            .capabilities
            .map(AgentCapabilities::try_from)
            .transpose()?;
        let skills = document
            .skills
            .map(|skills| {
                skills
                    .into_iter()
                    .map(Skill::try_from)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            name,
            description: document.description,
            url,
            provider: document.provider,
            version,
            documentation_url: document.documentation_url,
            capabilities,
            authentication: document.authentication,
            default_input_modes: document.default_input_modes,
            default_output_modes: document.default_output_modes,
            skills,
        })
    }
}
