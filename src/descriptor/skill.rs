//! Agent skill descriptors.

use super::{DescriptorError, fields::require_text};
use serde::{Deserialize, Serialize};

const RECORD: &str = "Skill";

/// Wire form of a skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDocument {
    /// Skill identifier.
    #[serde(default)]
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// What the skill does.
    #[serde(default)]
    pub description: String,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Example prompts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    /// Accepted input modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_modes: Option<Vec<String>>,
    /// Produced output modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_modes: Option<Vec<String>>,
}

/// A validated skill advertised by an agent card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SkillDocument")]
pub struct Skill {
    id: String,
    name: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    examples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_modes: Option<Vec<String>>,
}

impl Skill {
    /// Creates a skill with the three required fields.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EmptyField`] when any field is empty after
    /// trimming.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        Self::try_from(SkillDocument {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            ..SkillDocument::default()
        })
    }

    /// Sets the skill tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    /// Sets the example prompts.
    #[must_use]
    pub fn with_examples(mut self, examples: impl IntoIterator<Item = String>) -> Self {
        self.examples = Some(examples.into_iter().collect());
        self
    }

    /// Returns the skill identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the skill name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the skill description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the skill tags, or an empty slice when none are declared.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Returns the example prompts, or an empty slice.
    #[must_use]
    pub fn examples(&self) -> &[String] {
        self.examples.as_deref().unwrap_or_default()
    }

    /// Returns the declared input modes, or an empty slice.
    #[must_use]
    pub fn input_modes(&self) -> &[String] {
        self.input_modes.as_deref().unwrap_or_default()
    }

    /// Returns the declared output modes, or an empty slice.
    #[must_use]
    pub fn output_modes(&self) -> &[String] {
        self.output_modes.as_deref().unwrap_or_default()
    }
}

impl TryFrom<SkillDocument> for Skill {
    type Error = DescriptorError;

    fn try_from(document: SkillDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: require_text(document.id, RECORD, "id")?,
            name: require_text(document.name, RECORD, "name")?,
            description: require_text(document.description, RECORD, "description")?,
            tags: document.tags,
            examples: document.examples,
            input_modes: document.input_modes,
            output_modes: document.output_modes,
        })
    }
}
