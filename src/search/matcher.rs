//! Compatibility scoring of MCP servers for a requesting agent.
//!
//! Each factor the caller supplies is a hard requirement: a server that
//! does not support the agent type, or lacks any required capability,
//! scores exactly zero. A factor the caller omits earns partial credit so
//! that unconstrained searches still rank every server above zero.

use crate::descriptor::McpServer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Weights of the compatibility factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityWeights {
    /// Weight of the agent-type factor.
    pub agent_type: f64,
    /// Weight of the required-capabilities factor.
    pub capabilities: f64,
    /// Fraction of a factor's weight awarded when the caller omits it.
    pub partial_credit: f64,
    /// Score used when no factor carries weight.
    pub fallback_score: f64,
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self {
            agent_type: 0.5,
            capabilities: 0.5,
            partial_credit: 0.3,
            fallback_score: 0.1,
        }
    }
}

/// What a requesting agent needs from a server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityQuery {
    agent_type: Option<String>,
    required_capabilities: Option<Vec<String>>,
}

impl CompatibilityQuery {
    /// Creates a query with no requirements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the given agent type; a blank value leaves it unset.
    #[must_use]
    pub fn with_agent_type(mut self, agent_type: impl Into<String>) -> Self {
        let value = agent_type.into();
        self.agent_type = (!value.trim().is_empty()).then_some(value);
        self
    }

    /// Requires every listed capability; an empty list leaves it unset.
    #[must_use]
    pub fn with_required_capabilities(
        mut self,
        capabilities: impl IntoIterator<Item = String>,
    ) -> Self {
        let values: Vec<String> = capabilities.into_iter().collect();
        self.required_capabilities = (!values.is_empty()).then_some(values);
        self
    }

    /// Returns the required agent type, if any.
    #[must_use]
    pub fn agent_type(&self) -> Option<&str> {
        self.agent_type.as_deref()
    }

    /// Returns the required capabilities, if any.
    #[must_use]
    pub fn required_capabilities(&self) -> Option<&[String]> {
        self.required_capabilities.as_deref()
    }
}

/// Scores MCP servers against a [`CompatibilityQuery`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompatibilityMatcher {
    weights: CompatibilityWeights,
}

impl CompatibilityMatcher {
    /// Creates a matcher with the given weights.
    #[must_use]
    pub const fn new(weights: CompatibilityWeights) -> Self {
        Self { weights }
    }

    /// Returns the configured weights.
    #[must_use]
    pub const fn weights(&self) -> CompatibilityWeights {
        self.weights
    }

    /// Returns a score in `[0.0, 1.0]` for `server`.
    #[expect(
        clippy::float_arithmetic,
        reason = "compatibility scores are weighted averages of fractional weights"
    )]
    #[must_use]
    pub fn score(&self, query: &CompatibilityQuery, server: &McpServer) -> f64 {
        let weights = self.weights;
        let mut accumulated = 0.0;
        let mut total_weight = weights.agent_type;

        if let Some(agent_type) = query.agent_type() {
            if !supports_agent_type(server, agent_type) {
                debug!(server = server.id(), agent_type, "agent type not supported");
                return 0.0;
            }
            accumulated += weights.agent_type;
        } else {
            accumulated += weights.partial_credit * weights.agent_type;
        }

        total_weight += weights.capabilities;
        if let Some(required) = query.required_capabilities() {
            if !has_all_capabilities(server, required) {
                debug!(server = server.id(), ?required, "required capabilities missing");
                return 0.0;
            }
            accumulated += weights.capabilities;
        } else {
            accumulated += weights.partial_credit * weights.capabilities;
        }

        let score = if total_weight > 0.0 {
            (accumulated / total_weight).min(1.0)
        } else {
            weights.fallback_score
        };
        debug!(server = server.id(), score, "scored MCP server");
        score
    }

    /// Scores every server, keeps positive scores, and sorts descending.
    ///
    /// Ties keep their input order.
    #[must_use]
    pub fn rank(
        &self,
        query: &CompatibilityQuery,
        servers: Vec<McpServer>,
    ) -> Vec<(McpServer, f64)> {
        let mut scored: Vec<(McpServer, f64)> = servers
            .into_iter()
            .filter_map(|server| {
                let score = self.score(query, &server);
                (score > 0.0).then_some((server, score))
            })
            .collect();
        scored.sort_by(|left, right| right.1.total_cmp(&left.1));
        scored
    }
}

fn supports_agent_type(server: &McpServer, agent_type: &str) -> bool {
    let agent_types = server.compatibility().agent_types();
    if agent_types.is_empty() {
        warn!(server = server.id(), "server declares no compatible agent types");
        return false;
    }
    let wanted = agent_type.to_lowercase();
    let supported = agent_types
        .iter()
        .any(|candidate| candidate.to_lowercase() == wanted);
    if !supported {
        warn!(
            server = server.id(),
            agent_type,
            ?agent_types,
            "unknown or unsupported agent type for server"
        );
    }
    supported
}

fn has_all_capabilities(server: &McpServer, required: &[String]) -> bool {
    let offered: BTreeSet<String> = server
        .capabilities()
        .iter()
        .map(|capability| capability.to_lowercase())
        .collect();
    required
        .iter()
        .all(|capability| offered.contains(&capability.to_lowercase()))
}
