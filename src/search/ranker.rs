//! Keyword relevance ranking of agent cards.

use super::OffsetWindow;
use crate::descriptor::{AgentCard, CapabilityFlag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Per-field weights applied to token overlap counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    /// Weight of name token matches.
    pub name: u32,
    /// Weight of description token matches.
    pub description: u32,
    /// Weight of skill name, description, and tag token matches.
    pub skills: u32,
    /// Weight of enabled capability flag matches.
    pub capabilities: u32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            name: 3,
            description: 2,
            skills: 2,
            capabilities: 1,
        }
    }
}

/// Splits `text` into its distinct lowercase word tokens.
///
/// A word is a run of alphanumeric characters or underscores.
#[must_use]
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|character: char| !(character.is_alphanumeric() || character == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns whether `query` asks for every candidate unranked.
#[must_use]
pub fn is_wildcard_query(query: &str) -> bool {
    let trimmed = query.trim();
    trimmed.is_empty() || trimmed == "*"
}

/// Query token for a capability flag: its lowercased wire name.
fn capability_token(flag: CapabilityFlag) -> String {
    flag.as_str().to_lowercase()
}

/// Scores and orders agent cards against a free-text query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelevanceRanker {
    weights: RankingWeights,
}

impl RelevanceRanker {
    /// Creates a ranker with the given weights.
    #[must_use]
    pub const fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    /// Returns the configured weights.
    #[must_use]
    pub const fn weights(&self) -> RankingWeights {
        self.weights
    }

    /// Scores `card` against an already tokenized query.
    #[must_use]
    pub fn score(&self, query_tokens: &BTreeSet<String>, card: &AgentCard) -> u64 {
        let name_matches = overlap(query_tokens, &tokenize(card.name()));
        let description_matches =
            overlap(query_tokens, &tokenize(card.description().unwrap_or_default()));

        let mut skill_tokens = BTreeSet::new();
        for skill in card.skills() {
            skill_tokens.extend(tokenize(skill.name()));
            skill_tokens.extend(tokenize(skill.description()));
            for tag in skill.tags() {
                skill_tokens.extend(tokenize(tag));
            }
        }
        let skill_matches = overlap(query_tokens, &skill_tokens);

        let capability_tokens: BTreeSet<String> = card
            .capabilities()
            .map(|capabilities| {
                capabilities
                    .enabled_flags()
                    .map(capability_token)
                    .collect()
            })
            .unwrap_or_default();
        let capability_matches = overlap(query_tokens, &capability_tokens);

        let score = weighted(self.weights.name, name_matches)
            .saturating_add(weighted(self.weights.description, description_matches))
            .saturating_add(weighted(self.weights.skills, skill_matches))
            .saturating_add(weighted(self.weights.capabilities, capability_matches));
        debug!(
            card = card.name(),
            name_matches,
            description_matches,
            skill_matches,
            capability_matches,
            score,
            "scored agent card"
        );
        score
    }

    /// Scores every card and sorts by descending score.
    ///
    /// Ties keep their input order.
    #[must_use]
    pub fn rank(&self, query: &str, cards: Vec<AgentCard>) -> Vec<(AgentCard, u64)> {
        let query_tokens = tokenize(query);
        let mut scored: Vec<(AgentCard, u64)> = cards
            .into_iter()
            .map(|card| {
                let score = self.score(&query_tokens, &card);
                (card, score)
            })
            .collect();
        scored.sort_by(|left, right| right.1.cmp(&left.1));
        scored
    }

    /// Runs a full search over pre-filtered candidates.
    ///
    /// A wildcard query returns the candidates in their given order. Any
    /// other query drops cards scoring zero. `window` applies last.
    #[must_use]
    pub fn search(
        &self,
        query: &str,
        candidates: Vec<AgentCard>,
        window: OffsetWindow,
    ) -> Vec<AgentCard> {
        if is_wildcard_query(query) {
            debug!("wildcard query, returning candidates unranked");
            return window.apply(candidates);
        }

        let relevant = self
            .rank(query, candidates)
            .into_iter()
            .filter(|(_, score)| *score > 0)
            .map(|(card, _)| card)
            .collect();
        window.apply(relevant)
    }
}

fn overlap(query_tokens: &BTreeSet<String>, field_tokens: &BTreeSet<String>) -> u64 {
    let shared = query_tokens.intersection(field_tokens).count();
    u64::try_from(shared).unwrap_or(u64::MAX)
}

fn weighted(weight: u32, matches: u64) -> u64 {
    u64::from(weight).saturating_mul(matches)
}
