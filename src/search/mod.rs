//! Ranking, matching, filtering, and pagination over registry snapshots.
//!
//! Everything here is pure computation on descriptors already copied out
//! of the store; nothing holds the registry lock.

mod filter;
mod matcher;
mod pagination;
mod ranker;

pub use filter::{FieldFilters, FilterPath, FilterPathError, PathSegment};
pub use matcher::{CompatibilityMatcher, CompatibilityQuery, CompatibilityWeights};
pub use pagination::OffsetWindow;
pub use ranker::{RankingWeights, RelevanceRanker, is_wildcard_query, tokenize};

#[cfg(test)]
mod tests;
