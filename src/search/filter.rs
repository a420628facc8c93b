//! Exact-match field filters over descriptor trees.
//!
//! A filter path names a field chain with `__` separators, e.g.
//! `skills__0__name` or `capabilities__streaming`. All-digit segments index
//! into lists. Paths are evaluated against the JSON projection of a
//! descriptor, so the same evaluator serves agent cards and MCP servers.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

const SEGMENT_SEPARATOR: &str = "__";

/// Errors raised while parsing a filter path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterPathError {
    /// The path is empty.
    #[error("filter path must not be empty")]
    EmptyPath,
    /// A segment between separators is empty.
    #[error("filter path '{path}' has an empty segment")]
    EmptySegment {
        /// Offending path.
        path: String,
    },
    /// A descriptor could not be projected for filtering.
    #[error("failed to project descriptor for filtering: {0}")]
    Projection(String),
}

/// One step of a filter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field name.
    Field(String),
    /// List position.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => formatter.write_str(name),
            Self::Index(position) => write!(formatter, "{position}"),
        }
    }
}

/// Parsed filter path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPath {
    segments: Vec<PathSegment>,
}

impl FilterPath {
    /// Parses a `__`-separated path.
    ///
    /// # Errors
    ///
    /// Returns [`FilterPathError`] when the path or one of its segments is
    /// empty.
    pub fn parse(raw: &str) -> Result<Self, FilterPathError> {
        if raw.is_empty() {
            return Err(FilterPathError::EmptyPath);
        }

        let segments = raw
            .split(SEGMENT_SEPARATOR)
            .map(|segment| parse_segment(raw, segment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Walks the path from `root`, returning `None` on the first miss.
    #[must_use]
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| step(current, segment))
    }
}

fn parse_segment(raw: &str, segment: &str) -> Result<PathSegment, FilterPathError> {
    if segment.is_empty() {
        return Err(FilterPathError::EmptySegment {
            path: raw.to_owned(),
        });
    }
    if segment.bytes().all(|byte| byte.is_ascii_digit())
        && let Ok(position) = segment.parse::<usize>()
    {
        return Ok(PathSegment::Index(position));
    }
    Ok(PathSegment::Field(segment.to_owned()))
}

fn step<'a>(current: &'a Value, segment: &PathSegment) -> Option<&'a Value> {
    let next = match (current, segment) {
        (Value::Array(items), PathSegment::Index(position)) => items.get(*position),
        (Value::Object(fields), PathSegment::Field(name)) => fields
            .get(name)
            .or_else(|| fields.get(&snake_to_camel(name))),
        (Value::Object(fields), PathSegment::Index(position)) => {
            fields.get(&position.to_string())
        }
        _ => None,
    };
    next.filter(|value| !value.is_null())
}

/// Lets callers write `push_notifications` for the camelCase wire field.
fn snake_to_camel(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut upper_next = false;
    for character in name.chars() {
        if character == '_' {
            upper_next = true;
        } else if upper_next {
            camel.extend(character.to_uppercase());
            upper_next = false;
        } else {
            camel.push(character);
        }
    }
    camel
}

/// Set of exact-match filters, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldFilters {
    filters: Vec<(FilterPath, Value)>,
}

impl FieldFilters {
    /// Parses every key of `filters` as a filter path.
    ///
    /// # Errors
    ///
    /// Returns [`FilterPathError`] for the first malformed key.
    pub fn parse(filters: &BTreeMap<String, Value>) -> Result<Self, FilterPathError> {
        let parsed = filters
            .iter()
            .map(|(path, expected)| Ok((FilterPath::parse(path)?, expected.clone())))
            .collect::<Result<Vec<_>, FilterPathError>>()?;
        Ok(Self { filters: parsed })
    }

    /// Returns whether no filters were supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns whether every filter holds for the projected `root`.
    ///
    /// A path that misses compares equal only to an expected `null`.
    #[must_use]
    pub fn matches(&self, root: &Value) -> bool {
        self.filters.iter().all(|(path, expected)| {
            path.resolve(root)
                .map_or(expected.is_null(), |actual| actual == expected)
        })
    }

    /// Projects `descriptor` to JSON and tests it.
    ///
    /// # Errors
    ///
    /// Returns [`FilterPathError::Projection`] when the descriptor cannot be
    /// serialized.
    pub fn matches_descriptor<T: Serialize>(
        &self,
        descriptor: &T,
    ) -> Result<bool, FilterPathError> {
        if self.is_empty() {
            return Ok(true);
        }
        let projected = serde_json::to_value(descriptor)
            .map_err(|err| FilterPathError::Projection(err.to_string()))?;
        Ok(self.matches(&projected))
    }

    /// Keeps the descriptors every filter accepts, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterPathError::Projection`] when a descriptor cannot be
    /// serialized.
    pub fn retain<T: Serialize>(&self, descriptors: Vec<T>) -> Result<Vec<T>, FilterPathError> {
        let mut kept = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if self.matches_descriptor(&descriptor)? {
                kept.push(descriptor);
            }
        }
        Ok(kept)
    }
}
