//! Error types for descriptor validation and parsing.

use super::TransportKind;
use thiserror::Error;

/// Errors returned while constructing agent card and MCP server descriptors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// A required string is empty after trimming.
    #[error("{record} field '{field}' must not be empty")]
    EmptyField {
        /// Record kind that owns the field.
        record: &'static str,
        /// Field name in wire form.
        field: &'static str,
    },

    /// A required list has no entries.
    #[error("{record} field '{field}' must contain at least one entry")]
    EmptyList {
        /// Record kind that owns the field.
        record: &'static str,
        /// Field name in wire form.
        field: &'static str,
    },

    /// A capabilities object declares no truthy flag.
    #[error(
        "at least one capability (streaming, pushNotifications, stateTransitionHistory) must be true"
    )]
    NoCapabilityEnabled,

    /// A URL field could not be parsed.
    #[error("{field} '{value}' is not a valid URL: {reason}")]
    InvalidUrl {
        /// Field name in wire form.
        field: &'static str,
        /// Rejected value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A URL field uses a scheme other than `http` or `https`.
    #[error("{field} '{value}' must use the http or https scheme")]
    UnsupportedUrlScheme {
        /// Field name in wire form.
        field: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A connection field required by the transport is absent.
    #[error("{field} is required when transport is '{transport}'")]
    MissingTransportField {
        /// Declared transport.
        transport: TransportKind,
        /// Missing field name.
        field: &'static str,
    },

    /// A connection field belonging to the other transport is present.
    #[error("{field} must not be set when transport is '{transport}'")]
    ForbiddenTransportField {
        /// Declared transport.
        transport: TransportKind,
        /// Offending field name.
        field: &'static str,
    },
}

/// Error returned while parsing a capability flag name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capability flag: {0}")]
pub struct ParseCapabilityFlagError(pub String);
