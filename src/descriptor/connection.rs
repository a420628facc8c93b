//! MCP server connection settings.

use super::{
    DescriptorError,
    fields::{parse_http_url, require_entries, require_present_text, require_text},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

const RECORD: &str = "ServerConnection";

/// Transport used to reach an MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Streamable HTTP endpoint.
    StreamableHttp,
    /// Local process speaking over STDIO.
    Stdio,
}

impl TransportKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StreamableHttp => "streamable_http",
            Self::Stdio => "stdio",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Flat wire form of a connection object.
///
/// Every transport-specific field is optional here; [`ServerConnection`]
/// enforces which ones each transport requires or forbids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDocument {
    /// Declared transport.
    pub transport: TransportKind,
    /// HTTP endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Authentication method name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_method: Option<String>,
    /// Extra HTTP headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Executable to spawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Arguments passed to `command`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Environment variables the process expects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_env: Option<Vec<String>>,
}

/// Streamable HTTP connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamableHttpConnection {
    endpoint: Url,
    auth_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<BTreeMap<String, String>>,
}

impl StreamableHttpConnection {
    /// Returns the endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the authentication method.
    #[must_use]
    pub fn auth_method(&self) -> &str {
        &self.auth_method
    }

    /// Returns the extra headers, if declared.
    #[must_use]
    pub const fn headers(&self) -> Option<&BTreeMap<String, String>> {
        self.headers.as_ref()
    }
}

/// STDIO connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StdioConnection {
    command: String,
    args: Vec<String>,
    auth_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_env: Option<Vec<String>>,
}

impl StdioConnection {
    /// Returns the executable command.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the command-line arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the authentication method.
    #[must_use]
    pub fn auth_method(&self) -> &str {
        &self.auth_method
    }

    /// Returns the required environment variable names, or an empty slice.
    #[must_use]
    pub fn required_env(&self) -> &[String] {
        self.required_env.as_deref().unwrap_or_default()
    }
}

/// Validated connection settings, tagged by `transport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "snake_case", try_from = "ConnectionDocument")]
pub enum ServerConnection {
    /// Streamable HTTP transport.
    StreamableHttp(StreamableHttpConnection),
    /// STDIO transport.
    Stdio(StdioConnection),
}

impl ServerConnection {
    /// Creates a streamable HTTP connection.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when the endpoint is not an HTTP(S) URL
    /// or `auth_method` is blank.
    pub fn streamable_http(
        endpoint: impl Into<String>,
        auth_method: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        Self::try_from(ConnectionDocument {
            transport: TransportKind::StreamableHttp,
            endpoint: Some(endpoint.into()),
            auth_method: Some(auth_method.into()),
            headers: None,
            command: None,
            args: None,
            required_env: None,
        })
    }

    /// Creates a STDIO connection.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when `command` or `auth_method` is blank or
    /// `args` is empty.
    pub fn stdio(
        command: impl Into<String>,
        args: impl IntoIterator<Item = String>,
        auth_method: impl Into<String>,
    ) -> Result<Self, DescriptorError> {
        Self::try_from(ConnectionDocument {
            transport: TransportKind::Stdio,
            endpoint: None,
            auth_method: Some(auth_method.into()),
            headers: None,
            command: Some(command.into()),
            args: Some(args.into_iter().collect()),
            required_env: None,
        })
    }

    /// Returns the transport kind.
    #[must_use]
    pub const fn transport(&self) -> TransportKind {
        match self {
            Self::StreamableHttp(_) => TransportKind::StreamableHttp,
            Self::Stdio(_) => TransportKind::Stdio,
        }
    }

    /// Returns the authentication method.
    #[must_use]
    pub fn auth_method(&self) -> &str {
        match self {
            Self::StreamableHttp(http) => http.auth_method(),
            Self::Stdio(stdio) => stdio.auth_method(),
        }
    }
}

impl TryFrom<ConnectionDocument> for ServerConnection {
    type Error = DescriptorError;

    fn try_from(document: ConnectionDocument) -> Result<Self, Self::Error> {
        let transport = document.transport;
        let auth_method = require_present_text(document.auth_method, RECORD, "auth_method")?;

        match transport {
            TransportKind::StreamableHttp => {
                reject_present(transport, "command", document.command.is_some())?;
                reject_present(transport, "args", document.args.is_some())?;
                reject_present(transport, "required_env", document.required_env.is_some())?;
                let raw_endpoint = document.endpoint.ok_or(DescriptorError::MissingTransportField {
                    transport,
                    field: "endpoint",
                })?;
                Ok(Self::StreamableHttp(StreamableHttpConnection {
                    endpoint: parse_http_url(&raw_endpoint, "endpoint")?,
                    auth_method,
                    headers: document.headers,
                }))
            }
            TransportKind::Stdio => {
                reject_present(transport, "endpoint", document.endpoint.is_some())?;
                reject_present(transport, "headers", document.headers.is_some())?;
                let command = document.command.ok_or(DescriptorError::MissingTransportField {
                    transport,
                    field: "command",
                })?;
                let args = document.args.ok_or(DescriptorError::MissingTransportField {
                    transport,
                    field: "args",
                })?;
                Ok(Self::Stdio(StdioConnection {
                    command: require_text(command, RECORD, "command")?,
                    args: require_entries(args, RECORD, "args")?,
                    auth_method,
                    required_env: document.required_env,
                }))
            }
        }
    }
}

const fn reject_present(
    transport: TransportKind,
    field: &'static str,
    present: bool,
) -> Result<(), DescriptorError> {
    if present {
        return Err(DescriptorError::ForbiddenTransportField { transport, field });
    }
    Ok(())
}
