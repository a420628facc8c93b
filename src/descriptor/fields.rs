//! Shared field validation rules for descriptor construction.

use super::DescriptorError;
use url::Url;

/// Rejects strings that are empty after trimming.
pub(crate) fn require_text(
    value: String,
    record: &'static str,
    field: &'static str,
) -> Result<String, DescriptorError> {
    if value.trim().is_empty() {
        return Err(DescriptorError::EmptyField { record, field });
    }
    Ok(value)
}

/// Rejects an absent or whitespace-only string.
pub(crate) fn require_present_text(
    value: Option<String>,
    record: &'static str,
    field: &'static str,
) -> Result<String, DescriptorError> {
    require_text(value.unwrap_or_default(), record, field)
}

/// Rejects empty lists.
pub(crate) fn require_entries<T>(
    values: Vec<T>,
    record: &'static str,
    field: &'static str,
) -> Result<Vec<T>, DescriptorError> {
    if values.is_empty() {
        return Err(DescriptorError::EmptyList { record, field });
    }
    Ok(values)
}

/// Parses an absolute `http://` or `https://` URL.
pub(crate) fn parse_http_url(raw: &str, field: &'static str) -> Result<Url, DescriptorError> {
    let parsed = Url::parse(raw.trim()).map_err(|err| DescriptorError::InvalidUrl {
        field,
        value: raw.to_owned(),
        reason: err.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DescriptorError::UnsupportedUrlScheme {
            field,
            value: raw.to_owned(),
        });
    }

    Ok(parsed)
}

/// Builds the `left:version` composite key used for storage and identity.
#[must_use]
pub fn composite_key(left: &str, version: &str) -> String {
    format!("{left}:{version}")
}
