//! Authentication metadata shared by both descriptor kinds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional authentication hints attached to a descriptor.
///
/// The registry does not interpret credentials; they are carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Authentication {
    /// Opaque credential material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Value>,
    /// Accepted authentication scheme names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
}
