//! Agent card capability flags.

use super::{DescriptorError, ParseCapabilityFlagError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named boolean capability an agent card may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityFlag {
    /// Streaming responses.
    Streaming,
    /// Push notifications.
    PushNotifications,
    /// State transition history.
    StateTransitionHistory,
}

impl CapabilityFlag {
    /// All flags in declaration order.
    pub const ALL: [Self; 3] = [
        Self::Streaming,
        Self::PushNotifications,
        Self::StateTransitionHistory,
    ];

    /// Returns the wire (camelCase) name of the flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Streaming => "streaming",
            Self::PushNotifications => "pushNotifications",
            Self::StateTransitionHistory => "stateTransitionHistory",
        }
    }
}

impl fmt::Display for CapabilityFlag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CapabilityFlag {
    type Error = ParseCapabilityFlagError;

    /// Accepts camelCase, `snake_case`, and any letter case.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|character| *character != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "streaming" => Ok(Self::Streaming),
            "pushnotifications" => Ok(Self::PushNotifications),
            "statetransitionhistory" => Ok(Self::StateTransitionHistory),
            _ => Err(ParseCapabilityFlagError(value.to_owned())),
        }
    }
}

/// Wire form of an agent card's capabilities object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesDocument {
    /// Streaming flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,
    /// Push notification flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,
    /// State transition history flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_transition_history: Option<bool>,
}

/// Validated capabilities of an agent card.
///
/// At least one flag is always `true`; a capabilities object that declares
/// nothing is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CapabilitiesDocument")]
pub struct AgentCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    streaming: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    push_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_transition_history: Option<bool>,
}

impl AgentCapabilities {
    /// Creates capabilities from the three optional flags.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::NoCapabilityEnabled`] when no flag is
    /// `Some(true)`.
    pub fn new(
        streaming: Option<bool>,
        push_notifications: Option<bool>,
        state_transition_history: Option<bool>,
    ) -> Result<Self, DescriptorError> {
        let any_enabled = [streaming, push_notifications, state_transition_history]
            .into_iter()
            .any(|flag| flag == Some(true));
        if !any_enabled {
            return Err(DescriptorError::NoCapabilityEnabled);
        }

        Ok(Self {
            streaming,
            push_notifications,
            state_transition_history,
        })
    }

    /// Creates capabilities with exactly the given flags set to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::NoCapabilityEnabled`] when `flags` is empty.
    pub fn with_flags(
        flags: impl IntoIterator<Item = CapabilityFlag>,
    ) -> Result<Self, DescriptorError> {
        let mut document = CapabilitiesDocument::default();
        for flag in flags {
            match flag {
                CapabilityFlag::Streaming => document.streaming = Some(true),
                CapabilityFlag::PushNotifications => document.push_notifications = Some(true),
                CapabilityFlag::StateTransitionHistory => {
                    document.state_transition_history = Some(true);
                }
            }
        }
        Self::try_from(document)
    }

    /// Returns whether the named flag is set to `true`.
    #[must_use]
    pub fn is_enabled(&self, flag: CapabilityFlag) -> bool {
        let value = match flag {
            CapabilityFlag::Streaming => self.streaming,
            CapabilityFlag::PushNotifications => self.push_notifications,
            CapabilityFlag::StateTransitionHistory => self.state_transition_history,
        };
        value == Some(true)
    }

    /// Returns the flags that are set to `true`, in declaration order.
    pub fn enabled_flags(&self) -> impl Iterator<Item = CapabilityFlag> + '_ {
        CapabilityFlag::ALL
            .into_iter()
            .filter(|flag| self.is_enabled(*flag))
    }

    /// Returns the declared streaming flag.
    #[must_use]
    pub const fn streaming(&self) -> Option<bool> {
        self.streaming
    }

    /// Returns the declared push notification flag.
    #[must_use]
    pub const fn push_notifications(&self) -> Option<bool> {
        self.push_notifications
    }

    /// Returns the declared state transition history flag.
    #[must_use]
    pub const fn state_transition_history(&self) -> Option<bool> {
        self.state_transition_history
    }
}

impl TryFrom<CapabilitiesDocument> for AgentCapabilities {
    type Error = DescriptorError;

    fn try_from(document: CapabilitiesDocument) -> Result<Self, Self::Error> {
        Self::new(
            document.streaming,
            document.push_notifications,
            document.state_transition_history,
        )
    }
}
