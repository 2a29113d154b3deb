use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a capability check denied.
///
/// The taxonomy is deliberately small so UI code can map each cause to a
/// distinct affordance (hide, disable with tooltip, show server message).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DenyReason {
    /// The session is not authenticated.
    NotAuthenticated,
    /// The session's role does not grant the action.
    RoleNotGranted,
    /// The resource is not in a state the action is valid in, or a
    /// state-guarded action was checked without a resource context.
    StateGuardFailed,
    /// The identity is not a participant of the resource.
    OutOfScope,
    /// The remote authority returned a negative verdict.
    RemoteDenied,
    /// The remote authority was unreachable, errored, or timed out.
    RemoteError,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::RoleNotGranted => "ROLE_NOT_GRANTED",
            Self::StateGuardFailed => "STATE_GUARD_FAILED",
            Self::OutOfScope => "OUT_OF_SCOPE",
            Self::RemoteDenied => "REMOTE_DENIED",
            Self::RemoteError => "REMOTE_ERROR",
        };
        write!(f, "{s}")
    }
}

/// The outcome of a capability check.
///
/// Recomputed on every call; never persisted. Denials always carry a reason
/// and a human-readable message suitable for a tooltip or log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The action is allowed.
    Allowed,
    /// The action is denied.
    Denied {
        reason: DenyReason,
        message: String,
    },
}

impl Verdict {
    /// A denial with the given reason and message.
    pub fn deny(reason: DenyReason, message: impl Into<String>) -> Self {
        Self::Denied {
            reason,
            message: message.into(),
        }
    }

    /// Returns `true` if allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns `true` if denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }

    /// The denial reason, if denied.
    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allowed => None,
            Self::Denied { reason, .. } => Some(*reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "allowed"),
            Self::Denied { reason, message } => write!(f, "denied ({reason}): {message}"),
        }
    }
}
