use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Lifecycle state of a match.
///
/// The set is closed; state guards are defined over exactly these states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    /// Scheduled but not yet ready to start.
    Scheduled,
    /// Both teams checked in; awaiting veto.
    Ready,
    /// Map veto in progress.
    Veto,
    /// Match being played.
    Live,
    /// Result recorded.
    Completed,
}

impl MatchState {
    /// Every match state.
    pub const ALL: &'static [MatchState] = &[
        MatchState::Scheduled,
        MatchState::Ready,
        MatchState::Veto,
        MatchState::Live,
        MatchState::Completed,
    ];

    /// Wire-format name (lowercase).
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Ready => "ready",
            Self::Veto => "veto",
            Self::Live => "live",
            Self::Completed => "completed",
        }
    }

    /// Parse a wire-format state name. Fails closed on unknown states.
    pub fn from_wire(s: &str) -> Result<Self, TypeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.as_wire() == s)
            .ok_or_else(|| TypeError::UnknownState(s.to_string()))
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_roundtrip() {
        for state in MatchState::ALL {
            assert_eq!(MatchState::from_wire(state.as_wire()).unwrap(), *state);
        }
    }

    #[test]
    fn unknown_state_fails_to_parse() {
        assert!(matches!(
            MatchState::from_wire("paused"),
            Err(TypeError::UnknownState(_))
        ));
    }

    #[test]
    fn serde_is_lowercase() {
        let json = serde_json::to_string(&MatchState::Live).unwrap();
        assert_eq!(json, "\"live\"");
    }
}
