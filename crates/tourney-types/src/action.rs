use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Namespaced capability identifier.
///
/// The wire format is `RESOURCE:VERB` (e.g. `MATCH:VETO`). The vocabulary
/// is closed: every action the system can check appears here, and an
/// unrecognized wire string is a parse error rather than a silently-denied
/// catch-all. Ad-hoc action strings are not representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Submit a map-veto step for a match.
    MatchVeto,
    /// Report the score of a match.
    MatchReportScore,
    /// Force a match result regardless of reported scores.
    MatchForceWin,
    /// Transition a match to the live state.
    MatchSetLive,
    /// Move a match to a different time slot.
    MatchReschedule,
    /// Edit a team roster.
    TeamEditRoster,
    /// Register a team for a tournament.
    TeamRegister,
    /// Edit tournament settings.
    TournamentEdit,
    /// Trigger server-side bracket generation.
    TournamentGenerateBracket,
    /// Publish a tournament to the public listing.
    TournamentPublish,
    /// View the admin audit log.
    AdminViewAudit,
    /// Manage user accounts and role assignments.
    AdminManageUsers,
}

impl Action {
    /// Every action in the vocabulary.
    pub const ALL: &'static [Action] = &[
        Action::MatchVeto,
        Action::MatchReportScore,
        Action::MatchForceWin,
        Action::MatchSetLive,
        Action::MatchReschedule,
        Action::TeamEditRoster,
        Action::TeamRegister,
        Action::TournamentEdit,
        Action::TournamentGenerateBracket,
        Action::TournamentPublish,
        Action::AdminViewAudit,
        Action::AdminManageUsers,
    ];

    /// Wire-format identifier (`RESOURCE:VERB`).
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::MatchVeto => "MATCH:VETO",
            Self::MatchReportScore => "MATCH:REPORT_SCORE",
            Self::MatchForceWin => "MATCH:FORCE_WIN",
            Self::MatchSetLive => "MATCH:SET_LIVE",
            Self::MatchReschedule => "MATCH:RESCHEDULE",
            Self::TeamEditRoster => "TEAM:EDIT_ROSTER",
            Self::TeamRegister => "TEAM:REGISTER",
            Self::TournamentEdit => "TOURNAMENT:EDIT",
            Self::TournamentGenerateBracket => "TOURNAMENT:GENERATE_BRACKET",
            Self::TournamentPublish => "TOURNAMENT:PUBLISH",
            Self::AdminViewAudit => "ADMIN:VIEW_AUDIT",
            Self::AdminManageUsers => "ADMIN:MANAGE_USERS",
        }
    }

    /// Parse a wire-format identifier. Fails closed on anything outside
    /// the vocabulary.
    pub fn from_wire(s: &str) -> Result<Self, TypeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_wire() == s)
            .ok_or_else(|| TypeError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for Action {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Action::from_wire(&s).map_err(serde::de::Error::custom)
    }
}
