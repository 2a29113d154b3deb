use serde::{Deserialize, Serialize};

use crate::ids::{MatchId, TeamId, TournamentId};
use crate::state::MatchState;

/// Resource context supplied alongside an action at decision time.
///
/// Callers construct the context per call; the capability core never caches
/// it beyond the single decision. Actions that are state-guarded or
/// scope-sensitive require the matching context kind and fail closed
/// without it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceContext {
    /// Context for match-scoped actions.
    Match {
        match_id: MatchId,
        team1_id: TeamId,
        team2_id: TeamId,
        status: MatchState,
    },
    /// Context for tournament-scoped actions.
    Tournament { tournament_id: TournamentId },
}

impl ResourceContext {
    /// A match context.
    pub fn for_match(
        match_id: impl Into<MatchId>,
        team1_id: impl Into<TeamId>,
        team2_id: impl Into<TeamId>,
        status: MatchState,
    ) -> Self {
        Self::Match {
            match_id: match_id.into(),
            team1_id: team1_id.into(),
            team2_id: team2_id.into(),
            status,
        }
    }

    /// A tournament context.
    pub fn for_tournament(tournament_id: impl Into<TournamentId>) -> Self {
        Self::Tournament {
            tournament_id: tournament_id.into(),
        }
    }

    /// The match status, if this is a match context.
    pub fn match_status(&self) -> Option<MatchState> {
        match self {
            Self::Match { status, .. } => Some(*status),
            Self::Tournament { .. } => None,
        }
    }

    /// The participant team ids, if this is a match context.
    pub fn participants(&self) -> Option<[&TeamId; 2]> {
        match self {
            Self::Match {
                team1_id, team2_id, ..
            } => Some([team1_id, team2_id]),
            Self::Tournament { .. } => None,
        }
    }

    /// The tournament id, if this is a tournament context.
    pub fn tournament(&self) -> Option<&TournamentId> {
        match self {
            Self::Match { .. } => None,
            Self::Tournament { tournament_id } => Some(tournament_id),
        }
    }

    /// The resource identifier passed to the remote authority.
    pub fn resource_id(&self) -> &str {
        match self {
            Self::Match { match_id, .. } => match_id.as_str(),
            Self::Tournament { tournament_id } => tournament_id.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_context_accessors() {
        let ctx = ResourceContext::for_match("m1", "t1", "t2", MatchState::Live);
        assert_eq!(ctx.match_status(), Some(MatchState::Live));
        let [a, b] = ctx.participants().unwrap();
        assert_eq!(a.as_str(), "t1");
        assert_eq!(b.as_str(), "t2");
        assert_eq!(ctx.resource_id(), "m1");
        assert!(ctx.tournament().is_none());
    }

    #[test]
    fn tournament_context_accessors() {
        let ctx = ResourceContext::for_tournament("cup");
        assert!(ctx.match_status().is_none());
        assert!(ctx.participants().is_none());
        assert_eq!(ctx.tournament().unwrap().as_str(), "cup");
        assert_eq!(ctx.resource_id(), "cup");
    }
}
