use serde::{Deserialize, Serialize};

use crate::ids::{SubjectId, TeamId, TournamentId};
use crate::role::Role;

/// The acting identity within a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject (account) identifier.
    pub id: SubjectId,
    /// Team the subject belongs to, if any.
    pub team_id: Option<TeamId>,
}

/// Claims attached to a session by the auth provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Tournaments the subject is an organizer/staff member of.
    pub tournament_ids: Vec<TournamentId>,
}

/// An immutable snapshot of the current session.
///
/// Sessions are produced by the external auth provider at login and torn
/// down at logout. The capability core only ever reads a snapshot; it never
/// mutates one, and a decision is valid only for the snapshot it was made
/// against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the subject has authenticated at all.
    pub is_authenticated: bool,
    /// The single role attached to this session.
    pub role: Role,
    /// The acting identity.
    pub identity: Identity,
    /// Additional claims.
    pub claims: Claims,
}

impl Session {
    /// An authenticated session with the given role and subject.
    pub fn authenticated(role: Role, subject: impl Into<SubjectId>) -> Self {
        Self {
            is_authenticated: true,
            role,
            identity: Identity {
                id: subject.into(),
                team_id: None,
            },
            claims: Claims::default(),
        }
    }

    /// An unauthenticated guest session.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            role: Role::Guest,
            identity: Identity {
                id: SubjectId::from("anonymous"),
                team_id: None,
            },
            claims: Claims::default(),
        }
    }

    /// Attach a team to the identity.
    pub fn with_team(mut self, team: impl Into<TeamId>) -> Self {
        self.identity.team_id = Some(team.into());
        self
    }

    /// Attach an organizer claim for a tournament.
    pub fn with_tournament(mut self, tournament: impl Into<TournamentId>) -> Self {
        self.claims.tournament_ids.push(tournament.into());
        self
    }
}
