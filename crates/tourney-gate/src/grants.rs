//! The authoritative role/action vocabulary tables.
//!
//! These are the single source of truth for which role may attempt which
//! action, which match states an action is valid in, and which actions are
//! scope-sensitive. The tables are compile-time constants; policy changes
//! require a new deployment.

use tourney_types::{Action, MatchState, Role};

/// The set of actions a role may attempt.
#[derive(Clone, Copy, Debug)]
pub enum GrantSet {
    /// Every action, regardless of vocabulary size. Held only by
    /// [`Role::Owner`].
    All,
    /// An explicit list of actions.
    Actions(&'static [Action]),
}

impl GrantSet {
    /// Whether the set contains the given action.
    pub fn contains(&self, action: Action) -> bool {
        match self {
            Self::All => true,
            Self::Actions(actions) => actions.contains(&action),
        }
    }

    /// Whether this is the `All` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

const ADMIN_ACTIONS: &[Action] = &[
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

const REFEREE_ACTIONS: &[Action] = &[
    Action::MatchVeto,
    Action::MatchReportScore,
    Action::MatchForceWin,
    Action::MatchSetLive,
    Action::MatchReschedule,
];

const CAPTAIN_ACTIONS: &[Action] = &[
    Action::MatchVeto,
    Action::MatchReportScore,
    Action::TeamEditRoster,
    Action::TeamRegister,
];

/// The grant set for a role. Total over the role enum; roles with no
/// grants get an empty list (deny-by-default).
pub fn grants(role: Role) -> GrantSet {
    match role {
        Role::Owner => GrantSet::All,
        Role::Admin => GrantSet::Actions(ADMIN_ACTIONS),
        Role::Referee => GrantSet::Actions(REFEREE_ACTIONS),
        Role::Captain => GrantSet::Actions(CAPTAIN_ACTIONS),
        Role::Player | Role::Substitute | Role::Guest => GrantSet::Actions(&[]),
    }
}

/// Whether the role's grant set contains the action.
pub fn grants_action(role: Role, action: Action) -> bool {
    grants(role).contains(action)
}

/// The match states an action is valid in, if the action is state-guarded.
///
/// `None` means the action is state-independent. A guarded action checked
/// without a match status fails closed.
pub fn state_guard(action: Action) -> Option<&'static [MatchState]> {
    match action {
        Action::MatchVeto => Some(&[MatchState::Ready, MatchState::Veto, MatchState::Live]),
        Action::MatchReportScore => Some(&[MatchState::Live]),
        // A result cannot be forced onto a match that already has one.
        Action::MatchForceWin => Some(&[
            MatchState::Scheduled,
            MatchState::Ready,
            MatchState::Veto,
            MatchState::Live,
        ]),
        Action::MatchSetLive => Some(&[MatchState::Ready, MatchState::Veto]),
        Action::MatchReschedule => Some(&[MatchState::Scheduled, MatchState::Ready]),
        _ => None,
    }
}

/// Whether the action requires the acting identity to be in scope for the
/// resource (a participant of the match, or an organizer of the
/// tournament). Bypass roles come from [`crate::GateConfig`], not from
/// this table.
pub fn is_scope_sensitive(action: Action) -> bool {
    matches!(
        action,
        Action::MatchVeto
            | Action::MatchReportScore
            | Action::TournamentEdit
            | Action::TournamentGenerateBracket
            | Action::TournamentPublish
    )
}
