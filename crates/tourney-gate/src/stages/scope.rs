use tourney_types::{DenyReason, ResourceContext};

use crate::config::GateConfig;
use crate::grants::is_scope_sensitive;
use crate::stage::{AccessRequest, GateStage, StageDecision};

/// Scope/ownership stage.
///
/// For scope-sensitive actions the acting identity must be a participant
/// of the resource: a member of one of the match's teams, or an organizer
/// of the tournament (claims). Roles in the configured bypass set pass
/// unconditionally. A scope-sensitive action without a context fails
/// closed.
pub struct ScopeStage;

impl GateStage for ScopeStage {
    fn name(&self) -> &str {
        "scope"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, config: &GateConfig) -> StageDecision {
        if !is_scope_sensitive(request.action) {
            return StageDecision::Pass;
        }

        if config.bypasses_scope(request.session.role) {
            return StageDecision::Pass;
        }

        let Some(context) = request.context else {
            return StageDecision::fail(
                DenyReason::OutOfScope,
                format!("{} requires a resource context", request.action),
            );
        };

        match context {
            ResourceContext::Match {
                team1_id, team2_id, ..
            } => {
                let in_scope = request
                    .session
                    .identity
                    .team_id
                    .as_ref()
                    .is_some_and(|team| team == team1_id || team == team2_id);
                if in_scope {
                    StageDecision::Pass
                } else {
                    StageDecision::fail(
                        DenyReason::OutOfScope,
                        "identity is not a participant of this match",
                    )
                }
            }
            ResourceContext::Tournament { tournament_id } => {
                if request.session.claims.tournament_ids.contains(tournament_id) {
                    StageDecision::Pass
                } else {
                    StageDecision::fail(
                        DenyReason::OutOfScope,
                        format!("identity holds no claim on tournament {tournament_id}"),
                    )
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourney_types::{Action, MatchState, Role, Session};

    fn live_match() -> ResourceContext {
        ResourceContext::for_match("m1", "t1", "t2", MatchState::Live)
    }

    fn check(session: &Session, action: Action, context: Option<&ResourceContext>) -> StageDecision {
        let request = AccessRequest {
            session,
            action,
            context,
        };
        ScopeStage.evaluate(&request, &GateConfig::default())
    }

    #[test]
    fn participant_team_is_in_scope() {
        let session = Session::authenticated(Role::Captain, "u1").with_team("t1");
        let ctx = live_match();
        assert!(check(&session, Action::MatchVeto, Some(&ctx)).is_pass());

        let session = Session::authenticated(Role::Captain, "u1").with_team("t2");
        assert!(check(&session, Action::MatchVeto, Some(&ctx)).is_pass());
    }

    #[test]
    fn non_participant_team_is_out_of_scope() {
        let session = Session::authenticated(Role::Captain, "u1").with_team("t3");
        let ctx = live_match();
        let decision = check(&session, Action::MatchVeto, Some(&ctx));
        assert_eq!(
            decision,
            StageDecision::fail(
                DenyReason::OutOfScope,
                "identity is not a participant of this match"
            )
        );
    }

    #[test]
    fn teamless_identity_is_out_of_scope() {
        let session = Session::authenticated(Role::Captain, "u1");
        let ctx = live_match();
        assert!(check(&session, Action::MatchVeto, Some(&ctx)).is_fail());
    }

    #[test]
    fn bypass_role_passes_regardless_of_team() {
        let session = Session::authenticated(Role::Admin, "u1").with_team("t3");
        let ctx = live_match();
        assert!(check(&session, Action::MatchVeto, Some(&ctx)).is_pass());
    }

    #[test]
    fn scope_sensitive_without_context_fails_closed() {
        let session = Session::authenticated(Role::Captain, "u1").with_team("t1");
        assert!(check(&session, Action::MatchVeto, None).is_fail());
    }

    #[test]
    fn non_scope_sensitive_action_passes_trivially() {
        let session = Session::authenticated(Role::Referee, "ref");
        assert!(check(&session, Action::MatchForceWin, None).is_pass());
    }

    #[test]
    fn tournament_scope_uses_claims() {
        let ctx = ResourceContext::for_tournament("cup");
        let organizer =
            Session::authenticated(Role::Captain, "u1").with_tournament("cup");
        assert!(check(&organizer, Action::TournamentEdit, Some(&ctx)).is_pass());

        let outsider = Session::authenticated(Role::Captain, "u2");
        assert!(check(&outsider, Action::TournamentEdit, Some(&ctx)).is_fail());
    }
}
