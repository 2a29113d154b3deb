use tourney_types::DenyReason;

use crate::config::GateConfig;
use crate::grants::state_guard;
use crate::stage::{AccessRequest, GateStage, StageDecision};

/// Match state guard stage.
///
/// Actions without a guard entry are state-independent and always pass.
/// A guarded action requires a match context carrying a status; checking
/// one without a context (or with a tournament context) fails closed.
pub struct StateGuardStage;

impl GateStage for StateGuardStage {
    fn name(&self) -> &str {
        "state"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, _config: &GateConfig) -> StageDecision {
        let Some(allowed) = state_guard(request.action) else {
            return StageDecision::Pass;
        };

        let status = request.context.and_then(|ctx| ctx.match_status());
        match status {
            Some(state) if allowed.contains(&state) => StageDecision::Pass,
            Some(state) => StageDecision::fail(
                DenyReason::StateGuardFailed,
                format!("{} is not valid while the match is {state}", request.action),
            ),
            None => StageDecision::fail(
                DenyReason::StateGuardFailed,
                format!("{} requires a match context", request.action),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourney_types::{Action, MatchState, ResourceContext, Role, Session};

    fn check(action: Action, context: Option<&ResourceContext>) -> StageDecision {
        let session = Session::authenticated(Role::Referee, "ref");
        let request = AccessRequest {
            session: &session,
            action,
            context,
        };
        StateGuardStage.evaluate(&request, &GateConfig::default())
    }

    #[test]
    fn guarded_action_passes_in_allowed_state() {
        let ctx = ResourceContext::for_match("m1", "t1", "t2", MatchState::Live);
        assert!(check(Action::MatchVeto, Some(&ctx)).is_pass());
    }

    #[test]
    fn guarded_action_fails_in_disallowed_state() {
        let ctx = ResourceContext::for_match("m1", "t1", "t2", MatchState::Completed);
        let decision = check(Action::MatchVeto, Some(&ctx));
        match decision {
            StageDecision::Fail { reason, message } => {
                assert_eq!(reason, DenyReason::StateGuardFailed);
                assert!(message.contains("completed"));
            }
            StageDecision::Pass => panic!("expected denial"),
        }
    }

    #[test]
    fn guarded_action_without_context_fails_closed() {
        let decision = check(Action::MatchVeto, None);
        assert!(decision.is_fail());
        match decision {
            StageDecision::Fail { reason, .. } => {
                assert_eq!(reason, DenyReason::StateGuardFailed)
            }
            StageDecision::Pass => unreachable!(),
        }
    }

    #[test]
    fn guarded_action_with_tournament_context_fails_closed() {
        let ctx = ResourceContext::for_tournament("cup");
        assert!(check(Action::MatchReportScore, Some(&ctx)).is_fail());
    }

    #[test]
    fn unguarded_action_passes_without_context() {
        assert!(check(Action::AdminViewAudit, None).is_pass());
        assert!(check(Action::TeamRegister, None).is_pass());
    }

    #[test]
    fn guard_matrix_is_exhaustive_per_state() {
        // Every state not in the allowed set denies; every state in it passes.
        for state in MatchState::ALL {
            let ctx = ResourceContext::for_match("m1", "t1", "t2", *state);
            let expected = crate::grants::state_guard(Action::MatchReportScore)
                .unwrap()
                .contains(state);
            assert_eq!(check(Action::MatchReportScore, Some(&ctx)).is_pass(), expected);
        }
    }
}
