use tourney_types::DenyReason;

use crate::config::GateConfig;
use crate::grants::grants_action;
use crate::stage::{AccessRequest, GateStage, StageDecision};

/// Role grant stage.
///
/// Checks the session's role against the authoritative grants table. The
/// table is total over the role enum, so an unrecognized role has already
/// been normalized to `Guest` (empty grant set) upstream.
pub struct GrantStage;

impl GateStage for GrantStage {
    fn name(&self) -> &str {
        "grant"
    }

    fn evaluate(&self, request: &AccessRequest<'_>, _config: &GateConfig) -> StageDecision {
        let role = request.session.role;
        if grants_action(role, request.action) {
            StageDecision::Pass
        } else {
            StageDecision::fail(
                DenyReason::RoleNotGranted,
                format!("role {role} is not granted {}", request.action),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourney_types::{Action, Role, Session};

    fn check(role: Role, action: Action) -> StageDecision {
        let session = Session::authenticated(role, "u1");
        let request = AccessRequest {
            session: &session,
            action,
            context: None,
        };
        GrantStage.evaluate(&request, &GateConfig::default())
    }

    #[test]
    fn captain_may_veto_but_not_force_win() {
        assert!(check(Role::Captain, Action::MatchVeto).is_pass());
        let denied = check(Role::Captain, Action::MatchForceWin);
        match denied {
            StageDecision::Fail { reason, message } => {
                assert_eq!(reason, DenyReason::RoleNotGranted);
                assert!(message.contains("CAPTAIN"));
                assert!(message.contains("MATCH:FORCE_WIN"));
            }
            StageDecision::Pass => panic!("expected denial"),
        }
    }

    #[test]
    fn guest_is_denied_everything() {
        for action in Action::ALL {
            assert!(check(Role::Guest, *action).is_fail());
        }
    }
}
