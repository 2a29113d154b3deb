use std::time::Duration;

use serde::{Deserialize, Serialize};
use tourney_types::Role;

#[cfg(feature = "test-identity")]
use tourney_types::SubjectId;

/// Configuration for the capability gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Roles that bypass scope/ownership checks.
    pub scope_bypass: Vec<Role>,
    /// Maximum wall-clock time allowed for one remote authority call.
    /// Expiry resolves the check to a `REMOTE_ERROR` denial.
    pub remote_timeout: Duration,
    /// When `true`, the gate skips the grant/state/scope pipeline and
    /// allows any authenticated session. Intended for single-operator
    /// local tournaments; authentication is still required.
    pub permissive: bool,
    /// Subject that short-circuits local checks to allow. Only present
    /// when the `test-identity` feature is compiled in; never ship it.
    #[cfg(feature = "test-identity")]
    pub test_identity: Option<SubjectId>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            scope_bypass: vec![Role::Admin, Role::Owner],
            remote_timeout: Duration::from_secs(5),
            permissive: false,
            #[cfg(feature = "test-identity")]
            test_identity: None,
        }
    }
}

impl GateConfig {
    /// A permissive configuration for local single-operator tournaments.
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Default::default()
        }
    }

    /// Whether the given role bypasses scope checks.
    pub fn bypasses_scope(&self, role: Role) -> bool {
        self.scope_bypass.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bypass_roles() {
        let config = GateConfig::default();
        assert!(config.bypasses_scope(Role::Admin));
        assert!(config.bypasses_scope(Role::Owner));
        assert!(!config.bypasses_scope(Role::Referee));
        assert!(!config.bypasses_scope(Role::Captain));
    }

    #[test]
    fn bypass_set_is_configuration_not_constant() {
        let config = GateConfig {
            scope_bypass: vec![Role::Owner, Role::Referee],
            ..Default::default()
        };
        assert!(config.bypasses_scope(Role::Referee));
        assert!(!config.bypasses_scope(Role::Admin));
    }

    #[test]
    fn serde_roundtrip() {
        let config = GateConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scope_bypass, config.scope_bypass);
        assert_eq!(parsed.remote_timeout, config.remote_timeout);
        assert_eq!(parsed.permissive, config.permissive);
    }
}
