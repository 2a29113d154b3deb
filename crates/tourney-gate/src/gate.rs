use std::sync::Arc;

use tourney_types::{Action, DenyReason, ResourceContext, Role, Session, Verdict};
use tracing::{debug, warn};

use crate::authority::Authority;
use crate::config::GateConfig;
use crate::stage::{AccessRequest, GateStage, StageDecision, StageResult};
use crate::stages::{GrantStage, ScopeStage, StateGuardStage};

/// The capability gate: a fail-fast pipeline of stages plus a remote
/// authority for binding decisions.
///
/// Two modes share the same inputs:
///
/// - [`can_local`](Self::can_local) is synchronous and pure, suitable for
///   gating UI affordances. It is advisory only: the backend re-validates
///   every mutating request server-side.
/// - [`can_authoritative`](Self::can_authoritative) escalates to the
///   remote [`Authority`] when the local pipeline allows, so a binding
///   decision is one round trip at most and zero when the local pipeline
///   already denies.
///
/// Neither mode ever returns an error or panics: every failure path folds
/// into a denied [`Verdict`].
pub struct CapabilityGate {
    stages: Vec<Box<dyn GateStage>>,
    config: GateConfig,
    authority: Arc<dyn Authority>,
}

impl CapabilityGate {
    /// Create a gate with the standard pipeline: grant -> state -> scope.
    pub fn new(config: GateConfig, authority: Arc<dyn Authority>) -> Self {
        let mut gate = Self::empty(config, authority);
        gate.add_stage(Box::new(GrantStage));
        gate.add_stage(Box::new(StateGuardStage));
        gate.add_stage(Box::new(ScopeStage));
        gate
    }

    /// Create a gate with no stages. Use [`Self::add_stage`] to build a
    /// custom pipeline.
    pub fn empty(config: GateConfig, authority: Arc<dyn Authority>) -> Self {
        Self {
            stages: Vec::new(),
            config,
            authority,
        }
    }

    /// Append a stage to the end of the pipeline.
    pub fn add_stage(&mut self, stage: Box<dyn GateStage>) {
        self.stages.push(stage);
    }

    /// The current configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Synchronous local decision over cached session state.
    ///
    /// Composes the stage pipeline fail-fast. An unauthenticated session
    /// denies before any stage runs. The result is a UI hint, never final
    /// authorization for a mutating action.
    pub fn can_local(
        &self,
        session: &Session,
        action: Action,
        context: Option<&ResourceContext>,
    ) -> Verdict {
        if !session.is_authenticated {
            return Verdict::deny(DenyReason::NotAuthenticated, "sign in to continue");
        }

        #[cfg(feature = "test-identity")]
        if self.config.test_identity.as_ref() == Some(&session.identity.id) {
            debug!(subject = %session.identity.id, "test identity short-circuit");
            return Verdict::Allowed;
        }

        if self.config.permissive {
            return Verdict::Allowed;
        }

        let request = AccessRequest {
            session,
            action,
            context,
        };

        for stage in &self.stages {
            if let StageDecision::Fail { reason, message } = stage.evaluate(&request, &self.config)
            {
                debug!(stage = stage.name(), action = %action, %reason, "local check denied");
                return Verdict::Denied { reason, message };
            }
        }

        Verdict::Allowed
    }

    /// Authoritative decision, verified by the remote authority.
    ///
    /// Fast paths: a local denial returns immediately without a remote
    /// call, and an `Owner` session fast-accepts. Otherwise the remote
    /// authority is consulted under the configured timeout; any
    /// collaborator error or timeout resolves to a `REMOTE_ERROR` denial
    /// carrying the error text, never an `Err`.
    pub async fn can_authoritative(
        &self,
        session: &Session,
        action: Action,
        context: Option<&ResourceContext>,
    ) -> Verdict {
        let local = self.can_local(session, action, context);
        if local.is_denied() {
            return local;
        }

        if session.role == Role::Owner {
            return Verdict::Allowed;
        }

        let resource = context.map(|ctx| ctx.resource_id());
        let call = self
            .authority
            .authorize(action, &session.identity.id, resource);

        match tokio::time::timeout(self.config.remote_timeout, call).await {
            Ok(Ok(true)) => Verdict::Allowed,
            Ok(Ok(false)) => Verdict::deny(
                DenyReason::RemoteDenied,
                format!("remote authority denied {action}"),
            ),
            Ok(Err(err)) => {
                warn!(action = %action, error = %err, "remote authorization failed");
                Verdict::deny(DenyReason::RemoteError, err.to_string())
            }
            Err(_) => {
                let err = crate::error::GateError::Timeout(self.config.remote_timeout);
                warn!(action = %action, error = %err, "remote authorization timed out");
                Verdict::deny(DenyReason::RemoteError, err.to_string())
            }
        }
    }

    /// Run the pipeline and record a per-stage trail, for debugging and
    /// admin tooling. Fail-fast like [`Self::can_local`], so the trail
    /// ends at the first failing stage.
    pub fn explain(
        &self,
        session: &Session,
        action: Action,
        context: Option<&ResourceContext>,
    ) -> Vec<StageResult> {
        let request = AccessRequest {
            session,
            action,
            context,
        };

        let mut trail = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            match stage.evaluate(&request, &self.config) {
                StageDecision::Pass => trail.push(StageResult {
                    stage_name: stage.name().to_string(),
                    passed: true,
                    reason: None,
                    message: None,
                }),
                StageDecision::Fail { reason, message } => {
                    trail.push(StageResult {
                        stage_name: stage.name().to_string(),
                        passed: false,
                        reason: Some(reason),
                        message: Some(message),
                    });
                    break;
                }
            }
        }
        trail
    }
}
