use tourney_types::{Action, DenyReason, ResourceContext, Session};

use crate::config::GateConfig;

// ---------------------------------------------------------------------------
// AccessRequest
// ---------------------------------------------------------------------------

/// One capability question: may this session perform this action on this
/// resource?
///
/// Borrows the caller's session snapshot and optional context; nothing is
/// cached beyond the single decision.
#[derive(Clone, Copy, Debug)]
pub struct AccessRequest<'a> {
    /// The acting session snapshot.
    pub session: &'a Session,
    /// The action being checked.
    pub action: Action,
    /// Resource context, if the action targets a specific resource.
    pub context: Option<&'a ResourceContext>,
}

// ---------------------------------------------------------------------------
// StageDecision
// ---------------------------------------------------------------------------

/// The outcome of a single gate stage evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageDecision {
    /// The stage passed; proceed to the next stage.
    Pass,
    /// The stage failed; the request is denied.
    Fail {
        reason: DenyReason,
        message: String,
    },
}

impl StageDecision {
    /// A failure with the given reason and message.
    pub fn fail(reason: DenyReason, message: impl Into<String>) -> Self {
        Self::Fail {
            reason,
            message: message.into(),
        }
    }

    /// Returns `true` if the decision is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns `true` if the decision is `Fail`.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

// ---------------------------------------------------------------------------
// StageResult
// ---------------------------------------------------------------------------

/// Recorded result from a completed stage evaluation, used by
/// [`crate::CapabilityGate::explain`] to produce a decision trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageResult {
    /// Name of the stage that produced this result.
    pub stage_name: String,
    /// Whether the stage passed.
    pub passed: bool,
    /// Denial reason (populated on failure).
    pub reason: Option<DenyReason>,
    /// Human-readable message (populated on failure).
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// GateStage trait
// ---------------------------------------------------------------------------

/// A single evaluation stage in the capability pipeline.
///
/// Stages are evaluated in order and are pure: the same request and config
/// always produce the same decision, and no stage performs I/O. The trait
/// is object-safe and `Send + Sync` so stages can be stored in a
/// `Vec<Box<dyn GateStage>>`.
pub trait GateStage: Send + Sync {
    /// Human-readable name of this stage (e.g., "grant", "scope").
    fn name(&self) -> &str;

    /// Evaluate the request and return a decision.
    fn evaluate(&self, request: &AccessRequest<'_>, config: &GateConfig) -> StageDecision;
}
