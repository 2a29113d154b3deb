use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tourney_types::{Action, DenyReason, ResourceContext, Session, Verdict};

use crate::gate::CapabilityGate;

// ---------------------------------------------------------------------------
// GateState
// ---------------------------------------------------------------------------

/// Tri-state result exposed to rendering code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    /// An authoritative check is in flight.
    Pending,
    /// The action is allowed.
    Allowed,
    /// The action is denied.
    Denied {
        reason: DenyReason,
        message: String,
    },
}

impl GateState {
    /// Returns `true` if a check is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns `true` if denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied { .. })
    }

    /// The denial reason, if denied.
    pub fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Denied { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl From<Verdict> for GateState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Allowed => Self::Allowed,
            Verdict::Denied { reason, message } => Self::Denied { reason, message },
        }
    }
}

// ---------------------------------------------------------------------------
// CapabilityCell
// ---------------------------------------------------------------------------

/// A declarative gate for one UI affordance.
///
/// The cell memoizes the latest decision and guards against stale results
/// with a monotonically increasing sequence token: every evaluation stamps
/// a new token, and a check may only commit its result while its token is
/// still the newest. An in-flight authoritative check whose inputs went
/// stale (a newer evaluation started, or [`invalidate`](Self::invalidate)
/// was called) resolves without effect — a late-arriving decision never
/// overwrites a newer one, regardless of completion order.
pub struct CapabilityCell {
    gate: Arc<CapabilityGate>,
    seq: AtomicU64,
    state: Mutex<GateState>,
}

impl CapabilityCell {
    /// Create a cell over the given gate. The initial state is `Pending`.
    pub fn new(gate: Arc<CapabilityGate>) -> Self {
        Self {
            gate,
            seq: AtomicU64::new(0),
            state: Mutex::new(GateState::Pending),
        }
    }

    /// The latest committed state.
    pub fn state(&self) -> GateState {
        self.lock().clone()
    }

    /// Abandon any in-flight check. Its result will be discarded when it
    /// resolves. The cell reverts to `Pending` until the next evaluation.
    pub fn invalidate(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        *self.lock() = GateState::Pending;
    }

    /// Synchronous re-evaluation using only the local pipeline. Suitable
    /// for pure UI hinting where a round trip is not warranted.
    pub fn evaluate_local(
        &self,
        session: &Session,
        action: Action,
        context: Option<&ResourceContext>,
    ) -> GateState {
        let token = self.begin();
        let verdict = self.gate.can_local(session, action, context);
        self.commit(token, verdict.into())
    }

    /// Authoritative re-evaluation. Publishes `Pending`, resolves through
    /// the remote authority, and commits only if no newer evaluation has
    /// started in the meantime. Returns the cell's state after the commit
    /// attempt, which is the newer result when this check went stale.
    pub async fn evaluate(
        &self,
        session: &Session,
        action: Action,
        context: Option<&ResourceContext>,
    ) -> GateState {
        let token = self.begin();
        let verdict = self.gate.can_authoritative(session, action, context).await;
        self.commit(token, verdict.into())
    }

    /// Re-evaluate whenever the session feed changes. Realtime updates,
    /// logins, and logouts all arrive through the same channel and are
    /// treated as ordinary triggers. Returns when the feed closes.
    pub async fn follow(
        &self,
        mut sessions: watch::Receiver<Session>,
        action: Action,
        context: Option<ResourceContext>,
    ) {
        loop {
            let session = sessions.borrow_and_update().clone();
            self.evaluate(&session, action, context.as_ref()).await;
            if sessions.changed().await.is_err() {
                break;
            }
        }
    }

    fn begin(&self) -> u64 {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock() = GateState::Pending;
        token
    }

    fn commit(&self, token: u64, next: GateState) -> GateState {
        let mut state = self.lock();
        if self.seq.load(Ordering::SeqCst) == token {
            *state = next;
        }
        state.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
