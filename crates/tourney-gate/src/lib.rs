//! Capability gate for tourney.
//!
//! Every permission question in the tournament front end goes through the
//! gate. It composes three pure stages — role grants, match state guards,
//! and scope/ownership — into a fail-fast pipeline, and escalates to the
//! remote authority when a binding decision is required. The local pipeline
//! is advisory (UI hinting); the backend re-validates every mutating
//! request.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tourney_gate::{AllowAllAuthority, CapabilityGate, GateConfig};
//! use tourney_types::{Action, MatchState, ResourceContext, Role, Session};
//!
//! let gate = CapabilityGate::new(GateConfig::default(), Arc::new(AllowAllAuthority));
//! let session = Session::authenticated(Role::Captain, "u1").with_team("t1");
//! let context = ResourceContext::for_match("m1", "t1", "t2", MatchState::Live);
//! let verdict = gate.can_local(&session, Action::MatchVeto, Some(&context));
//! assert!(verdict.is_allowed());
//! ```

pub mod authority;
pub mod cell;
pub mod config;
pub mod error;
pub mod gate;
pub mod grants;
pub mod stage;
pub mod stages;

// Re-exports for convenience.
pub use authority::{AllowAllAuthority, Authority, DenyAllAuthority};
pub use cell::{CapabilityCell, GateState};
pub use config::GateConfig;
pub use error::GateError;
pub use gate::CapabilityGate;
pub use grants::{grants, grants_action, is_scope_sensitive, state_guard, GrantSet};
pub use stage::{AccessRequest, GateStage, StageDecision, StageResult};
pub use stages::{GrantStage, ScopeStage, StateGuardStage};
