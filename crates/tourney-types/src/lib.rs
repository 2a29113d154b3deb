//! Foundation types for the tourney capability core.
//!
//! This crate provides the role/action vocabulary, session snapshot, and
//! decision types used throughout the tourney system. Every other tourney
//! crate depends on `tourney-types`.
//!
//! # Key Types
//!
//! - [`Role`] — Privilege tier attached to a session
//! - [`Action`] — Namespaced capability identifier (`RESOURCE:VERB`)
//! - [`MatchState`] — Match lifecycle state used by state guards
//! - [`Session`] — Immutable identity snapshot produced by the auth provider
//! - [`ResourceContext`] — Per-call match or tournament context
//! - [`Verdict`] — Allow/deny decision with a [`DenyReason`]

pub mod action;
pub mod context;
pub mod error;
pub mod ids;
pub mod role;
pub mod session;
pub mod state;
pub mod verdict;

pub use action::Action;
pub use context::ResourceContext;
pub use error::TypeError;
pub use ids::{MatchId, SubjectId, TeamId, TournamentId};
pub use role::Role;
pub use session::{Claims, Identity, Session};
pub use state::MatchState;
pub use verdict::{DenyReason, Verdict};
