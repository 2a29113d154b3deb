//! Built-in gate stages, evaluated in order: grant, state, scope.

pub mod grant;
pub mod scope;
pub mod state;

pub use grant::GrantStage;
pub use scope::ScopeStage;
pub use state::StateGuardStage;
