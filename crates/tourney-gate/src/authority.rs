use async_trait::async_trait;
use tourney_types::{Action, SubjectId};

use crate::error::GateError;

/// The remote authorization collaborator.
///
/// Implementations wrap the backend's `authorize` stored procedure: an
/// idempotent query that evaluates the server-side copy of the same policy
/// and returns a boolean verdict. It must be safe to call repeatedly with
/// identical arguments. The client-side pipeline is a latency/UX
/// optimization; this is the decision that counts.
#[async_trait]
pub trait Authority: Send + Sync {
    /// Ask the backend whether `subject` may perform `action` on the
    /// given resource.
    async fn authorize(
        &self,
        action: Action,
        subject: &SubjectId,
        resource: Option<&str>,
    ) -> Result<bool, GateError>;
}

/// An authority that approves everything. For tests and local development
/// against a stub backend.
pub struct AllowAllAuthority;

#[async_trait]
impl Authority for AllowAllAuthority {
    async fn authorize(
        &self,
        _action: Action,
        _subject: &SubjectId,
        _resource: Option<&str>,
    ) -> Result<bool, GateError> {
        Ok(true)
    }
}

/// An authority that denies everything.
pub struct DenyAllAuthority;

#[async_trait]
impl Authority for DenyAllAuthority {
    async fn authorize(
        &self,
        _action: Action,
        _subject: &SubjectId,
        _resource: Option<&str>,
    ) -> Result<bool, GateError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allow_all() {
        let authority = AllowAllAuthority;
        let subject = SubjectId::from("u1");
        assert!(authority
            .authorize(Action::MatchVeto, &subject, Some("m1"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn deny_all() {
        let authority = DenyAllAuthority;
        let subject = SubjectId::from("u1");
        assert!(!authority
            .authorize(Action::MatchVeto, &subject, None)
            .await
            .unwrap());
    }
}
