use std::fmt;

/// Errors raised at the remote-authority boundary.
///
/// The decision path itself never returns an error: every failure is folded
/// into a denied [`tourney_types::Verdict`]. `GateError` exists so that
/// [`crate::Authority`] implementations have a typed way to report
/// transport and configuration problems, which the gate then translates
/// into a `REMOTE_ERROR` denial.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The remote authority call failed (network, backend, serialization).
    #[error("remote authority error: {0}")]
    Remote(String),

    /// The remote authority call exceeded the configured timeout.
    #[error("remote authority timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl PartialEq for GateError {
    fn eq(&self, other: &Self) -> bool {
        // Compare by display representation for test convenience.
        fmt::format(format_args!("{self}")) == fmt::format(format_args!("{other}"))
    }
}

impl Eq for GateError {}
