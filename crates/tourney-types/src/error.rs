use thiserror::Error;

/// Errors produced by vocabulary parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown action identifier: {0}")]
    UnknownAction(String),

    #[error("unknown match state: {0}")]
    UnknownState(String),
}
