use thiserror::Error;

/// Failures surfaced inside the overlay. None of them are fatal: each one
/// becomes an error line in the log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TerminalError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Error: {0}")]
    ActionFailed(String),

    #[error("{0} data not available")]
    DataUnavailable(&'static str),
}
