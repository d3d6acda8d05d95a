use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickerError>;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("provide at least 4 participants (got {count})")]
    TooFewParticipants { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
}

/// Why a pending command could not take over the process.
///
/// Every variant maps to a fixed process exit code, see [`HandoffError::exit_code`].
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("cannot parse command `{command}`: {source}")]
    InvalidCommand {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("failed to exec '{program}': {source}")]
    ExecFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl HandoffError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            HandoffError::CommandNotFound(_) => 127,
            HandoffError::PermissionDenied(_) => 126,
            HandoffError::InvalidCommand { .. } | HandoffError::ExecFailure { .. } => 1,
        }
    }
}
