use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the triage run
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Input report not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to read input report {path:?}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Input report is missing required column: {0}")]
    MissingColumn(String),

    #[error("Failed to write output report {path:?}: {source}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TriageError>;
