use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{program} was not found. Install it or make sure it is on your PATH.")]
    ConverterNotFound { program: String },

    #[error("could not start {program}: {source}")]
    ConverterLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open {target}: {source}")]
    Open {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No output file at {0}")]
    MissingOutput(PathBuf),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
