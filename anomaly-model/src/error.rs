use std::path::PathBuf;
use thiserror::Error;

/// Global error type for the offline model tool.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The batch directory holds nothing to train on or score.
    #[error("No CSV files found in {0}")]
    NoCsvFiles(PathBuf),

    /// A batch file could not be read or parsed.
    #[error("Failed to read {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The batch directory could not be listed.
    #[error("Failed to list {path}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A batch file's metadata could not be inspected.
    #[error("Failed to inspect {path}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No fitted model exists at the given path.
    #[error("Model file not found at {0}")]
    ModelNotFound(PathBuf),

    /// Failure from the model or persistence layer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A specialized Result type for model-tool operations.
pub type Result<T> = std::result::Result<T, ModelError>;
