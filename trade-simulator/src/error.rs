use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration failures.
///
/// Every variant is fatal: the process prints one diagnostic and exits
/// non-zero before the simulation loop starts. Per-cycle delivery problems
/// never take this form; sinks fold them into `SinkResult`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The mode selector holds an unrecognized value.
    #[error("Unsupported mode '{0}'. Supported modes are 'local' and 'remote'")]
    UnsupportedMode(String),

    /// A setting required by remote mode is absent.
    #[error("Missing required remote setting {0}")]
    MissingRemoteSetting(&'static str),

    /// The base dataset could not be read or parsed.
    #[error("Failed to read base dataset {path}")]
    BaseDatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The base dataset parsed but holds no rows to sample from.
    #[error("Base dataset contains no rows")]
    EmptyBaseDataset,

    /// The output directory could not be created.
    #[error("Failed to create output directory {path}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
