//! Error types for flo-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the config or preparing the log directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML, with the file path and serde_yaml line context.
    #[error("failed to parse run configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The run configuration file did not exist at the expected path.
    #[error("run configuration not found at {path}")]
    NotFound { path: PathBuf },

    /// A subgraph selection named a task the run does not declare.
    #[error("unknown task '{name}' (declared: {declared})")]
    UnknownTask { name: String, declared: String },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.into(),
        source,
    }
}
