use std::path::PathBuf;

use thiserror::Error;

/// Error surface for the run logger's two sinks.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot open run log at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write to run log at {path} failed: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write to terminal failed: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("reading forwarded input failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("log content is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("run log at {path} is closed")]
    Closed { path: PathBuf },

    #[error("run log at {path} was already closed")]
    AlreadyClosed { path: PathBuf },
}
