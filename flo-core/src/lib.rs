//! flo core library — run context, run configuration, errors.
//!
//! - [`types`] — task names and [`RunContext`]
//! - [`config`] — `flo.yaml` loading and log-path resolution
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, RunConfig, TaskConfig, CONFIG_FILE_NAME, DEFAULT_LOG_PATH};
pub use error::ConfigError;
pub use types::{RunContext, TaskName};
