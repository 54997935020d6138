//! `flo.yaml` run configuration.
//!
//! ```yaml
//! log: .flo/flo.log        # optional, relative to the config's directory
//! tasks:
//!   - name: build
//!     command: cargo build
//! ```
//!
//! Only the parts the logger needs at its boundary are modelled here: where
//! the run log lives and which task names a subgraph may select.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, ConfigError};
use crate::types::TaskName;

/// File name `flo` looks for when no config path is given.
pub const CONFIG_FILE_NAME: &str = "flo.yaml";

/// Log location used when the config has no `log` entry.
pub const DEFAULT_LOG_PATH: &str = ".flo/flo.log";

/// Parsed contents of a `flo.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Log-file location; relative values resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<PathBuf>,

    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// One declared task. The command is carried for the engine; flo's own
/// utilities only look at the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub name: TaskName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl RunConfig {
    /// Resolve the log path for a run rooted at `root`.
    pub fn log_path(&self, root: &Path) -> PathBuf {
        match &self.log {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => root.join(p),
            None => root.join(DEFAULT_LOG_PATH),
        }
    }

    pub fn task_names(&self) -> Vec<TaskName> {
        self.tasks.iter().map(|t| t.name.clone()).collect()
    }
}

/// Load a run configuration from `path`.
///
/// Returns `ConfigError::NotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML.
pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    // An empty file is a valid config with every default.
    if contents.trim().is_empty() {
        return Ok(RunConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_path_is_under_dot_flo() {
        let cfg = RunConfig::default();
        assert_eq!(
            cfg.log_path(Path::new("/work")),
            PathBuf::from("/work/.flo/flo.log")
        );
    }

    #[test]
    fn relative_log_path_joins_root() {
        let cfg = RunConfig {
            log: Some(PathBuf::from("logs/run.log")),
            tasks: vec![],
        };
        assert_eq!(
            cfg.log_path(Path::new("/work")),
            PathBuf::from("/work/logs/run.log")
        );
    }

    #[test]
    fn absolute_log_path_is_kept() {
        let cfg = RunConfig {
            log: Some(PathBuf::from("/var/log/flo.log")),
            tasks: vec![],
        };
        assert_eq!(
            cfg.log_path(Path::new("/work")),
            PathBuf::from("/var/log/flo.log")
        );
    }

    #[test]
    fn yaml_roundtrip_keeps_tasks() {
        let yaml = "log: out.log\ntasks:\n  - name: build\n    command: make\n  - name: test\n";
        let cfg: RunConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.tasks.len(), 2);
        assert_eq!(cfg.tasks[1].command, None);
        assert_eq!(
            cfg.task_names(),
            vec![TaskName::from("build"), TaskName::from("test")]
        );
    }
}
