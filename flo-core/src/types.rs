//! Domain types shared by flo's utilities.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{load_config, RunConfig};
use crate::error::{io_err, ConfigError};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a task declared in a run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskName(pub String);

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// RunContext
// ---------------------------------------------------------------------------

/// The owning execution unit for a run, or a selected sub-portion of one.
///
/// A subgraph keeps its parent's `root` and `abs_log_path`, so anything that
/// configures logging from it lands in the same log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    root: PathBuf,
    abs_log_path: PathBuf,
    tasks: Vec<TaskName>,
    selection: Option<Vec<TaskName>>,
}

impl RunContext {
    /// Build a context directly from a root and a resolved log path.
    pub fn new(root: impl Into<PathBuf>, abs_log_path: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            abs_log_path: abs_log_path.into(),
            tasks: Vec::new(),
            selection: None,
        }
    }

    /// Declare the task names a subgraph may select.
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = TaskName>) -> Self {
        self.tasks = tasks.into_iter().collect();
        self
    }

    /// Build a context from an already-parsed config rooted at `root`.
    pub fn from_config(root: &Path, config: &RunConfig) -> Self {
        Self::new(root, config.log_path(root)).with_tasks(config.task_names())
    }

    /// Load `flo.yaml` at `path` and resolve the run's log path against the
    /// config's directory.
    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        let config = load_config(path)?;
        let absolute = std::path::absolute(path).map_err(|e| io_err(path, e))?;
        let root = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));
        tracing::debug!(config = %absolute.display(), "loaded run configuration");
        Ok(Self::from_config(&root, &config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The resolved log-file path this run writes to.
    pub fn abs_log_path(&self) -> &Path {
        &self.abs_log_path
    }

    pub fn tasks(&self) -> &[TaskName] {
        &self.tasks
    }

    /// Selected tasks when this context is a subgraph, `None` for a full run.
    pub fn selection(&self) -> Option<&[TaskName]> {
        self.selection.as_deref()
    }

    pub fn is_subgraph(&self) -> bool {
        self.selection.is_some()
    }

    /// Restrict the run to `names`. The result shares this run's log path.
    ///
    /// Errors with `ConfigError::UnknownTask` on the first name the run does
    /// not declare.
    pub fn subgraph<I, N>(&self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = N>,
        N: Into<TaskName>,
    {
        let mut selection = Vec::new();
        for name in names {
            let name = name.into();
            if !self.tasks.contains(&name) {
                return Err(ConfigError::UnknownTask {
                    name: name.0,
                    declared: self.declared_list(),
                });
            }
            if !selection.contains(&name) {
                selection.push(name);
            }
        }
        Ok(Self {
            root: self.root.clone(),
            abs_log_path: self.abs_log_path.clone(),
            tasks: self.tasks.clone(),
            selection: Some(selection),
        })
    }

    /// Create the log file's parent directory if it does not exist yet.
    pub fn ensure_log_dir(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.abs_log_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
            }
        }
        Ok(())
    }

    fn declared_list(&self) -> String {
        if self.tasks.is_empty() {
            return "none".to_string();
        }
        self.tasks
            .iter()
            .map(|t| t.0.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RunContext {
        RunContext::new("/work", "/work/.flo/flo.log")
            .with_tasks(["build", "test", "deploy"].map(TaskName::from))
    }

    #[test]
    fn subgraph_shares_log_path() {
        let parent = ctx();
        let sub = parent.subgraph(["test"]).unwrap();
        assert_eq!(sub.abs_log_path(), parent.abs_log_path());
        assert_eq!(sub.root(), parent.root());
        assert!(sub.is_subgraph());
        assert!(!parent.is_subgraph());
        assert_eq!(sub.selection(), Some(&[TaskName::from("test")][..]));
    }

    #[test]
    fn subgraph_dedups_selection() {
        let sub = ctx().subgraph(["build", "build", "test"]).unwrap();
        assert_eq!(sub.selection().unwrap().len(), 2);
    }

    #[test]
    fn subgraph_rejects_unknown_task() {
        let err = ctx().subgraph(["lint"]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTask { ref name, .. } if name == "lint"));
        assert!(err.to_string().contains("build, test, deploy"));
    }

    #[test]
    fn task_name_display() {
        assert_eq!(TaskName::from("build").to_string(), "build");
    }
}
