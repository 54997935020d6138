//! Logger slot with first-writer-wins configuration.
//!
//! [`LoggerRegistry`] can be owned and passed around explicitly; [`get`] and
//! [`configure`] operate on the single registry returned by [`global`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use flo_core::RunContext;

use crate::error::LoggerError;
use crate::logger::{RunLogger, Terminal};

static GLOBAL: LoggerRegistry = LoggerRegistry::new();

/// Holds at most one [`RunLogger`].
///
/// Once a logger is stored, `configure` hands it back for every later run
/// context, so a subgraph of the run shares its parent's log file instead of
/// truncating a new one.
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    slot: Mutex<Option<Arc<RunLogger>>>,
}

impl LoggerRegistry {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// The configured logger, if any. Never constructs one.
    pub fn get(&self) -> Option<Arc<RunLogger>> {
        self.lock().clone()
    }

    pub fn is_configured(&self) -> bool {
        self.lock().is_some()
    }

    /// Return the stored logger, or open one for `ctx` and store it.
    pub fn configure(&self, ctx: &RunContext) -> Result<Arc<RunLogger>, LoggerError> {
        self.configure_with_terminal(ctx, || Box::new(std::io::stdout()))
    }

    /// [`LoggerRegistry::configure`] with a terminal sink built only when a
    /// new logger is actually opened.
    pub fn configure_with_terminal<F>(
        &self,
        ctx: &RunContext,
        terminal: F,
    ) -> Result<Arc<RunLogger>, LoggerError>
    where
        F: FnOnce() -> Terminal,
    {
        let mut slot = self.lock();
        if let Some(existing) = slot.as_ref() {
            if existing.path() != ctx.abs_log_path() {
                tracing::debug!(
                    active = %existing.path().display(),
                    requested = %ctx.abs_log_path().display(),
                    "run logger already configured; ignoring requested log path"
                );
            }
            return Ok(Arc::clone(existing));
        }
        let logger = Arc::new(RunLogger::with_terminal(ctx, terminal())?);
        *slot = Some(Arc::clone(&logger));
        Ok(logger)
    }

    /// Empty the slot and hand back whatever it held. The caller decides
    /// whether to close it; the next `configure` opens a fresh logger.
    pub fn reset(&self) -> Option<Arc<RunLogger>> {
        self.lock().take()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<RunLogger>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The process-wide registry.
pub fn global() -> &'static LoggerRegistry {
    &GLOBAL
}

/// Process-wide logger, if one has been configured.
pub fn get() -> Option<Arc<RunLogger>> {
    GLOBAL.get()
}

/// Configure the process-wide logger from `ctx`, or return the existing one.
pub fn configure(ctx: &RunContext) -> Result<Arc<RunLogger>, LoggerError> {
    GLOBAL.configure(ctx)
}
