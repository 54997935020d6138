//! [`RunLogger`]: one terminal sink, one log-file sink.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use flo_core::RunContext;

use crate::colors::colorless;
use crate::error::LoggerError;

/// Terminal sink type. Stdout in production; tests inject a buffer.
pub type Terminal = Box<dyn Write + Send>;

/// Writes run output to the terminal verbatim and to the run log with escape
/// sequences stripped.
///
/// The log file is opened (and truncated) once, at construction, and is only
/// released by [`RunLogger::close`].
pub struct RunLogger {
    path: PathBuf,
    terminal: Mutex<Terminal>,
    file: Mutex<Option<File>>,
}

impl RunLogger {
    /// Open `ctx`'s log file for writing, truncating it, with stdout as the
    /// terminal sink.
    pub fn new(ctx: &RunContext) -> Result<Self, LoggerError> {
        Self::with_terminal(ctx, Box::new(io::stdout()))
    }

    /// Same as [`RunLogger::new`] with a caller-supplied terminal sink.
    pub fn with_terminal(ctx: &RunContext, terminal: Terminal) -> Result<Self, LoggerError> {
        let path = ctx.abs_log_path().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|source| LoggerError::Open {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), subgraph = ctx.is_subgraph(), "opened run log");
        Ok(Self {
            path,
            terminal: Mutex::new(terminal),
            file: Mutex::new(Some(file)),
        })
    }

    /// Path of the log file this logger owns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        lock(&self.file).is_none()
    }

    /// Write `content` to both sinks: verbatim to the terminal (flushed
    /// immediately), then color-stripped to the log file.
    ///
    /// There is no transaction across the sinks; a file error can surface
    /// after the terminal already shows the content.
    pub fn write(&self, content: &str) -> Result<(), LoggerError> {
        let mut slot = lock(&self.file);
        let Some(file) = slot.as_mut() else {
            return Err(LoggerError::Closed {
                path: self.path.clone(),
            });
        };

        {
            let mut terminal = lock(&self.terminal);
            terminal
                .write_all(content.as_bytes())
                .and_then(|()| terminal.flush())
                .map_err(LoggerError::Terminal)?;
        }

        file.write_all(colorless(content).as_bytes())
            .map_err(|source| LoggerError::File {
                path: self.path.clone(),
                source,
            })
    }

    /// [`RunLogger::write`] with a trailing newline.
    pub fn info(&self, content: &str) -> Result<(), LoggerError> {
        self.write(&format!("{content}\n"))
    }

    /// Decode `content` as UTF-8 and forward it to [`RunLogger::write`].
    pub fn write_bytes(&self, content: &[u8]) -> Result<(), LoggerError> {
        self.write(std::str::from_utf8(content)?)
    }

    /// Forward a byte stream line by line through [`RunLogger::write_bytes`].
    ///
    /// Returns the number of bytes forwarded. A trailing partial line is
    /// forwarded as-is.
    pub fn forward<R: BufRead>(&self, mut reader: R) -> Result<u64, LoggerError> {
        let mut line = Vec::new();
        let mut total = 0u64;
        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(LoggerError::Read)?;
            if n == 0 {
                break;
            }
            self.write_bytes(&line)?;
            total += n as u64;
        }
        Ok(total)
    }

    /// Flush and close the log file. The logger must not be used afterwards;
    /// a second call returns [`LoggerError::AlreadyClosed`].
    pub fn close(&self) -> Result<(), LoggerError> {
        let Some(mut file) = lock(&self.file).take() else {
            return Err(LoggerError::AlreadyClosed {
                path: self.path.clone(),
            });
        };
        file.flush().map_err(|source| LoggerError::File {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "closed run log");
        Ok(())
    }
}

impl fmt::Debug for RunLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLogger")
            .field("path", &self.path)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

// Poisoning is ignored; each guarded value is a single handle.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
