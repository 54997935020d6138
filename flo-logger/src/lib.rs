//! # flo-logger
//!
//! Run-scoped output that goes to the terminal in color and to the run's log
//! file as plain text.
//!
//! ```rust,no_run
//! use flo_core::RunContext;
//!
//! fn announce(ctx: &RunContext) -> Result<(), flo_logger::LoggerError> {
//!     let logger = flo_logger::configure(ctx)?;
//!     logger.info("\x1b[32mstarting\x1b[0m")?;
//!     Ok(())
//! }
//! ```
//!
//! The first [`configure`] call in a process wins: later calls, including
//! ones made for a subgraph of the run, get the same logger back and never
//! truncate another file.

pub mod colors;
mod error;
pub mod logger;
pub mod registry;

pub use colors::colorless;
pub use error::LoggerError;
pub use logger::{RunLogger, Terminal};
pub use registry::{configure, get, global, LoggerRegistry};
