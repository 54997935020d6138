//! `flo tee` — forward stdin through the run logger.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use flo_core::{RunContext, CONFIG_FILE_NAME};

/// Arguments for `flo tee`.
#[derive(Args, Debug)]
pub struct TeeArgs {
    /// Run configuration that names the log file.
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Restrict the run to these tasks; the log file is shared with the full run.
    #[arg(long = "only", value_name = "TASK")]
    pub only: Vec<String>,
}

impl TeeArgs {
    pub fn run(self) -> Result<()> {
        let run = RunContext::from_config_file(&self.config)
            .with_context(|| format!("load {}", self.config.display()))?;
        let ctx = if self.only.is_empty() {
            run
        } else {
            run.subgraph(self.only.iter().map(String::as_str))?
        };
        ctx.ensure_log_dir()?;
        tracing::debug!(
            log = %ctx.abs_log_path().display(),
            selection = ?ctx.selection(),
            "forwarding stdin to run log"
        );

        let logger = flo_logger::configure(&ctx)?;
        let forwarded = logger.forward(io::stdin().lock())?;
        logger.close()?;

        // stdout is the tee'd stream; status goes to stderr.
        eprintln!(
            "{} {} bytes logged to {}",
            "✓".green(),
            forwarded,
            logger.path().display()
        );
        Ok(())
    }
}
