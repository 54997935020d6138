//! `flo init` — write a starter `flo.yaml`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use flo_core::{CONFIG_FILE_NAME, DEFAULT_LOG_PATH};
use flo_templates::{context, render_from_file};

/// Arguments for `flo init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write flo.yaml into.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Log path to record in the new config.
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    pub log: String,

    /// Overwrite an existing flo.yaml.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let target = self.dir.join(CONFIG_FILE_NAME);
        if target.exists() && !self.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                target.display()
            );
        }

        let project = std::path::absolute(&self.dir)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
        let mut rendered = render_from_file(
            "flo.yaml.j2",
            context! { project => project, log => self.log },
        )
        .context("render starter config")?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create {}", self.dir.display()))?;
        std::fs::write(&target, rendered)
            .with_context(|| format!("write {}", target.display()))?;
        println!("{} wrote {}", "✓".green(), target.display());
        Ok(())
    }
}
