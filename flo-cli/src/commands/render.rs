//! `flo render` — render a template to stdout.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use flo_templates::{render_from_dir, render_from_file, render_from_string};

/// Arguments for `flo render`.
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["path", "builtin", "string"]),
))]
pub struct RenderArgs {
    /// Template file to render; includes resolve next to it.
    pub path: Option<PathBuf>,

    /// Name of a built-in template.
    #[arg(long)]
    pub builtin: Option<String>,

    /// Inline template text.
    #[arg(long)]
    pub string: Option<String>,

    /// Context value as KEY=VALUE; repeatable.
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let ctx: BTreeMap<String, String> = self.vars.into_iter().collect();
        tracing::debug!(vars = ctx.len(), "rendering template");

        let rendered = if let Some(text) = &self.string {
            render_from_string(text, &ctx)?
        } else if let Some(name) = &self.builtin {
            render_from_file(name, &ctx)?
        } else {
            let path = self.path.context("provide a template path, --builtin or --string")?;
            let (dir, name) = split_template_path(&path)?;
            render_from_dir(&dir, &name, &ctx)?
        };

        println!("{rendered}");
        Ok(())
    }
}

fn split_template_path(path: &Path) -> Result<(PathBuf, String)> {
    let name = path
        .file_name()
        .with_context(|| format!("{} is not a file path", path.display()))?
        .to_string_lossy()
        .into_owned();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, name))
}

fn parse_var(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
