//! flo — run logging and template utilities.
//!
//! # Usage
//!
//! ```text
//! flo init [DIR] [--force] [--log PATH]
//! flo render <PATH | --builtin NAME | --string TEXT> [--var KEY=VALUE]...
//! flo tee [--config flo.yaml] [--only TASK]...
//! ```

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{init::InitArgs, render::RenderArgs, tee::TeeArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "flo",
    version,
    about = "Run logging and template rendering for flo pipelines",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter flo.yaml from the built-in template.
    Init(InitArgs),

    /// Render a template and print the result.
    Render(RenderArgs),

    /// Copy stdin to the terminal and to the run log (colors stripped).
    Tee(TeeArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Tee(args) => args.run(),
    }
}
