// src/lib.rs

pub mod cli;
pub mod color;
pub mod config;
pub mod console;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::color::ColorAllocator;
use crate::config::{load_and_validate_with_fs, CommandSpec, ConfigFile};
use crate::console::{Console, StdConsole};
use crate::engine::{Coordinator, RunSummary};
use crate::errors::Result;
use crate::exec::{ShellExecutor, TaskExecutor};
use crate::fs::{FileSystem, RealFileSystem};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the shell executor writing to the real console
/// - the fan-out coordinator
///
/// A config that cannot be read or parsed is the only error; failed
/// commands are part of the returned summary.
pub async fn run(args: CliArgs) -> Result<RunSummary> {
    let config_path = PathBuf::from(&args.config);

    if args.dry_run {
        let cfg = config::load_and_validate(&config_path)?;
        print_dry_run(&config_path, &cfg);
        return Ok(RunSummary::default());
    }

    let console: Arc<dyn Console> = Arc::new(StdConsole);
    let executor: Arc<dyn TaskExecutor> = Arc::new(ShellExecutor::new(Arc::clone(&console)));
    run_from_config(&RealFileSystem, &config_path, executor, console).await
}

/// Load the config at `path` through `fs` and run every command in it.
///
/// Nothing is launched unless the config loads successfully.
pub async fn run_from_config(
    fs: &dyn FileSystem,
    path: &Path,
    executor: Arc<dyn TaskExecutor>,
    console: Arc<dyn Console>,
) -> Result<RunSummary> {
    let cfg = load_and_validate_with_fs(fs, path)?;
    Ok(run_commands(cfg.commands, executor, console).await)
}

/// Fan out `specs` with a fresh color palette and wait for all of them.
pub async fn run_commands(
    specs: Vec<CommandSpec>,
    executor: Arc<dyn TaskExecutor>,
    console: Arc<dyn Console>,
) -> RunSummary {
    let palette = Arc::new(ColorAllocator::new());
    Coordinator::new(executor, palette, console).run(specs).await
}

/// Simple dry-run output: print the commands that would run.
fn print_dry_run(path: &Path, cfg: &ConfigFile) {
    println!("pcmd dry-run");
    println!("  config = {}", path.display());
    println!();

    println!("commands ({}):", cfg.len());
    for spec in &cfg.commands {
        println!("  - {}", spec.name);
        println!("      command: {}", spec.command);
    }

    debug!("dry-run complete (no execution)");
}
