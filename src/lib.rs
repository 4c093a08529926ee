// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod publish;
pub mod runner;

use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_from_path, select_config_path};
use crate::console::Console;
use crate::errors::{GitterError, Result};
use crate::exec::ShellExecutor;
use crate::fs::RealFileSystem;
use crate::runner::{run_all, RunOptions, RunSummary};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config discovery (bootstrapping the default file if needed)
/// - home directory lookup
/// - the shell executor and real filesystem
/// - the sequential runner
pub async fn run(args: CliArgs) -> Result<RunSummary> {
    let home = home_dir()?;
    let fs = RealFileSystem;

    let config_path =
        select_config_path(&fs, args.config_path.as_deref(), &home, default_config_path)?;
    let cfg = load_from_path(&fs, &config_path)?;
    info!(
        config = %config_path.display(),
        programs = cfg.program.len(),
        "loaded configuration"
    );

    let options = RunOptions::from(&args);
    let mut executor = ShellExecutor::new();
    let mut console = Console::stdio();

    let summary = run_all(&cfg, &home, &options, &mut executor, &fs, &mut console).await?;

    let failed: Vec<&str> = summary.failed_apps().map(|a| a.name.as_str()).collect();
    if !failed.is_empty() {
        warn!(?failed, "some programs had failing stages");
    }

    Ok(summary)
}

fn home_dir() -> Result<String> {
    let home = dirs::home_dir().ok_or_else(|| {
        GitterError::ConfigError("could not determine the home directory".to_string())
    })?;
    home_to_string(home)
}

/// Home directory as text for `~` expansion. Non-UTF-8 homes are rejected
/// rather than lossily rewritten.
fn home_to_string(home: PathBuf) -> Result<String> {
    home.into_os_string().into_string().map_err(|raw| {
        GitterError::ConfigError(format!("home directory {:?} is not valid UTF-8", raw))
    })
}
