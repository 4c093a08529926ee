// src/runner.rs

//! The update -> build -> publish pipeline over every configured program.
//!
//! Programs run strictly one after another. A failing stage is reported and
//! the pipeline moves on: the build stage runs even when the update failed,
//! and the next program runs regardless of the previous one.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{AppConfig, ConfigFile};
use crate::console::Console;
use crate::errors::{GitterError, Result};
use crate::exec::CommandExecutor;
use crate::fs::FileSystem;
use crate::paths::ResolvedPaths;
use crate::publish::{publish, PublishOutcome};

/// Options fixed for a whole run, derived once from the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Echo captured command output to the console.
    pub show_output: bool,
    /// Print the plan only.
    pub dry_run: bool,
}

impl From<&CliArgs> for RunOptions {
    fn from(args: &CliArgs) -> Self {
        Self {
            show_output: args.show_std,
            dry_run: args.dry_run,
        }
    }
}

/// One of the two command stages run per program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Update,
    Build,
}

impl Stage {
    fn done(self) -> &'static str {
        match self {
            Stage::Update => "Updated",
            Stage::Build => "Built",
        }
    }

    fn doing(self) -> &'static str {
        match self {
            Stage::Update => "Updating",
            Stage::Build => "Building",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Stage::Update => "update",
            Stage::Build => "build",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageStatus {
    Succeeded,
    Failed { exit_code: i32, stderr: String },
    /// The shell could not be started (e.g. missing source directory).
    LaunchFailed { message: String },
    /// Dry run.
    NotRun,
}

impl StageStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, StageStatus::Failed { .. } | StageStatus::LaunchFailed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStatus {
    Linked { link: PathBuf },
    AlreadyExists { link: PathBuf },
    /// Export path is empty, or dry run.
    Skipped,
    Failed { message: String },
}

/// What happened to one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppReport {
    pub name: String,
    pub update: StageStatus,
    pub build: StageStatus,
    pub publish: PublishStatus,
}

impl AppReport {
    pub fn has_failures(&self) -> bool {
        self.update.is_failure()
            || self.build.is_failure()
            || matches!(self.publish, PublishStatus::Failed { .. })
    }
}

/// Per-program results of a run, in run order.
///
/// Informational only: a run with failures still exits 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub apps: Vec<AppReport>,
}

impl RunSummary {
    pub fn failed_apps(&self) -> impl Iterator<Item = &AppReport> {
        self.apps.iter().filter(|a| a.has_failures())
    }

    pub fn get(&self, name: &str) -> Option<&AppReport> {
        self.apps.iter().find(|a| a.name == name)
    }
}

/// Run every program in `config` in order.
///
/// Only console write errors abort the run; stage, launch and publish
/// failures are reported and recorded in the summary.
pub async fn run_all(
    config: &ConfigFile,
    home: &str,
    options: &RunOptions,
    executor: &mut dyn CommandExecutor,
    fs: &dyn FileSystem,
    console: &mut Console,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if config.is_empty() {
        console.line("The Configuration File Is Empty!")?;
        info!("no programs configured");
        return Ok(summary);
    }

    for (name, app) in config.program.iter() {
        print_entry(console, name, app)?;
        let paths = ResolvedPaths::from_app(app, home);

        let report = if options.dry_run {
            print_plan(console, &paths)?;
            AppReport {
                name: name.clone(),
                update: StageStatus::NotRun,
                build: StageStatus::NotRun,
                publish: PublishStatus::Skipped,
            }
        } else {
            run_app(name, app, &paths, options, executor, fs, console).await?
        };

        console.blank()?;
        summary.apps.push(report);
    }

    console.flush()?;
    Ok(summary)
}

async fn run_app(
    name: &str,
    app: &AppConfig,
    paths: &ResolvedPaths,
    options: &RunOptions,
    executor: &mut dyn CommandExecutor,
    fs: &dyn FileSystem,
    console: &mut Console,
) -> Result<AppReport> {
    let update = run_stage(Stage::Update, name, &app.update, paths, options, executor, console).await?;
    let build = run_stage(Stage::Build, name, &app.build, paths, options, executor, console).await?;
    let publish = publish_app(name, paths, fs, console)?;

    Ok(AppReport {
        name: name.to_string(),
        update,
        build,
        publish,
    })
}

async fn run_stage(
    stage: Stage,
    name: &str,
    command: &str,
    paths: &ResolvedPaths,
    options: &RunOptions,
    executor: &mut dyn CommandExecutor,
    console: &mut Console,
) -> Result<StageStatus> {
    debug!(app = %name, stage = stage.name(), cmd = %command, "running stage");

    match executor
        .run(command, paths.source_dir(), console, options.show_output)
        .await
    {
        Ok(result) if result.is_success() => {
            console.line(format!("{}: {name}", stage.done()))?;
            Ok(StageStatus::Succeeded)
        }
        Ok(result) => {
            warn!(app = %name, stage = stage.name(), exit_code = result.exit_code, "stage failed");
            if !options.show_output {
                failure_banner(console, stage.doing(), name, &result.stderr)?;
            }
            Ok(StageStatus::Failed {
                exit_code: result.exit_code,
                stderr: result.stderr,
            })
        }
        Err(err @ GitterError::Launch { .. }) => {
            warn!(app = %name, stage = stage.name(), error = %err, "stage could not start");
            let message = err.to_string();
            failure_banner(console, stage.doing(), name, &message)?;
            Ok(StageStatus::LaunchFailed { message })
        }
        Err(err) => Err(err),
    }
}

fn publish_app(
    name: &str,
    paths: &ResolvedPaths,
    fs: &dyn FileSystem,
    console: &mut Console,
) -> Result<PublishStatus> {
    let Some(export_dir) = paths.export_dir() else {
        console.line("Provided Export Path Is Empty, Skipping Symlink")?;
        return Ok(PublishStatus::Skipped);
    };

    match publish(fs, paths.binary_path(), &export_dir) {
        Ok(PublishOutcome::Linked { link }) => {
            console.line(format!("Linked {} -> {}", paths.binary, link.display()))?;
            Ok(PublishStatus::Linked { link })
        }
        Ok(PublishOutcome::AlreadyExists { link }) => {
            console.line(format!("Symlink already exists at: {}", link.display()))?;
            Ok(PublishStatus::AlreadyExists { link })
        }
        Err(err) => {
            warn!(app = %name, error = %err, "publish failed");
            let message = err.to_string();
            failure_banner(console, "Linking", name, &message)?;
            Ok(PublishStatus::Failed { message })
        }
    }
}

fn print_entry(console: &mut Console, name: &str, app: &AppConfig) -> std::io::Result<()> {
    console.line(format!("App       : {name}"))?;
    console.line(format!("Path      : {}", app.path))?;
    console.line(format!("Build     : {}", app.build))?;
    console.line(format!("Update    : {}", app.update))?;
    console.line(format!("Export    : {}", app.export))?;
    console.line(format!("BinaryPath: {}", app.binary_path))?;
    console.line(format!("InstallCmd: {}", app.install_cmd))
}

fn print_plan(console: &mut Console, paths: &ResolvedPaths) -> std::io::Result<()> {
    console.line(format!("  source -> {}", paths.source))?;
    if paths.export.is_empty() {
        console.line("  export -> (none, not published)")?;
    } else {
        console.line(format!("  export -> {}", paths.export))?;
    }
    console.line(format!("  binary -> {}", paths.binary))
}

fn failure_banner(console: &mut Console, doing: &str, name: &str, detail: &str) -> std::io::Result<()> {
    console.line(format!("There Was A Problem {doing}: {name}\n{detail}"))?;
    console.separator()
}
