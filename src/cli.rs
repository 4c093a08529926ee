// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Unknown flags are dropped before `clap` sees them, and any leftover parse
//! error is ignored. `--help` still prints usage and exits 0.

use std::ffi::OsString;

use clap::{CommandFactory, Parser, ValueEnum};

/// Command-line arguments for `gitter`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "gitter",
    version,
    about = "Update, build and publish locally-built programs.",
    long_about = None,
    ignore_errors = true
)]
pub struct CliArgs {
    /// Show the output of the update/build commands (git, compiler, wget...).
    #[arg(long = "show-std", visible_alias = "std")]
    pub show_std: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub verbose: bool,

    /// Path to the config file (TOML).
    ///
    /// Default: `$XDG_CONFIG_HOME/gitter/config.toml`, created empty if missing.
    #[arg(long = "config-path", alias = "config_path", value_name = "PATH")]
    pub config_path: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `--verbose`, `GITTER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print every program with its resolved paths, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the process arguments, ignoring flags `gitter` doesn't know.
pub fn parse() -> CliArgs {
    parse_from(std::env::args_os())
}

/// Same as [`parse`], for an explicit argument list (first item is the binary).
pub fn parse_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    CliArgs::parse_from(retain_known_flags(args))
}

/// Drop `--flags` that no argument of [`CliArgs`] declares.
fn retain_known_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = CliArgs::command();
    let mut known: Vec<(String, bool)> = vec![
        ("--help".to_string(), false),
        ("-h".to_string(), false),
        ("--version".to_string(), false),
        ("-V".to_string(), false),
    ];
    for arg in cmd.get_arguments() {
        let takes_value = arg.get_action().takes_values();
        if let Some(long) = arg.get_long() {
            known.push((format!("--{long}"), takes_value));
        }
        for alias in arg.get_all_aliases().unwrap_or_default() {
            known.push((format!("--{alias}"), takes_value));
        }
    }

    let mut kept = Vec::new();
    let mut expect_value = false;
    for (idx, raw) in args.into_iter().map(Into::into).enumerate() {
        if idx == 0 || expect_value {
            expect_value = false;
            kept.push(raw);
            continue;
        }

        let text = raw.to_string_lossy();
        if !text.starts_with('-') {
            kept.push(raw);
            continue;
        }

        let (name, inline_value) = match text.split_once('=') {
            Some((name, _)) => (name.to_string(), true),
            None => (text.to_string(), false),
        };
        if let Some((_, takes_value)) = known.iter().find(|(flag, _)| *flag == name) {
            expect_value = *takes_value && !inline_value;
            kept.push(raw);
        }
    }
    kept
}
