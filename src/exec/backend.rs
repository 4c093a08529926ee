// src/exec/backend.rs

//! Pluggable command executor abstraction.
//!
//! The runner talks to a `CommandExecutor` instead of spawning processes
//! itself. Production code uses [`ShellExecutor`]; tests can provide an
//! implementation that records commands and returns scripted results.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::console::Console;
use crate::errors::Result;

use super::command::run_shell_command;

/// Outcome of one stage command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Process exit code; `-1` when the process was killed by a signal.
    pub exit_code: i32,
    /// Captured stderr. Always empty when `exit_code == 0`.
    pub stderr: String,
}

impl ExecResult {
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            stderr: String::new(),
        }
    }

    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how stage commands are executed.
///
/// Contract for implementations:
/// - a non-zero exit is returned as data, never as `Err`;
/// - on a non-zero exit [`Console::blank`] and [`crate::console::SEPARATOR`] are
///   written to the console, whether or not `echo` is set;
/// - with `echo`, captured stdout/stderr are copied to the console;
/// - `Err` means the command could not be started at all.
pub trait CommandExecutor: Send {
    fn run<'a>(
        &'a mut self,
        command: &'a str,
        working_dir: &'a Path,
        console: &'a mut Console,
        echo: bool,
    ) -> Pin<Box<dyn Future<Output = Result<ExecResult>> + Send + 'a>>;
}

/// Real executor: runs each command through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ShellExecutor {
    fn run<'a>(
        &'a mut self,
        command: &'a str,
        working_dir: &'a Path,
        console: &'a mut Console,
        echo: bool,
    ) -> Pin<Box<dyn Future<Output = Result<ExecResult>> + Send + 'a>> {
        Box::pin(run_shell_command(command, working_dir, console, echo))
    }
}
