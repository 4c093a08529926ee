// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] runs a single shell command line with
//!   `tokio::process::Command`, capturing its output.
//! - [`backend`] provides the `CommandExecutor` trait the runner uses, and
//!   the production `ShellExecutor`.

pub mod backend;
pub mod command;

pub use backend::{CommandExecutor, ExecResult, ShellExecutor};
pub use command::run_shell_command;
