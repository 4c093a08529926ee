// src/exec/command.rs

//! Running one shell command line to completion.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::console::Console;
use crate::errors::{GitterError, Result};

use super::backend::ExecResult;

/// Build a shell command appropriate for the platform.
pub fn shell_command(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_line);
        c
    }
}

/// Run `command_line` in `working_dir` and wait for it to exit.
///
/// Stdout and stderr are buffered in full before anything is echoed, so a
/// command with unbounded output grows memory without limit. There is no
/// timeout: a hung command hangs the caller.
pub async fn run_shell_command(
    command_line: &str,
    working_dir: &Path,
    console: &mut Console,
    echo: bool,
) -> Result<ExecResult> {
    debug!(
        cmd = %command_line,
        dir = %working_dir.display(),
        "starting command"
    );

    let mut cmd = shell_command(command_line);
    cmd.current_dir(working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = cmd.output().await.map_err(|source| GitterError::Launch {
        command: command_line.to_string(),
        dir: working_dir.to_path_buf(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if echo {
        console.echo_out(&stdout)?;
        console.echo_err(&stderr)?;
    }

    let code = output.status.code().unwrap_or(-1);
    debug!(cmd = %command_line, exit_code = code, "command exited");

    if output.status.success() {
        return Ok(ExecResult::success());
    }

    warn!(
        cmd = %command_line,
        dir = %working_dir.display(),
        exit_code = code,
        "command failed"
    );
    console.blank()?;
    console.separator()?;
    Ok(ExecResult::failed(code, stderr.into_owned()))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::console::SEPARATOR;

    #[tokio::test]
    async fn zero_exit_has_empty_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let (mut console, captured) = Console::captured();

        let result = run_shell_command("echo noise >&2; true", dir.path(), &mut console, false)
            .await
            .unwrap();

        assert_eq!(result, ExecResult::success());
        assert_eq!(captured.stdout(), "");
    }

    #[tokio::test]
    async fn non_zero_exit_returns_code_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let (mut console, captured) = Console::captured();

        let result = run_shell_command(
            "echo out; printf 'fatal: not a git repository\\n' >&2; exit 3",
            dir.path(),
            &mut console,
            false,
        )
        .await
        .unwrap();

        assert_eq!(result.exit_code, 3);
        assert_eq!(result.stderr, "fatal: not a git repository\n");
        assert_eq!(captured.stdout(), format!("\n\n{SEPARATOR}\n"));
    }

    #[tokio::test]
    async fn runs_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "x").unwrap();
        let (mut console, _captured) = Console::captured();

        let result = run_shell_command("test -f marker", dir.path(), &mut console, false)
            .await
            .unwrap();

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn echo_copies_both_streams() {
        let dir = tempfile::tempdir().unwrap();
        let (mut console, captured) = Console::captured();

        run_shell_command("echo built; echo warned >&2", dir.path(), &mut console, true)
            .await
            .unwrap();

        assert_eq!(captured.stdout(), "built\n");
        assert_eq!(captured.stderr(), "warned\n");
    }

    #[tokio::test]
    async fn empty_command_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let (mut console, _captured) = Console::captured();

        let result = run_shell_command("", dir.path(), &mut console, false)
            .await
            .unwrap();

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn missing_working_dir_is_a_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let (mut console, _captured) = Console::captured();

        let err = run_shell_command("true", &missing, &mut console, false)
            .await
            .unwrap_err();

        assert!(matches!(err, GitterError::Launch { .. }));
    }
}
