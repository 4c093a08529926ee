use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gitter::console::Console;
use gitter::errors::{GitterError, Result};
use gitter::exec::{CommandExecutor, ExecResult};

/// One recorded `run` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub working_dir: PathBuf,
}

#[derive(Debug, Clone)]
enum Scripted {
    Result(ExecResult),
    LaunchFailure,
}

/// A fake executor that:
/// - records every command with its working directory
/// - returns scripted results per command line (success by default)
/// - honours the console contract (separator on non-zero exit).
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    script: HashMap<String, Scripted>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `exit_code` and print `stderr`.
    pub fn fail(mut self, command: &str, exit_code: i32, stderr: &str) -> Self {
        self.script.insert(
            command.to_string(),
            Scripted::Result(ExecResult::failed(exit_code, stderr)),
        );
        self
    }

    /// Make `command` fail to start, like a missing working directory.
    pub fn fail_launch(mut self, command: &str) -> Self {
        self.script
            .insert(command.to_string(), Scripted::LaunchFailure);
        self
    }

    /// Shared handle to the recorded calls.
    pub fn calls(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.command.clone())
            .collect()
    }
}

impl CommandExecutor for FakeExecutor {
    fn run<'a>(
        &'a mut self,
        command: &'a str,
        working_dir: &'a Path,
        console: &'a mut Console,
        _echo: bool,
    ) -> Pin<Box<dyn Future<Output = Result<ExecResult>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(Call {
                command: command.to_string(),
                working_dir: working_dir.to_path_buf(),
            });

            match self.script.get(command) {
                None => Ok(ExecResult::success()),
                Some(Scripted::Result(result)) => {
                    if !result.is_success() {
                        console.blank()?;
                        console.separator()?;
                    }
                    Ok(result.clone())
                }
                Some(Scripted::LaunchFailure) => Err(GitterError::Launch {
                    command: command.to_string(),
                    dir: working_dir.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
                }),
            }
        })
    }
}
