// src/console.rs

//! Human-readable status output.
//!
//! The runner and executor write their status lines through a [`Console`]
//! instead of calling `println!` directly, so tests can capture exactly what
//! a user would see.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Printed after a failing command and after every failure banner.
pub const SEPARATOR: &str = "--------------------!!!--------------------";

/// A pair of output streams: normal status output and error output.
pub struct Console {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self { out, err }
    }

    /// Console bound to the process stdout/stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Console writing into in-memory buffers.
    pub fn captured() -> (Self, CapturedOutput) {
        let captured = CapturedOutput::default();
        let console = Self::new(
            Box::new(captured.out.clone()),
            Box::new(captured.err.clone()),
        );
        (console, captured)
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Two newlines: the gap printed after each program and before a
    /// failing command's separator.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n")
    }

    pub fn separator(&mut self) -> io::Result<()> {
        self.line(SEPARATOR)
    }

    /// Write raw captured stdout of a command.
    pub fn echo_out(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    /// Write raw captured stderr of a command.
    pub fn echo_err(&mut self, text: &str) -> io::Result<()> {
        self.err.write_all(text.as_bytes())?;
        self.err.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

/// Buffers behind a [`Console::captured`] console.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    out: SharedBuffer,
    err: SharedBuffer,
}

impl CapturedOutput {
    pub fn stdout(&self) -> String {
        self.out.contents()
    }

    pub fn stderr(&self) -> String {
        self.err.contents()
    }
}

#[derive(Debug, Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
