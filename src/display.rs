// src/display.rs

//! Output seam for rendered text.
//!
//! The `Renderer` never writes to stdout directly. It hands complete lines
//! to a `Driver`, which decides where they go. `ConsoleDriver` writes them
//! to any `io::Write` (stdout in the binary and the plugin entry point);
//! tests substitute a recording driver.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::trace;

/// Receives the output of a render pass one line at a time.
pub trait Driver {
    /// Emits one complete line. `line` never contains a newline.
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Flushes everything emitted so far to the underlying surface.
    fn present(&mut self) -> Result<()>;
}

/// Writes lines, newline-terminated, to an `io::Write`.
pub struct ConsoleDriver<W: Write> {
    out: W,
    lines_written: usize,
}

impl ConsoleDriver<io::Stdout> {
    /// A driver on the process's standard output.
    pub fn stdout() -> Self {
        ConsoleDriver::new(io::stdout())
    }
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(out: W) -> Self {
        ConsoleDriver {
            out,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Driver for ConsoleDriver<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)
            .with_context(|| format!("ConsoleDriver: Failed to write line {}", self.lines_written))?;
        self.lines_written += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        trace!("ConsoleDriver: Flushing after {} lines", self.lines_written);
        self.out
            .flush()
            .context("ConsoleDriver: Failed to flush output")
    }
}
