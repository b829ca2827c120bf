use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::Result;
use crate::scan::LineScanner;

/// One interactive session: an input stream plus separate prompt and error sinks.
pub struct Console<R, W, E> {
    scanner: LineScanner<R>,
    out: W,
    err: E,
}

impl<R, W, E> Console<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            scanner: LineScanner::new(input),
            out,
            err,
        }
    }

    /// Writes `text` without a trailing newline and flushes so the prompt is visible
    /// before the read blocks.
    pub fn prompt(&mut self, text: impl Display) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn log_error(&mut self, message: impl Display) -> Result<()> {
        let text = message.to_string();
        tracing::debug!(error = text.as_str(), "input rejected");
        writeln!(self.err, "Error: {text}")?;
        self.err.flush()?;
        Ok(())
    }

    pub fn read_line(&mut self, expecting: &'static str) -> Result<&str> {
        self.scanner.next_line(expecting)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.scanner.into_inner(), self.out, self.err)
    }
}
