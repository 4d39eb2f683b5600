//! Console artist without progress display.

use std::io::Write;

use console::Term;
use log::{debug, trace};

use super::{erase, line_count, Artist};
use crate::options::ClearMode;
use crate::Result;

/// Renders a table to the console, repainting it in place on every frame.
///
/// Writes to any [`Write`]; [`Console::stdout`] targets the process
/// standard output.
#[derive(Debug)]
pub struct Console<W: Write = Term> {
    out: W,
    clear: ClearMode,
    /// Lines occupied by the last frame; None until `init`
    lines: Option<usize>,
}

impl Console<Term> {
    /// Console artist writing to standard output.
    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }
}

impl Default for Console<Term> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Console<W> {
    /// Console artist writing to `out`, erasing incrementally.
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: ClearMode::default(),
            lines: None,
        }
    }

    /// Set how the previous frame is erased.
    pub fn clear(mut self, mode: ClearMode) -> Self {
        self.clear = mode;
        self
    }

    /// Lines occupied by the last frame drawn (0 before any frame).
    pub fn lines_drawn(&self) -> usize {
        self.lines.unwrap_or(0)
    }

    /// Borrow the output stream.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the artist, returning the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Artist for Console<W> {
    fn init(&mut self, n_rows: Option<usize>) {
        debug!("console session started (expected rows: {:?})", n_rows);
        self.lines = Some(0);
    }

    fn render(&mut self, frame: &str) -> Result<()> {
        let previous = match self.lines {
            Some(lines) => lines,
            None => {
                self.init(None);
                0
            }
        };

        erase(&mut self.out, self.clear, previous)?;
        self.out.write_all(frame.as_bytes())?;
        self.out.write_all(b"\n")?;

        let lines = line_count(frame);
        self.lines = Some(lines);
        trace!("drew frame of {} lines over {} lines", lines, previous);

        self.out.flush()?;
        Ok(())
    }
}
