//! Console artist with a progress line under the table.

use std::io::Write;
use std::time::{Duration, Instant};

use console::Term;
use log::{debug, trace};

use super::{erase, line_count, Artist};
use crate::options::ClearMode;
use crate::Result;

/// Default progress bar width in characters.
pub const DEFAULT_WIDTH: usize = 32;

const FILLED: char = '█';
const UNFILLED: char = ' ';

/// Lines the progress block adds below the table: separator + progress.
const PROGRESS_LINES: usize = 2;

/// Per-session state, created by `init`.
#[derive(Debug, Clone, Copy)]
struct Session {
    lines: usize,
    calls: usize,
    total: Option<usize>,
    start: Instant,
}

impl Session {
    fn new(total: Option<usize>) -> Self {
        Self {
            lines: 0,
            calls: 0,
            total,
            start: Instant::now(),
        }
    }
}

/// Renders a table to the console along with a progress bar.
///
/// The progress line reads `|<bar>| <calls>/<total> [<elapsed>s, <rate>it/s]`
/// where `calls` counts the frames drawn before this one. With no expected
/// row count the bar is replaced by a bare counter.
#[derive(Debug)]
pub struct ConsoleWithProgress<W: Write = Term> {
    out: W,
    clear: ClearMode,
    width: usize,
    session: Option<Session>,
}

impl ConsoleWithProgress<Term> {
    /// Progress artist writing to standard output.
    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }
}

impl Default for ConsoleWithProgress<Term> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> ConsoleWithProgress<W> {
    /// Progress artist writing to `out`, erasing incrementally, with a
    /// bar of [`DEFAULT_WIDTH`] characters.
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear: ClearMode::default(),
            width: DEFAULT_WIDTH,
            session: None,
        }
    }

    /// Set how the previous frame is erased.
    pub fn clear(mut self, mode: ClearMode) -> Self {
        self.clear = mode;
        self
    }

    /// Set the progress bar width in characters.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Lines occupied by the last frame drawn, progress block included.
    pub fn lines_drawn(&self) -> usize {
        self.session.map(|s| s.lines).unwrap_or(0)
    }

    /// Frames drawn since the last `init`.
    pub fn calls(&self) -> usize {
        self.session.map(|s| s.calls).unwrap_or(0)
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

impl<W: Write> Artist for ConsoleWithProgress<W> {
    fn init(&mut self, n_rows: Option<usize>) {
        debug!("progress session started (expected rows: {:?})", n_rows);
        self.session = Some(Session::new(n_rows));
    }

    fn render(&mut self, frame: &str) -> Result<()> {
        let mut session = match self.session {
            Some(session) => session,
            None => Session::new(None),
        };

        erase(&mut self.out, self.clear, session.lines)?;
        self.out.write_all(frame.as_bytes())?;
        self.out.write_all(b"\n\n")?;

        let index = session.calls;
        let line = progress_line(
            index,
            session.total,
            self.width,
            session.start.elapsed(),
        );
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;

        session.lines = line_count(frame) + PROGRESS_LINES;
        trace!("drew frame {} ({} lines)", index, session.lines);
        session.calls = index + 1;
        self.session = Some(session);

        self.out.flush()?;
        Ok(())
    }
}

/// Format the progress line for `calls` completed frames.
///
/// The filled share of the bar is `calls / total`, clamped to the full
/// width. A zero total counts as complete. The rate is zero until a frame
/// has completed and some time has passed.
fn progress_line(calls: usize, total: Option<usize>, width: usize, elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    let rate = if calls == 0 || secs <= 0.0 {
        0.0
    } else {
        calls as f64 / secs
    };
    let stats = format!("[{:.2}s, {:.2}it/s]", secs, rate);

    match total {
        Some(total) => {
            let filled = filled_segments(calls, total, width);
            let bar: String = std::iter::repeat(FILLED)
                .take(filled)
                .chain(std::iter::repeat(UNFILLED).take(width - filled))
                .collect();
            format!("|{}| {}/{} {}", bar, calls, total, stats)
        }
        None => format!("{} {}", calls, stats),
    }
}

/// Filled share of a `width`-wide bar, `floor(width * calls / total)`
/// clamped to `width`. A zero total counts as complete.
fn filled_segments(calls: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return width;
    }
    let filled = width as u128 * calls as u128 / total as u128;
    filled.min(width as u128) as usize
}
