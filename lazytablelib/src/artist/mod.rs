//! Artists: draw successive frames of a table to an output stream.
//!
//! Each frame replaces the previous one in place. Two variants implement
//! the [`Artist`] trait:
//!
//! - **Console**: the table alone
//! - **ConsoleWithProgress**: the table followed by a progress line
//!
//! Both erase the previous frame according to their [`ClearMode`]:
//! `Full` clears the screen, `Incremental` walks back over exactly the
//! lines the previous frame occupied.

mod plain;
mod progress;

pub use self::plain::Console;
pub use self::progress::{ConsoleWithProgress, DEFAULT_WIDTH};

use std::io::{self, Write};

use crate::options::ClearMode;
use crate::Result;

/// Clear the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Erase one line: clear to line start, move to the start of the previous
/// line, clear it.
pub const ERASE_LINE: &str = "\x1b[1K\x1b[F\x1b[K";

/// A display target for table frames.
///
/// Call [`init`](Artist::init) once per session, then
/// [`render`](Artist::render) once per frame. Rendering before `init`
/// behaves as if `init(None)` had been called.
pub trait Artist {
    /// Reset state for a new session. `n_rows` is the expected number of
    /// rows, or `None` when unknown.
    fn init(&mut self, n_rows: Option<usize>);

    /// Erase the previous frame and draw `frame` in its place.
    fn render(&mut self, frame: &str) -> Result<()>;
}

impl<A: Artist + ?Sized> Artist for &mut A {
    fn init(&mut self, n_rows: Option<usize>) {
        (**self).init(n_rows)
    }

    fn render(&mut self, frame: &str) -> Result<()> {
        (**self).render(frame)
    }
}

impl<A: Artist + ?Sized> Artist for Box<A> {
    fn init(&mut self, n_rows: Option<usize>) {
        (**self).init(n_rows)
    }

    fn render(&mut self, frame: &str) -> Result<()> {
        (**self).render(frame)
    }
}

/// Erase `lines` previously drawn lines, or the whole screen.
fn erase<W: Write + ?Sized>(out: &mut W, mode: ClearMode, lines: usize) -> io::Result<()> {
    match mode {
        ClearMode::Full => out.write_all(CLEAR_SCREEN.as_bytes()),
        ClearMode::Incremental => out.write_all(ERASE_LINE.repeat(lines).as_bytes()),
    }
}

/// Number of terminal lines `frame` occupies once written with a trailing
/// newline.
fn line_count(frame: &str) -> usize {
    frame.matches('\n').count() + 1
}
