//! Streaming driver: pull rows, grow the table, repaint.
//!
//! The driver owns the table buffer. For every row pulled from the source it
//! appends the row, formats the whole buffer and hands the frame to an
//! [`Artist`]. A header-only frame is drawn before the first row so the
//! table appears immediately, even when the first row is slow to compute.

use std::convert::Infallible;

use log::debug;

use crate::artist::Artist;
use crate::cell::Row;
use crate::error::LazyTableError;
use crate::options::{FormatOptions, TableFormat};
use crate::output::Formatter;
use crate::Result;

/// Options for [`stream`] and [`try_stream`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamOptions {
    /// Column headers
    pub headers: Vec<String>,
    /// Expected number of rows (None = unknown or unbounded)
    pub n_rows: Option<usize>,
    /// Built-in formatter configuration
    pub format: FormatOptions,
}

impl StreamOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set column headers.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the expected number of rows.
    pub fn n_rows(mut self, n_rows: usize) -> Self {
        self.n_rows = Some(n_rows);
        self
    }

    /// Set the table layout.
    pub fn table_format(mut self, format: TableFormat) -> Self {
        self.format = self.format.format(format);
        self
    }

    /// Use a fixed number of digits after the point for floats.
    pub fn float_precision(mut self, digits: usize) -> Self {
        self.format = self.format.float_precision(digits);
        self
    }
}

/// Stream an infallible row source to `artist`.
///
/// Returns the complete table buffer once the source is exhausted. An
/// unbounded source never returns.
///
/// # Example
///
/// ```rust
/// use lazytablelib::{row, stream, Console, StreamOptions};
///
/// let fib = (0..5u64).scan((0u64, 1u64), |state, n| {
///     let value = state.0;
///     *state = (state.1, state.0 + state.1);
///     Some(row![n, value])
/// });
///
/// let mut artist = Console::new(Vec::new());
/// let options = StreamOptions::new().headers(["N", "F_N"]).n_rows(5);
/// let rows = stream(fib, &mut artist, &options).unwrap();
/// assert_eq!(rows.len(), 5);
/// ```
pub fn stream<I, A>(rows: I, artist: &mut A, options: &StreamOptions) -> Result<Vec<Row>>
where
    I: IntoIterator,
    I::Item: Into<Row>,
    A: Artist + ?Sized,
{
    try_stream(
        rows.into_iter().map(|row| Ok::<Row, Infallible>(row.into())),
        artist,
        options,
    )
}

/// Stream a fallible row source to `artist`.
///
/// The first source error stops the stream and is returned as
/// [`LazyTableError::RowSource`]; frames already drawn stay on screen.
pub fn try_stream<I, E, A>(rows: I, artist: &mut A, options: &StreamOptions) -> Result<Vec<Row>>
where
    I: IntoIterator<Item = std::result::Result<Row, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    A: Artist + ?Sized,
{
    stream_with(rows, artist, options.n_rows, &options.headers, &options.format)
}

/// Stream with a caller-supplied formatter.
///
/// This is the driver loop behind [`stream`] and [`try_stream`]:
/// `init(n_rows)`, a header-only frame, then one frame per row.
/// Formatter and artist errors are returned unchanged.
pub fn stream_with<I, E, A, F>(
    rows: I,
    artist: &mut A,
    n_rows: Option<usize>,
    headers: &[String],
    formatter: &F,
) -> Result<Vec<Row>>
where
    I: IntoIterator<Item = std::result::Result<Row, E>>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    A: Artist + ?Sized,
    F: Formatter + ?Sized,
{
    artist.init(n_rows);

    let mut buffer: Vec<Row> = Vec::new();
    artist.render(&formatter.format(&buffer, headers)?)?;

    for row in rows {
        let row = row.map_err(|e| LazyTableError::RowSource(e.into()))?;
        buffer.push(row);
        let frame = formatter.format(&buffer, headers)?;
        artist.render(&frame)?;
    }

    debug!("stream finished after {} rows", buffer.len());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::{Console, ConsoleWithProgress, ERASE_LINE};
    use crate::row;

    /// Records every call instead of drawing.
    #[derive(Default)]
    struct Recorder {
        inits: Vec<Option<usize>>,
        frames: Vec<String>,
    }

    impl Artist for Recorder {
        fn init(&mut self, n_rows: Option<usize>) {
            self.inits.push(n_rows);
        }

        fn render(&mut self, frame: &str) -> Result<()> {
            self.frames.push(frame.to_string());
            Ok(())
        }
    }

    fn squares(n: u64) -> impl Iterator<Item = Row> {
        (1..=n).map(|i| row![i, i * i])
    }

    #[test]
    fn test_stream_draws_header_then_each_row() {
        let mut recorder = Recorder::default();
        let options = StreamOptions::new().headers(["I", "Sq"]).n_rows(3);
        let rows = stream(squares(3), &mut recorder, &options).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(recorder.inits, vec![Some(3)]);
        assert_eq!(recorder.frames.len(), 4);
        assert_eq!(recorder.frames[0], "I  Sq\n-  --");
        assert!(recorder.frames[3].ends_with("3   9"));
    }

    #[test]
    fn test_stream_frames_grow_monotonically() {
        let mut recorder = Recorder::default();
        let options = StreamOptions::new().headers(["I", "Sq"]);
        stream(squares(4), &mut recorder, &options).unwrap();

        for (index, frame) in recorder.frames.iter().enumerate() {
            assert_eq!(frame.lines().count(), 2 + index);
        }
    }

    #[test]
    fn test_stream_unknown_total_passes_none() {
        let mut recorder = Recorder::default();
        stream(squares(1), &mut recorder, &StreamOptions::new()).unwrap();
        assert_eq!(recorder.inits, vec![None]);
    }

    #[test]
    fn test_stream_takes_prefix_of_unbounded_source() {
        let mut recorder = Recorder::default();
        let naturals = (0u64..).map(|i| row![i]);
        let options = StreamOptions::new().headers(["N"]);
        let rows = stream(naturals.take(50), &mut recorder, &options).unwrap();
        assert_eq!(rows.len(), 50);
        assert_eq!(recorder.frames.len(), 51);
    }

    #[test]
    fn test_try_stream_propagates_source_error() {
        let source: Vec<std::result::Result<Row, std::io::Error>> = vec![
            Ok(row![1]),
            Err(std::io::Error::new(std::io::ErrorKind::Other, "solver diverged")),
            Ok(row![3]),
        ];
        let mut recorder = Recorder::default();
        let options = StreamOptions::new().headers(["N"]);
        let err = try_stream(source, &mut recorder, &options).unwrap_err();

        assert!(matches!(err, LazyTableError::RowSource(_)));
        assert!(err.to_string().contains("solver diverged"));
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn test_stream_propagates_formatter_error() {
        let rows = vec![row![1, 2], row![3]];
        let mut recorder = Recorder::default();
        let options = StreamOptions::new().headers(["A", "B"]);
        let err = stream(rows, &mut recorder, &options).unwrap_err();

        assert!(matches!(err, LazyTableError::RowArity { row: 1, .. }));
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn test_stream_with_custom_formatter() {
        let mut recorder = Recorder::default();
        let count = |rows: &[Row], _: &[String]| -> Result<String> { Ok(rows.len().to_string()) };
        let source = squares(2).map(Ok::<Row, Infallible>);
        stream_with(source, &mut recorder, None, &[], &count).unwrap();

        assert_eq!(recorder.frames, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_stream_to_console_erases_each_previous_frame() {
        let mut console = Console::new(Vec::new());
        let options = StreamOptions::new().headers(["I", "Sq"]);
        stream(squares(2), &mut console, &options).unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        // header frame: 2 lines, then 3, then 4
        assert_eq!(out.matches(ERASE_LINE).count(), 2 + 3);
        assert!(out.ends_with("1   1\n2   4\n"));
    }

    #[test]
    fn test_stream_progress_ends_full() {
        let mut artist = ConsoleWithProgress::new(Vec::new()).width(8);
        let options = StreamOptions::new().headers(["I", "Sq"]).n_rows(5);
        stream(squares(5), &mut artist, &options).unwrap();

        let out = String::from_utf8(artist.into_inner()).unwrap();
        let last = out.lines().last().unwrap();
        assert!(last.starts_with("|████████| 5/5 ["));
    }

    #[test]
    fn test_stream_new_session_starts_fresh() {
        let mut recorder = Recorder::default();
        let options = StreamOptions::new().headers(["I", "Sq"]);
        stream(squares(3), &mut recorder, &options).unwrap();
        let rows = stream(squares(1), &mut recorder, &options).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(recorder.inits.len(), 2);
    }

    #[test]
    fn test_stream_options_builder() {
        let options = StreamOptions::new()
            .headers(vec!["A".to_string()])
            .n_rows(7)
            .table_format(TableFormat::Grid)
            .float_precision(2);

        assert_eq!(options.headers, vec!["A"]);
        assert_eq!(options.n_rows, Some(7));
        assert_eq!(options.format.format, TableFormat::Grid);
        assert_eq!(options.format.float_precision, Some(2));
    }
}
