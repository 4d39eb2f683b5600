//! # lazytablelib
//!
//! Stream a growing table to the console, repainting it in place as rows
//! become available.
//!
//! ## Overview
//!
//! Long-running computations often produce a table one row at a time:
//! convergence studies, parameter sweeps, benchmarks. This library keeps the
//! whole table on screen while it grows. Each new row triggers a redraw of
//! the full table over the previous one, so column widths stay aligned as
//! values widen.
//!
//! The pieces are:
//!
//! - **Cells and rows**: [`Cell`] scalars (integers, floats, text) and the
//!   [`row!`] macro
//! - **Formatting**: [`format_table`] lays rows out in one of several
//!   [`TableFormat`]s; any [`Formatter`] can replace it
//! - **Artists**: [`Console`] and [`ConsoleWithProgress`] draw frames to any
//!   `std::io::Write`, erasing the previous frame line by line or by clearing
//!   the screen
//! - **Driver**: [`stream`] and [`try_stream`] pull rows from an iterator and
//!   feed frames to an artist
//!
//! ## Example
//!
//! ```rust
//! use lazytablelib::{row, stream, ConsoleWithProgress, StreamOptions};
//!
//! let rows = (1..=4u32).map(|n| row![n, 1.0 / n as f64]);
//!
//! let mut artist = ConsoleWithProgress::new(Vec::new()).width(8);
//! let options = StreamOptions::new().headers(["N", "1/N"]).n_rows(4);
//! let table = stream(rows, &mut artist, &options).unwrap();
//!
//! assert_eq!(table.len(), 4);
//! let out = String::from_utf8(artist.into_inner()).unwrap();
//! assert!(out.contains("| 4/4 ["));
//! ```

pub mod artist;
pub mod cell;
pub mod error;
pub mod options;
pub mod output;
pub mod stream;

pub use artist::{Artist, Console, ConsoleWithProgress};
pub use cell::{Cell, Row};
pub use error::LazyTableError;
pub use options::{ClearMode, FormatOptions, TableFormat};
pub use output::{format_table, Formatter};
pub use stream::{stream, stream_with, try_stream, StreamOptions};

/// Result type for lazytablelib operations
pub type Result<T> = std::result::Result<T, LazyTableError>;
