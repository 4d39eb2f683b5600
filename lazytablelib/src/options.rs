//! Configuration types for table formatting and rendering.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LazyTableError;

/// Text layout used when formatting a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Columns separated by two spaces, no rules
    Plain,
    /// Like plain, with a dashed rule under the header
    #[default]
    Simple,
    /// Boxed cells with `+`, `-`, `|` and `=` under the header
    Grid,
    /// Markdown table with alignment colons in the header rule
    Pipe,
    /// Markdown table with a plain dashed header rule
    Github,
}

impl TableFormat {
    /// All formats, in the order they are listed in help text
    pub const ALL: [TableFormat; 5] = [
        TableFormat::Plain,
        TableFormat::Simple,
        TableFormat::Grid,
        TableFormat::Pipe,
        TableFormat::Github,
    ];

    /// Lowercase name accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            TableFormat::Plain => "plain",
            TableFormat::Simple => "simple",
            TableFormat::Grid => "grid",
            TableFormat::Pipe => "pipe",
            TableFormat::Github => "github",
        }
    }
}

impl FromStr for TableFormat {
    type Err = LazyTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(TableFormat::Plain),
            "simple" => Ok(TableFormat::Simple),
            "grid" => Ok(TableFormat::Grid),
            "pipe" => Ok(TableFormat::Pipe),
            "github" | "gfm" => Ok(TableFormat::Github),
            _ => Err(LazyTableError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for the built-in table formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Table layout
    pub format: TableFormat,
    /// Digits after the point for float cells (None = general format)
    pub float_precision: Option<usize>,
}

impl FormatOptions {
    /// Create default options (simple layout, general float format).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table layout.
    pub fn format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Use a fixed number of digits after the point for floats.
    pub fn float_precision(mut self, digits: usize) -> Self {
        self.float_precision = Some(digits);
        self
    }
}

/// How an artist erases the previously drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClearMode {
    /// Move up over each line of the previous frame and clear it
    #[default]
    Incremental,
    /// Clear the whole screen before every frame
    Full,
}

impl ClearMode {
    /// `Full` when `clear` is set, `Incremental` otherwise
    pub fn from_flag(clear: bool) -> Self {
        if clear {
            ClearMode::Full
        } else {
            ClearMode::Incremental
        }
    }
}
