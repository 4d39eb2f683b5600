//! Output for the CLI: live table streaming or a JSON dump.

use std::str::FromStr;

use anyhow::Result;
use lazytablelib::{
    stream, Artist, ClearMode, Console, ConsoleWithProgress, Row, StreamOptions, TableFormat,
};
use log::info;
use serde::Serialize;

/// How the table leaves the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Repaint the table on the terminal as rows arrive
    #[default]
    Table,
    /// Print the finished table as JSON
    Json,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputMode::Table),
            "json" => Ok(OutputMode::Json),
            _ => Err(format!("Unknown output mode: {}", s)),
        }
    }
}

/// Display settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub table_format: TableFormat,
    pub float_precision: Option<usize>,
    pub clear: ClearMode,
    pub show_progress: bool,
    pub width: usize,
    pub output: OutputMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            table_format: TableFormat::default(),
            float_precision: None,
            clear: ClearMode::default(),
            show_progress: false,
            width: lazytablelib::artist::DEFAULT_WIDTH,
            output: OutputMode::default(),
        }
    }
}

impl DisplayConfig {
    /// Artist writing to standard output for this configuration.
    pub fn artist(&self) -> Box<dyn Artist> {
        if self.show_progress {
            Box::new(
                ConsoleWithProgress::stdout()
                    .clear(self.clear)
                    .width(self.width),
            )
        } else {
            Box::new(Console::stdout().clear(self.clear))
        }
    }

    fn stream_options(&self, headers: &[&str], n_rows: Option<usize>) -> StreamOptions {
        let mut options = StreamOptions::new()
            .headers(headers.iter().copied())
            .table_format(self.table_format);
        if let Some(digits) = self.float_precision {
            options = options.float_precision(digits);
        }
        if let Some(n) = n_rows {
            options = options.n_rows(n);
        }
        options
    }
}

/// Finished table as serialized by `--output json`
#[derive(Debug, Serialize)]
struct TableJson<'a> {
    headers: &'a [&'a str],
    rows: &'a [Row],
}

/// Show the rows produced by `rows` according to `config`.
pub fn show<I>(rows: I, headers: &[&str], n_rows: Option<usize>, config: &DisplayConfig) -> Result<()>
where
    I: IntoIterator<Item = Row>,
{
    match config.output {
        OutputMode::Json => {
            let rows: Vec<Row> = rows.into_iter().collect();
            info!("collected {} rows for JSON output", rows.len());
            let json = TableJson {
                headers,
                rows: &rows,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputMode::Table => {
            let mut artist = config.artist();
            let options = config.stream_options(headers, n_rows);
            let rows = stream(rows, &mut artist, &options)?;
            info!("streamed {} rows", rows.len());
        }
    }
    Ok(())
}
