//! Plain-text table formatting.
//!
//! Turns the table buffer (rows of [`Cell`](crate::Cell)s) plus column headers into a
//! single block of text, the frame that artists draw. The data flow is:
//! 1. Cells are rendered to strings (float precision applied)
//! 2. Column widths and alignments are computed from the rendered strings
//! 3. Lines are assembled according to the [`TableFormat`] layout
//!
//! Numeric columns are right-aligned, everything else is left-aligned.
//! Widths are measured with `console`, so styled (ANSI) cells line up.

use console::{measure_text_width, pad_str, Alignment};

use crate::cell::Row;
use crate::error::LazyTableError;
use crate::options::{FormatOptions, TableFormat};
use crate::Result;

/// Anything that can turn the table buffer into a frame.
///
/// Implemented by [`FormatOptions`] (the built-in formatter) and by any
/// closure `Fn(&[Row], &[String]) -> Result<String>`.
pub trait Formatter {
    /// Format `rows` under `headers` as one block of text.
    fn format(&self, rows: &[Row], headers: &[String]) -> Result<String>;
}

impl Formatter for FormatOptions {
    fn format(&self, rows: &[Row], headers: &[String]) -> Result<String> {
        format_table(rows, headers, self)
    }
}

impl<F> Formatter for F
where
    F: Fn(&[Row], &[String]) -> Result<String>,
{
    fn format(&self, rows: &[Row], headers: &[String]) -> Result<String> {
        self(rows, headers)
    }
}

/// A table with every cell already rendered and measured.
struct Layout {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
    aligns: Vec<Alignment>,
}

/// Format `rows` under `headers` with the given options.
///
/// Every row must have as many cells as there are headers (or, with no
/// headers, as many as the first row); otherwise `RowArity` is returned.
/// An empty header list and empty buffer format to an empty string.
pub fn format_table(rows: &[Row], headers: &[String], options: &FormatOptions) -> Result<String> {
    let layout = Layout::build(rows, headers, options.float_precision)?;
    if layout.widths.is_empty() {
        return Ok(String::new());
    }

    let lines = match options.format {
        TableFormat::Plain => layout.plain(false),
        TableFormat::Simple => layout.plain(true),
        TableFormat::Grid => layout.grid(),
        TableFormat::Pipe => layout.pipe(true),
        TableFormat::Github => layout.pipe(false),
    };

    Ok(lines.join("\n"))
}

impl Layout {
    fn build(rows: &[Row], headers: &[String], precision: Option<usize>) -> Result<Self> {
        let columns = if headers.is_empty() {
            rows.first().map(|r| r.len()).unwrap_or(0)
        } else {
            headers.len()
        };

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(LazyTableError::RowArity {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
        }

        let rendered: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.render(precision)).collect())
            .collect();

        let aligns = (0..columns)
            .map(|col| {
                let numeric = !rows.is_empty() && rows.iter().all(|row| row[col].is_numeric());
                if numeric {
                    Alignment::Right
                } else {
                    Alignment::Left
                }
            })
            .collect();

        let widths = (0..columns)
            .map(|col| {
                let header = headers.get(col).map(|h| measure_text_width(h)).unwrap_or(0);
                rendered
                    .iter()
                    .map(|row| measure_text_width(&row[col]))
                    .fold(header, usize::max)
            })
            .collect();

        Ok(Layout {
            headers: headers.to_vec(),
            rows: rendered,
            widths,
            aligns,
        })
    }

    fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Pad each cell of `cells` to its column width.
    fn padded<'a>(&self, cells: &'a [String]) -> Vec<std::borrow::Cow<'a, str>> {
        cells
            .iter()
            .enumerate()
            .map(|(col, cell)| pad_str(cell, self.widths[col], self.aligns[col], None))
            .collect()
    }

    /// `plain` and `simple`: two-space separated, optional dashed header rule.
    fn plain(&self, header_rule: bool) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if self.has_headers() {
            lines.push(self.padded(&self.headers).join("  "));
            if header_rule {
                let rule: Vec<String> = self.widths.iter().map(|w| "-".repeat(*w)).collect();
                lines.push(rule.join("  "));
            }
        }
        for row in &self.rows {
            lines.push(self.padded(row).join("  "));
        }
        lines
    }

    /// `grid`: every row boxed, `=` rule under the header.
    fn grid(&self) -> Vec<String> {
        let border = |fill: char| -> String {
            let segments: Vec<String> = self
                .widths
                .iter()
                .map(|w| fill.to_string().repeat(w + 2))
                .collect();
            format!("+{}+", segments.join("+"))
        };
        let boxed = |cells: &[String]| -> String {
            format!("| {} |", self.padded(cells).join(" | "))
        };

        let mut lines = vec![border('-')];
        if self.has_headers() {
            lines.push(boxed(&self.headers));
            lines.push(border('='));
        }
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                lines.push(border('-'));
            }
            lines.push(boxed(row));
        }
        if !self.rows.is_empty() {
            lines.push(border('-'));
        }
        lines
    }

    /// `pipe` and `github`: markdown tables, with or without alignment colons.
    fn pipe(&self, colons: bool) -> Vec<String> {
        let boxed = |cells: &[String]| -> String {
            format!("| {} |", self.padded(cells).join(" | "))
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if self.has_headers() {
            lines.push(boxed(&self.headers));
        } else {
            let blank = vec![String::new(); self.widths.len()];
            lines.push(boxed(&blank));
        }

        let rule: Vec<String> = self
            .widths
            .iter()
            .zip(&self.aligns)
            .map(|(w, align)| match (colons, align) {
                (true, Alignment::Right) => format!("{}:", "-".repeat(w + 1)),
                (true, _) => format!(":{}", "-".repeat(w + 1)),
                (false, _) => "-".repeat(w + 2),
            })
            .collect();
        lines.push(format!("|{}|", rule.join("|")));

        for row in &self.rows {
            lines.push(boxed(row));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::row;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_rows() -> Vec<Row> {
        vec![row![200, 1.5, "ok"], row![400, -0.25, "slow"]]
    }

    #[test]
    fn test_simple_format() {
        let out = format_table(
            &sample_rows(),
            &headers(&["Steps", "Value", "Note"]),
            &FormatOptions::new(),
        )
        .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Steps  Value  Note");
        assert_eq!(lines[1], "-----  -----  ----");
        assert_eq!(lines[2], "  200    1.5  ok  ");
        assert_eq!(lines[3], "  400  -0.25  slow");
    }

    #[test]
    fn test_simple_header_only() {
        let out = format_table(&[], &headers(&["N", "F_N"]), &FormatOptions::new()).unwrap();
        assert_eq!(out, "N  F_N\n-  ---");
    }

    #[test]
    fn test_plain_format_has_no_rule() {
        let opts = FormatOptions::new().format(TableFormat::Plain);
        let out = format_table(&sample_rows(), &headers(&["Steps", "Value", "Note"]), &opts)
            .unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(!out.contains("---"));
    }

    #[test]
    fn test_grid_format() {
        let opts = FormatOptions::new().format(TableFormat::Grid);
        let out = format_table(&[row![1, "a"], row![22, "b"]], &headers(&["N", "X"]), &opts)
            .unwrap();

        let expected = "\
+----+---+
|  N | X |
+====+===+
|  1 | a |
+----+---+
| 22 | b |
+----+---+";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_pipe_format_alignment_colons() {
        let opts = FormatOptions::new().format(TableFormat::Pipe);
        let out = format_table(&[row![1, "a"]], &headers(&["N", "X"]), &opts).unwrap();

        let expected = "\
| N | X |
|--:|:--|
| 1 | a |";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_github_format_plain_rule() {
        let opts = FormatOptions::new().format(TableFormat::Github);
        let out = format_table(&[row![1, "a"]], &headers(&["N", "X"]), &opts).unwrap();
        assert_eq!(out.lines().nth(1), Some("|---|---|"));
    }

    #[test]
    fn test_float_precision() {
        let opts = FormatOptions::new().float_precision(3);
        let out = format_table(&[row![0.5]], &headers(&["Value"]), &opts).unwrap();
        assert!(out.ends_with("0.500"));
    }

    #[test]
    fn test_nan_cells_stay_numeric() {
        let rows = vec![row![200, f64::NAN], row![400, 0.125]];
        let out = format_table(&rows, &headers(&["Steps", "Delta"]), &FormatOptions::new())
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "  200    nan");
        assert_eq!(lines[3], "  400  0.125");
    }

    #[test]
    fn test_no_headers_uses_first_row_arity() {
        let out = format_table(&[row![1, 2], row![3, 4]], &[], &FormatOptions::new()).unwrap();
        assert_eq!(out, "1  2\n3  4");
    }

    #[test]
    fn test_empty_table_is_empty_string() {
        assert_eq!(format_table(&[], &[], &FormatOptions::new()).unwrap(), "");
    }

    #[test]
    fn test_row_arity_mismatch() {
        let rows = vec![row![1, 2], vec![Cell::from(3)]];
        let err = format_table(&rows, &headers(&["A", "B"]), &FormatOptions::new()).unwrap_err();
        match err {
            LazyTableError::RowArity {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_styled_cells_measured_by_display_width() {
        let styled = console::style("ok").bold().force_styling(true).to_string();
        let rows = vec![vec![Cell::text(styled)], vec![Cell::text("slow")]];
        let out = format_table(&rows, &headers(&["Note"]), &FormatOptions::new()).unwrap();
        let first = out.lines().nth(2).unwrap();
        assert_eq!(measure_text_width(first), 4);
    }

    #[test]
    fn test_closure_formatter() {
        let count_rows = |rows: &[Row], _headers: &[String]| -> Result<String> {
            Ok(format!("{} rows", rows.len()))
        };
        assert_eq!(count_rows.format(&sample_rows(), &[]).unwrap(), "2 rows");
    }
}
