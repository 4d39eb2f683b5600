//! Output formatting: turn the table buffer into a frame of text.
//!
//! - **Formatter**: trait for anything that formats rows under headers
//! - **format_table**: the built-in formatter, driven by `FormatOptions`
//!
//! ## Example
//!
//! ```rust
//! use lazytablelib::output::format_table;
//! use lazytablelib::{row, FormatOptions};
//!
//! let headers = vec!["N".to_string(), "F_N".to_string()];
//! let text = format_table(&[row![0, 0], row![1, 1]], &headers, &FormatOptions::new()).unwrap();
//! assert_eq!(text, "N  F_N\n-  ---\n0    0\n1    1");
//! ```

pub mod table;

pub use table::{format_table, Formatter};
