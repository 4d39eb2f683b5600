//! Scalar cell values and rows.

use serde::Serialize;

/// Number of significant digits used when no float precision is configured.
const GENERAL_SIGNIFICANT_DIGITS: i32 = 6;

/// A single scalar value in a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// An integer value
    Int(i128),
    /// A floating point value
    Float(f64),
    /// A text value
    Text(String),
}

/// An ordered, fixed-arity sequence of cells.
pub type Row = Vec<Cell>;

impl Cell {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Check if this cell holds a number (right-aligned in tables)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    /// Format the cell for display.
    ///
    /// With `precision` set, floats get exactly that many digits after the
    /// point. Without it they use the shortest general form with up to six
    /// significant digits. Non-finite floats are `nan`, `inf` and `-inf`.
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            Cell::Int(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Float(v) if v.is_nan() => "nan".to_string(),
            Cell::Float(v) if v.is_infinite() => {
                let s = if *v > 0.0 { "inf" } else { "-inf" };
                s.to_string()
            }
            Cell::Float(v) => match precision {
                Some(p) => format!("{:.*}", p, v),
                None => format_general(*v),
            },
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.render(f.precision());

        // Respect width and alignment from the formatter
        if let Some(width) = f.width() {
            if f.align() == Some(std::fmt::Alignment::Left) {
                write!(f, "{:<width$}", s, width = width)
            } else {
                write!(f, "{:>width$}", s, width = width)
            }
        } else {
            write!(f, "{}", s)
        }
    }
}

/// `%g`-style formatting: scientific notation for very small or large
/// magnitudes, fixed otherwise, trailing zeros stripped in both.
fn format_general(value: f64) -> String {
    let digits = GENERAL_SIGNIFICANT_DIGITS;
    let sci = format!("{:.*e}", (digits - 1) as usize, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Cell {
                fn from(value: $t) -> Self {
                    Cell::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<f32> for Cell {
    fn from(value: f32) -> Self {
        Cell::Float(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// Build a [`Row`] from heterogeneous values.
///
/// ```rust
/// use lazytablelib::{row, Cell};
///
/// let r = row![3, 0.5, "ok"];
/// assert_eq!(r, vec![Cell::Int(3), Cell::Float(0.5), Cell::text("ok")]);
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Cell::from($value)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_int_and_text() {
        assert_eq!(Cell::from(200u64).render(None), "200");
        assert_eq!(Cell::from(-7i32).render(None), "-7");
        assert_eq!(Cell::text("Steps").render(Some(3)), "Steps");
    }

    #[test]
    fn test_render_general_float() {
        assert_eq!(Cell::from(1.0).render(None), "1");
        assert_eq!(Cell::from(0.5).render(None), "0.5");
        assert_eq!(Cell::from(-1.8464).render(None), "-1.8464");
        assert_eq!(Cell::from(123456.0).render(None), "123456");
        assert_eq!(Cell::from(1234567.0).render(None), "1.23457e+06");
        assert_eq!(Cell::from(0.0001234).render(None), "0.0001234");
        assert_eq!(Cell::from(0.00001234).render(None), "1.234e-05");
        assert_eq!(Cell::from(0.0).render(None), "0");
    }

    #[test]
    fn test_render_rounding_bumps_exponent() {
        assert_eq!(Cell::from(999999.7).render(None), "1e+06");
    }

    #[test]
    fn test_render_fixed_precision() {
        assert_eq!(Cell::from(1.23456).render(Some(2)), "1.23");
        assert_eq!(Cell::from(2.0).render(Some(3)), "2.000");
    }

    #[test]
    fn test_render_non_finite() {
        assert_eq!(Cell::from(f64::NAN).render(None), "nan");
        assert_eq!(Cell::from(f64::NAN).render(Some(4)), "nan");
        assert_eq!(Cell::from(f64::INFINITY).render(None), "inf");
        assert_eq!(Cell::from(f64::NEG_INFINITY).render(None), "-inf");
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>5}", Cell::from(42)), "   42");
        assert_eq!(format!("{:<5}|", Cell::text("ab")), "ab   |");
        assert_eq!(format!("{:.1}", Cell::from(0.26)), "0.3");
    }

    #[test]
    fn test_is_numeric() {
        assert!(Cell::from(1).is_numeric());
        assert!(Cell::from(f64::NAN).is_numeric());
        assert!(!Cell::text("1").is_numeric());
    }

    #[test]
    fn test_row_macro() {
        let r: Row = row![1u64, 2.5, "x"];
        assert_eq!(r.len(), 3);
        assert_eq!(r[0], Cell::Int(1));
        assert_eq!(r[2], Cell::text("x"));
    }
}
