//! Fibonacci demo table with simulated work between rows.

use std::thread;
use std::time::Duration;

use lazytablelib::{row, Row};

/// Column headers of the Fibonacci table
pub const HEADERS: [&str; 2] = ["N", "F_N"];

/// Largest `n` with `F_n` below `2^64`
const LAST_FITTING: u64 = 93;

/// Rows `[n, F_n]` for `n = 0..=last`, sleeping `delay` before each row
/// after the second. `last` is capped at 93, the last `F_n` that fits in a
/// `u64`.
#[derive(Debug, Clone)]
pub struct FibTable {
    n: u64,
    last: u64,
    current: Option<u64>,
    next: Option<u64>,
    delay: Duration,
}

impl FibTable {
    pub fn new(last: u64, delay: Duration) -> Self {
        Self {
            n: 0,
            last: last.min(LAST_FITTING),
            current: Some(0),
            next: Some(1),
            delay,
        }
    }

    /// Number of rows the table will produce.
    pub fn row_count(&self) -> usize {
        (self.last + 1) as usize
    }
}

impl Iterator for FibTable {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.n > self.last {
            return None;
        }
        let value = self.current?;
        if self.n >= 2 && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let row = row![self.n, value];
        self.current = self.next;
        self.next = self.next.and_then(|next| value.checked_add(next));
        self.n += 1;
        Some(row)
    }
}
