//! Stream partial sums of the Basel series with a progress bar.

use std::thread;
use std::time::Duration;

use lazytablelib::{row, stream, ConsoleWithProgress, StreamOptions};

fn main() {
    let n_rows = 20;
    let limit = std::f64::consts::PI.powi(2) / 6.0;

    let rows = (1..=n_rows as u64).scan(0.0, move |sum, n| {
        thread::sleep(Duration::from_millis(150));
        *sum += 1.0 / (n * n) as f64;
        Some(row![n, *sum, limit - *sum])
    });

    let mut artist = ConsoleWithProgress::stdout();
    let options = StreamOptions::new()
        .headers(["N", "Sum", "Error"])
        .n_rows(n_rows);

    stream(rows, &mut artist, &options).expect("Failed to stream table");
}
