//! # lazytable
//!
//! A CLI that streams convergence tables to the terminal, redrawing the
//! table in place as each row is computed.
//!
//! ## Usage
//!
//! ```bash
//! # Euler's method on the Van der Pol oscillator (default command)
//! lazytable
//! lazytable vdp --n-rows 8 --damping-strength 2.5
//!
//! # With a progress bar, in a markdown table
//! lazytable vdp --show-progress --tablefmt pipe
//!
//! # Fibonacci demo with simulated work
//! lazytable fib --n 15 --delay-ms 300
//!
//! # Final table as JSON
//! lazytable vdp --output json
//! ```

mod fib;
mod render;
mod vdp;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use lazytablelib::{ClearMode, TableFormat};
use log::{debug, LevelFilter};

use crate::fib::FibTable;
use crate::render::{show, DisplayConfig, OutputMode};
use crate::vdp::VanDerPol;

/// Display arguments accepted by the root command and every subcommand
fn display_args() -> Vec<Arg> {
    let formats: Vec<&'static str> = TableFormat::ALL.iter().map(|f| f.name()).collect();
    vec![
        Arg::new("tablefmt")
            .long("tablefmt")
            .global(true)
            .default_value("simple")
            .value_parser(formats)
            .help("Table layout"),
        Arg::new("floatfmt")
            .long("floatfmt")
            .global(true)
            .value_parser(value_parser!(usize))
            .help("Digits after the decimal point for floats (default: 6 significant digits)"),
        Arg::new("clear")
            .long("clear")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Clear the whole screen before every redraw"),
        Arg::new("show-progress")
            .long("show-progress")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Show a progress bar under the table"),
        Arg::new("width")
            .long("width")
            .global(true)
            .default_value("32")
            .value_parser(value_parser!(usize))
            .help("Progress bar width in characters"),
        Arg::new("output")
            .short('o')
            .long("output")
            .global(true)
            .default_value("table")
            .value_parser(["table", "json"])
            .help("Output mode: live table or final JSON"),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .global(true)
            .action(ArgAction::Count)
            .help("Log more to stderr (-v info, -vv debug)"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("lazytable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Stream convergence tables to the terminal as rows are computed")
        .args(display_args())
        .subcommand(
            Command::new("vdp")
                .about("Convergence table for Euler's method on the Van der Pol oscillator (default command)")
                .arg(
                    Arg::new("init-pos")
                        .long("init-pos")
                        .default_value("2.0")
                        .value_parser(value_parser!(f64))
                        .help("Initial position"),
                )
                .arg(
                    Arg::new("init-vel")
                        .long("init-vel")
                        .default_value("0.0")
                        .value_parser(value_parser!(f64))
                        .help("Initial velocity"),
                )
                .arg(
                    Arg::new("final-time")
                        .long("final-time")
                        .default_value("16.0")
                        .value_parser(value_parser!(f64))
                        .help("Final time"),
                )
                .arg(
                    Arg::new("damping-strength")
                        .long("damping-strength")
                        .default_value("1.0")
                        .value_parser(value_parser!(f64))
                        .help("Damping strength"),
                )
                .arg(
                    Arg::new("init-n-steps")
                        .long("init-n-steps")
                        .default_value("200")
                        .value_parser(value_parser!(u64).range(1..))
                        .help("Initial number of steps"),
                )
                .arg(
                    Arg::new("n-rows")
                        .long("n-rows")
                        .default_value("12")
                        .value_parser(value_parser!(usize))
                        .help("Number of rows in the convergence table"),
                ),
        )
        .subcommand(
            Command::new("fib")
                .about("Fibonacci numbers with simulated work between rows")
                .arg(
                    Arg::new("n")
                        .long("n")
                        .default_value("10")
                        .value_parser(value_parser!(u64))
                        .help("Last index N (at most 93, the last F_N that fits in 64 bits)"),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .default_value("200")
                        .value_parser(value_parser!(u64))
                        .help("Delay before each row in milliseconds"),
                ),
        )
}

/// Extract display settings from matches
fn display_config(matches: &ArgMatches) -> anyhow::Result<DisplayConfig> {
    let table_format = matches
        .get_one::<String>("tablefmt")
        .map(|s| s.parse::<TableFormat>())
        .transpose()?
        .unwrap_or_default();
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputMode>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    Ok(DisplayConfig {
        table_format,
        float_precision: matches.get_one::<usize>("floatfmt").copied(),
        clear: ClearMode::from_flag(matches.get_flag("clear")),
        show_progress: matches.get_flag("show-progress"),
        width: matches
            .get_one::<usize>("width")
            .copied()
            .unwrap_or(lazytablelib::artist::DEFAULT_WIDTH),
        output,
    })
}

fn arg<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, name: &str) -> anyhow::Result<T> {
    matches
        .get_one::<T>(name)
        .cloned()
        .with_context(|| format!("missing value for --{name}"))
}

/// Handler for vdp command
fn vdp_handler(matches: Option<&ArgMatches>, config: &DisplayConfig) -> anyhow::Result<()> {
    let (system, init_n_steps, n_rows) = match matches {
        Some(m) => (
            VanDerPol {
                init_pos: arg(m, "init-pos")?,
                init_vel: arg(m, "init-vel")?,
                final_time: arg(m, "final-time")?,
                damping_strength: arg(m, "damping-strength")?,
            },
            arg::<u64>(m, "init-n-steps")?,
            arg::<usize>(m, "n-rows")?,
        ),
        None => (VanDerPol::default(), 200, 12),
    };
    debug!(
        "vdp: {:?}, init_n_steps={}, n_rows={}",
        system, init_n_steps, n_rows
    );

    let table = system.convergence_table(init_n_steps, n_rows);
    show(table, &vdp::HEADERS, Some(n_rows), config)
}

/// Handler for fib command
fn fib_handler(matches: &ArgMatches, config: &DisplayConfig) -> anyhow::Result<()> {
    let last: u64 = arg(matches, "n")?;
    let delay = Duration::from_millis(arg(matches, "delay-ms")?);
    debug!("fib: n={}, delay={:?}", last, delay);

    let table = FibTable::new(last, delay);
    let n_rows = table.row_count();
    show(table, &fib::HEADERS, Some(n_rows), config)
}

/// Log to stderr so the table on stdout stays intact
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = display_config(matches)?;
    match matches.subcommand() {
        Some(("vdp", sub)) => vdp_handler(Some(sub), &config),
        Some(("fib", sub)) => fib_handler(sub, &config),
        // Root command without subcommand: vdp with defaults
        _ => vdp_handler(None, &config),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}
