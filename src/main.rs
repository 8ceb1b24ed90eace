//! Koinly Export Converter CLI
//!
//! Command-line interface for converting an exchange transaction export into
//! Koinly's universal CSV import format.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- export.csv                      # writes koinly_export.csv
//! cargo run -- export.csv --output - > out.csv
//! cargo run -- --strategy async --batch-size 5000 export.csv
//! cargo run -- --utc-offset -8 --log-level debug export.csv
//! ```
//!
//! Logs go to stderr so stdout can carry the CSV.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, malformed order date, etc.)

use koinly_export_converter::cli;
use koinly_export_converter::strategy;
use koinly_export_converter::ConvertError;
use std::fs::File;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process;
use tracing::error;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let args = cli::parse_args();

    setup_logging(args.log_level.into());

    let strategy = {
        let batch = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), batch, args.to_converter_config())
    };

    // Convert into memory first so a failed run never leaves a partial file behind
    let mut buffer = Vec::new();
    let result = strategy
        .process(&args.input_file, &mut buffer)
        .and_then(|()| write_output(&args, &buffer));

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

fn write_output(args: &cli::CliArgs, contents: &[u8]) -> Result<(), ConvertError> {
    if args.writes_to_stdout() {
        let mut output = BufWriter::new(stdout().lock());
        output.write_all(contents)?;
        output.flush()?;
    } else {
        let mut output = BufWriter::new(File::create(&args.output)?);
        output.write_all(contents)?;
        output.flush()?;
        info!("Wrote {}", args.output.display());
    }
    Ok(())
}

fn setup_logging(level: LevelFilter) {
    // stdout may carry the converted CSV, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}
