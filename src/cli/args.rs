use crate::core::{ConverterConfig, EXCHANGE_UTC_OFFSET_HOURS};
use crate::io::OUTPUT_FILE_NAME;
use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Convert an exchange transaction export into Koinly's CSV import format
#[derive(Parser, Debug)]
#[command(name = "koinly-convert")]
#[command(about = "Convert an exchange transaction export into Koinly's CSV import format", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing the exchange export
    #[arg(value_name = "INPUT", help = "Path to the exchange export CSV file")]
    pub input_file: PathBuf,

    /// Output path, or "-" for stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT",
        default_value = OUTPUT_FILE_NAME,
        help = "Where to write the Koinly CSV ('-' for stdout)"
    )]
    pub output: PathBuf,

    /// Processing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' or 'async' (batched, multi-threaded)"
    )]
    pub strategy: StrategyType,

    /// Number of rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Maximum number of concurrent worker tasks (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of worker tasks per batch (default: CPU cores)"
    )]
    pub max_concurrent: Option<usize>,

    /// UTC offset of the export's order dates, in whole hours
    #[arg(
        long = "utc-offset",
        value_name = "HOURS",
        default_value_t = EXCHANGE_UTC_OFFSET_HOURS,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-23..=23),
        help = "UTC offset of order dates in hours"
    )]
    pub utc_offset: i32,

    /// Log verbosity (logs go to stderr)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

/// Available conversion strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments, falling back to defaults
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent.unwrap_or(default.max_concurrent),
            )
        } else {
            BatchConfig::default()
        }
    }

    pub fn to_converter_config(&self) -> ConverterConfig {
        ConverterConfig {
            utc_offset_hours: self.utc_offset,
        }
    }

    /// Whether output should go to stdout instead of a file
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
