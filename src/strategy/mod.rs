//! Processing strategy module
//!
//! This module defines the Strategy pattern for complete conversion pipelines,
//! covering reading the export, converting rows and writing Koinly CSV. This
//! allows different implementations (synchronous, asynchronous batch) to be
//! selected at runtime. Both produce byte-identical output.

use crate::cli::StrategyType;
use crate::core::ConverterConfig;
use crate::types::ConvertError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncConversionStrategy, BatchConfig};
pub use sync::SyncConversionStrategy;

/// Complete conversion pipeline
pub trait ConversionStrategy: Send + Sync {
    /// Convert the export at `input_path` and write Koinly CSV to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - The input is not well-formed CSV
    /// - A surviving row has a malformed order date
    /// - Output cannot be written
    ///
    /// Nothing is written to `output` when an error is returned.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ConvertError>;
}

/// Create a conversion strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of strategy to create (Sync or Async)
/// * `batch` - Optional batch configuration (ignored for sync)
/// * `converter` - Row conversion settings shared by both strategies
pub fn create_strategy(
    strategy_type: StrategyType,
    batch: Option<BatchConfig>,
    converter: ConverterConfig,
) -> Box<dyn ConversionStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncConversionStrategy::new(converter)),
        StrategyType::Async => {
            let batch = batch.unwrap_or_default();
            Box::new(AsyncConversionStrategy::new(batch, converter))
        }
    }
}
