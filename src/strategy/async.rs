//! Asynchronous batch conversion strategy
//!
//! This module provides a multi-threaded implementation of the
//! ConversionStrategy trait. Rows carry no cross-row state, so each batch is
//! split into contiguous chunks that are mapped on separate tokio tasks.
//!
//! # Architecture
//!
//! ```text
//! AsyncConversionStrategy
//!     ├── BatchConfig (batch_size, max_concurrent)
//!     ├── AsyncReader (batch CSV reading)
//!     └── Converter   (copied into every worker task)
//! ```
//!
//! # Ordering
//!
//! Chunk results are awaited in the order the chunks were spawned, so output
//! rows come out in input order regardless of which task finishes first. The
//! first error in input order wins, matching the sync strategy.

use crate::core::{Converter, ConverterConfig};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_csv;
use crate::strategy::ConversionStrategy;
use crate::types::{ConvertError, SourceRecord, TargetRecord};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration for batch processing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of rows read per batch
    pub batch_size: usize,
    /// Maximum number of worker tasks mapping a batch concurrently
    pub max_concurrent: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig, replacing zero values with defaults
    pub fn new(batch_size: usize, max_concurrent: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent = if max_concurrent == 0 {
            warn!(
                "Invalid max_concurrent ({}), using default ({})",
                max_concurrent, default.max_concurrent
            );
            default.max_concurrent
        } else {
            max_concurrent
        };

        Self {
            batch_size,
            max_concurrent,
        }
    }
}

/// Asynchronous batch conversion strategy
#[derive(Debug, Clone)]
pub struct AsyncConversionStrategy {
    config: BatchConfig,
    converter: Converter,
}

impl AsyncConversionStrategy {
    pub fn new(config: BatchConfig, converter: ConverterConfig) -> Self {
        Self {
            config,
            converter: Converter::new(converter),
        }
    }

    /// Map one batch across up to `max_concurrent` tasks, preserving order
    ///
    /// `first_row` is the 1-based data row of `batch[0]` in the whole export.
    async fn convert_batch(
        &self,
        batch: Vec<SourceRecord>,
        first_row: usize,
    ) -> Result<Vec<TargetRecord>, ConvertError> {
        let chunk_size = batch.len().div_ceil(self.config.max_concurrent).max(1);

        let mut tasks = Vec::new();
        let mut chunk_row = first_row;
        let mut rows = batch.into_iter().peekable();
        while rows.peek().is_some() {
            let chunk: Vec<SourceRecord> = rows.by_ref().take(chunk_size).collect();
            let converter = self.converter;
            let start = chunk_row;
            chunk_row += chunk.len();
            tasks.push(tokio::spawn(async move {
                converter.convert_rows(&chunk, start)
            }));
        }

        let mut converted = Vec::new();
        for task in tasks {
            let rows = task
                .await
                .map_err(|e| ConvertError::runtime(format!("Worker task failed: {}", e)))??;
            converted.extend(rows);
        }

        Ok(converted)
    }
}

impl ConversionStrategy for AsyncConversionStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ConvertError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent)
            .build()
            .map_err(|e| ConvertError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        let converted = runtime.block_on(async {
            let file = tokio::fs::File::open(input_path).await.map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    ConvertError::file_not_found(&input_path.display().to_string())
                }
                _ => ConvertError::IoError {
                    message: format!("Failed to open file '{}': {}", input_path.display(), e),
                },
            })?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut converted = Vec::new();
            let mut next_row = 1;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await?;
                if batch.is_empty() {
                    break;
                }

                let batch_len = batch.len();
                debug!(first_row = next_row, rows = batch_len, "Converting batch");
                converted.extend(self.convert_batch(batch, next_row).await?);
                next_row += batch_len;
            }

            Ok::<_, ConvertError>(converted)
        })?;

        info!(rows_out = converted.len(), "Converted export");

        write_csv(&converted, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SyncConversionStrategy;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn export(rows: usize) -> String {
        let mut content = String::from("Transaction ID,Order Type,Order Date,Fiat Amount,Fiat Code,Crypto Amount,Crypto Code,Miner Fee\n");
        for i in 0..rows {
            let order_type = match i % 3 {
                0 => "Buy",
                1 => "Sell",
                _ => "Swap",
            };
            content.push_str(&format!(
                "t-{i},{order_type},2024-01-15 {:02}:00:00,{i}.00,CAD,0.{i},BTC,-\n",
                i % 24
            ));
        }
        content
    }

    #[rstest]
    #[case::single_batch(1000, 4)]
    #[case::many_small_batches(2, 3)]
    #[case::one_worker(5, 1)]
    #[case::more_workers_than_rows(7, 64)]
    fn test_async_matches_sync(#[case] batch_size: usize, #[case] max_concurrent: usize) {
        let file = create_temp_csv(&export(40));

        let mut sync_output = Vec::new();
        SyncConversionStrategy::default()
            .process(file.path(), &mut sync_output)
            .unwrap();

        let strategy = AsyncConversionStrategy::new(
            BatchConfig::new(batch_size, max_concurrent),
            ConverterConfig::default(),
        );
        let mut async_output = Vec::new();
        strategy.process(file.path(), &mut async_output).unwrap();

        assert_eq!(
            String::from_utf8(async_output).unwrap(),
            String::from_utf8(sync_output).unwrap()
        );
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncConversionStrategy::new(BatchConfig::default(), ConverterConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(ConvertError::FileNotFound { .. })));
    }

    #[test]
    fn test_async_strategy_reports_first_malformed_row_across_batches() {
        let file = create_temp_csv(
            "Order Type,Order Date\n\
             Buy,2024-01-15 10:00:00\n\
             Buy,2024-01-15 10:00:00\n\
             Swap,bad\n\
             Sell,bad-1\n\
             Buy,bad-2\n",
        );

        let strategy = AsyncConversionStrategy::new(BatchConfig::new(2, 2), ConverterConfig::default());
        let mut output = Vec::new();
        let result = strategy.process(file.path(), &mut output);

        assert_eq!(
            result,
            Err(ConvertError::MalformedTimestamp {
                value: "bad-1".to_string(),
                row: Some(4),
            })
        );
        assert!(output.is_empty());
    }

    #[test]
    fn test_batch_config_zero_values_fall_back() {
        let config = BatchConfig::new(0, 0);
        assert_eq!(config, BatchConfig::default());
    }
}
