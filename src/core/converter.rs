//! Conversion orchestration
//!
//! This module provides the [`Converter`] that chains the batch filter, the
//! row mapper and (through [`Converter::convert_to_csv`]) the CSV serializer.
//!
//! The converter holds no mutable state. The same instance can be copied into
//! as many worker tasks as needed; ordering is the caller's responsibility
//! when rows are split across tasks.

use tracing::info;

use crate::core::filter::supported_rows;
use crate::core::mapper::map_record;
use crate::core::time::EXCHANGE_UTC_OFFSET_HOURS;
use crate::io::csv_format::render_csv;
use crate::types::{ConvertError, SourceRecord, TargetRecord};

/// Conversion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// UTC offset of the export's order dates, in hours east of UTC
    pub utc_offset_hours: i32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: EXCHANGE_UTC_OFFSET_HOURS,
        }
    }
}

/// Exchange-to-Koinly row converter
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a Converter with the given settings
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ConverterConfig {
        self.config
    }

    /// Filter and map a complete export
    ///
    /// Fails fast: the first malformed order date aborts the conversion and
    /// is reported with its 1-based data row.
    pub fn convert(&self, records: &[SourceRecord]) -> Result<Vec<TargetRecord>, ConvertError> {
        let converted = self.convert_rows(records, 1)?;

        info!(
            rows_in = records.len(),
            rows_out = converted.len(),
            dropped = records.len() - converted.len(),
            "Converted export"
        );

        Ok(converted)
    }

    /// Filter and map a slice of a larger export
    ///
    /// `first_row` is the 1-based data row of `records[0]` within the whole
    /// export; it only affects error reporting.
    pub fn convert_rows(
        &self,
        records: &[SourceRecord],
        first_row: usize,
    ) -> Result<Vec<TargetRecord>, ConvertError> {
        supported_rows(records, first_row)
            .map(|(row, record)| {
                map_record(record, self.config.utc_offset_hours).map_err(|e| e.at_row(row))
            })
            .collect()
    }

    /// Run the whole pipeline: rows in, Koinly CSV text out
    pub fn convert_to_csv(&self, records: &[SourceRecord]) -> Result<String, ConvertError> {
        let converted = self.convert(records)?;
        Ok(render_csv(&converted))
    }
}

/// Convert an export with the default settings
///
/// ```
/// use koinly_export_converter::{convert_to_csv, SourceRecord};
///
/// let row = SourceRecord {
///     order_type: "Buy".to_string(),
///     order_date: "2024-01-15 10:00:00".to_string(),
///     fiat_amount: "100.00".to_string(),
///     fiat_currency_code: "CAD".to_string(),
///     crypto_amount: "0.0021".to_string(),
///     crypto_currency_code: "BTC".to_string(),
///     miner_fee: "-".to_string(),
///     transaction_hash: "abc123".to_string(),
///     ..Default::default()
/// };
///
/// let csv = convert_to_csv(&[row]).unwrap();
/// assert_eq!(csv.lines().nth(1), Some("2024-01-15 17:00 UTC,100.00,CAD,0.0021,BTC,,BTC,,,Buy,,abc123"));
/// ```
pub fn convert_to_csv(records: &[SourceRecord]) -> Result<String, ConvertError> {
    Converter::default().convert_to_csv(records)
}
