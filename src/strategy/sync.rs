//! Synchronous conversion strategy
//!
//! Reads the whole export through [`SyncReader`], converts it with a single
//! [`Converter`] call and renders the result. Rows must all be in memory
//! before conversion because a malformed row anywhere aborts the file.

use crate::core::{Converter, ConverterConfig};
use crate::io::csv_format::write_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ConversionStrategy;
use crate::types::ConvertError;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Synchronous, single-threaded conversion strategy
///
/// ```no_run
/// use koinly_export_converter::strategy::{ConversionStrategy, SyncConversionStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncConversionStrategy::default();
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("export.csv"), &mut output)
///     .expect("Conversion failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncConversionStrategy {
    converter: Converter,
}

impl SyncConversionStrategy {
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            converter: Converter::new(config),
        }
    }
}

impl ConversionStrategy for SyncConversionStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), ConvertError> {
        let records = SyncReader::new(input_path)?.read_all()?;
        debug!(rows = records.len(), path = %input_path.display(), "Read export");

        let converted = self.converter.convert(&records)?;

        write_csv(&converted, output)
    }
}
