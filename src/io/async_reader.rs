//! Asynchronous CSV reader with batch interface
//!
//! Provides batched reading of exchange rows from a CSV export.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - the same header mapping and trimming rules as the sync reader
//! - batch reading so the strategy can fan each batch out to worker tasks
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of SourceRecords
//! ```

use crate::types::{ConvertError, SourceRecord};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    headers: Option<StringRecord>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async byte source
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self {
            csv_reader,
            headers: None,
        }
    }

    /// Read up to `batch_size` rows
    ///
    /// Short rows are padded with empty fields up to the header width.
    /// Returns an empty vector once the end of the file is reached. A
    /// malformed row aborts the read with [`ConvertError::ParseError`];
    /// rows already read in this batch are discarded with it.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<SourceRecord>, ConvertError> {
        if self.headers.is_none() {
            self.headers = Some(self.csv_reader.headers().await?.clone());
        }
        let Some(headers) = self.headers.as_ref() else {
            return Ok(Vec::new());
        };

        let mut batch = Vec::with_capacity(batch_size);
        let mut record = StringRecord::new();
        while batch.len() < batch_size {
            if !self.csv_reader.read_record(&mut record).await? {
                break;
            }
            while record.len() < headers.len() {
                record.push_field("");
            }
            batch.push(record.deserialize::<SourceRecord>(Some(headers))?);
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = "Transaction ID,Order Type,Order Date\n\
                           t-1,Buy,2024-01-15 10:00:00\n\
                           t-2,Sell,2024-01-15 11:00:00\n\
                           t-3,Swap,2024-01-15 12:00:00\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].transaction_id, "t-1");
        assert_eq!(batch[1].order_type, "Sell");

        let batch = async_reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].transaction_id, "t-3");

        let batch = async_reader.read_batch(2).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let csv_content = "Transaction ID,Order Type,Order Date\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_missing_columns_read_as_empty() {
        let csv_content = "Order Type\nBuy\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await.unwrap();
        assert_eq!(batch[0].order_type, "Buy");
        assert_eq!(batch[0].order_date, "");
        assert_eq!(batch[0].miner_fee, "");
    }

    #[tokio::test]
    async fn test_async_reader_row_missing_trailing_cells() {
        let csv_content = "Transaction ID,Order Type,Order Date,Miner Fee,Transaction Hash\n\
                           t-1,Buy,2024-01-15 10:00:00\n\
                           t-2,Sell,2024-01-15 11:00:00,-,h2\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(1).await.unwrap();
        assert_eq!(batch[0].order_date, "2024-01-15 10:00:00");
        assert_eq!(batch[0].miner_fee, "");
        assert_eq!(batch[0].transaction_hash, "");

        let batch = async_reader.read_batch(1).await.unwrap();
        assert_eq!(batch[0].transaction_hash, "h2");
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_handling() {
        let csv_content = " Order Type , Fiat Amount \n  Buy  ,  100.00  \n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await.unwrap();
        assert_eq!(batch[0].order_type, "Buy");
        assert_eq!(batch[0].fiat_amount, "100.00");
    }

    #[tokio::test]
    async fn test_async_reader_invalid_utf8_is_parse_error() {
        let mut content = b"Order Type\n".to_vec();
        content.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let reader = Cursor::new(content);
        let mut async_reader = AsyncReader::new(reader);

        let result = async_reader.read_batch(10).await;
        assert!(matches!(result, Err(ConvertError::ParseError { .. })));
    }
}
