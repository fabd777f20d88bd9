//! Asynchronous CSV reader with batch interface
//!
//! Provides batched reads of raw order rows from any async byte source.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - tokio (through the compat layer) for file access
//! - Batch reading so the caller can hand rows to the processor in chunks
//!
//! Batches come back in file order and the caller must process them in that
//! order; refunds depend on earlier purchases.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of RawRows → RowProcessor (in order)
//! ```

use crate::types::{RawRow, ReportError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Reads the header lazily on the first batch, then yields rows batch by batch.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    headers: Option<Vec<String>>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// Configured with a header row, flexible field counts and no trimming,
    /// matching the synchronous reader.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .create_reader(reader);

        Self {
            csv_reader,
            headers: None,
        }
    }

    /// Read up to `batch_size` rows
    ///
    /// # Returns
    ///
    /// The next rows in file order; an empty vector once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `CsvError` if the header or a record cannot be read.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<RawRow>, ReportError> {
        let headers = match self.headers.take() {
            Some(headers) => headers,
            None => self
                .csv_reader
                .headers()
                .await?
                .iter()
                .map(str::to_string)
                .collect(),
        };

        let mut batch = Vec::with_capacity(batch_size);
        let result = {
            let mut records = self.csv_reader.records();
            loop {
                if batch.len() >= batch_size {
                    break Ok(());
                }
                match records.next().await {
                    Some(Ok(record)) => batch.push(RawRow::from_record(
                        headers.iter().map(String::as_str),
                        record.iter(),
                    )),
                    Some(Err(e)) => break Err(ReportError::from(e)),
                    None => break Ok(()),
                }
            }
        };

        self.headers = Some(headers);
        result.map(|()| batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::row::{ORDER_ID, PRICE, QUANTITY};
    use futures::io::Cursor;

    const HEADER: &str = "order_id,sku,quantity,price\n";

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = format!("{HEADER}1,SKU-A,2,5.0\n2,SKU-B,1,3.0\n3,SKU-C,4,1.0\n");
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.into_bytes()));

        let batch = async_reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].get(ORDER_ID), Some("1"));
        assert_eq!(batch[1].get(ORDER_ID), Some("2"));

        let batch = async_reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].get(ORDER_ID), Some("3"));

        let batch = async_reader.read_batch(2).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = AsyncReader::new(Cursor::new(HEADER.as_bytes().to_vec()));

        let batch = async_reader.read_batch(10).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_keeps_raw_values() {
        let csv_content = format!("{HEADER} 1 ,SKU-A,  two  \n");
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content.into_bytes()));

        let batch = async_reader.read_batch(10).await.unwrap();
        assert_eq!(batch[0].get(ORDER_ID), Some(" 1 "));
        assert_eq!(batch[0].get(QUANTITY), Some("  two  "));
        assert_eq!(batch[0].get(PRICE), None);
    }

    #[tokio::test]
    async fn test_async_reader_invalid_utf8() {
        let mut csv_content = HEADER.as_bytes().to_vec();
        csv_content.extend_from_slice(b"1,SKU-\xff,2,5.0\n");
        let mut async_reader = AsyncReader::new(Cursor::new(csv_content));

        let result = async_reader.read_batch(10).await;
        assert!(matches!(result, Err(ReportError::CsvError { .. })));
    }
}
