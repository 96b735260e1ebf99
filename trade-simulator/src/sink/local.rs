use crate::error::ConfigError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Local, TimeZone};
use log::info;
use std::path::{Path, PathBuf};
use trades::{Sink, SinkResult, TradeBatch};

/// Writes each batch as a timestamp-named CSV file under the output
/// directory.
#[derive(Debug)]
pub struct LocalSink {
    output_dir: PathBuf,
}

impl LocalSink {
    /// Creates the sink, creating the output directory if absent.
    pub fn new(output_dir: PathBuf) -> Result<Self, ConfigError> {
        std::fs::create_dir_all(&output_dir).map_err(|source| ConfigError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    /// File name for a batch, derived from its capture time. Unique to the
    /// second of generation.
    pub(crate) fn filename(batch: &TradeBatch) -> String {
        let stamp = Local
            .timestamp_nanos(batch.captured_at_ns())
            .format("%Y%m%d_%H%M%S");
        format!("trades_{}.csv", stamp)
    }

    pub(crate) fn path_for(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}

/// Serializes the batch to `path` as a header-bearing CSV, one row per
/// record, columns per the trade schema.
pub(crate) fn write_batch(path: &Path, batch: &TradeBatch) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for record in batch.records() {
        writer
            .serialize(record)
            .with_context(|| format!("Failed to serialize row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl Sink for LocalSink {
    async fn deliver(&mut self, batch: &TradeBatch) -> SinkResult {
        let path = self.path_for(&Self::filename(batch));
        let destination = path.display().to_string();
        match write_batch(&path, batch) {
            Ok(()) => {
                info!("CSV file generated locally: {}", destination);
                SinkResult::success(destination)
            }
            Err(e) => SinkResult::failure(destination, format!("{:#}", e)),
        }
    }

    async fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trades::{TradeRecord, SCHEMA_COLUMNS};

    fn batch() -> TradeBatch {
        let records = vec![
            TradeRecord {
                local_ts: "2024-05-01 09:30:00".to_string(),
                local_date: "2024-05-01".to_string(),
                ticker: "AAPL".to_string(),
                conditions: "@,F".to_string(),
                price: 187.3,
                size: 100.0,
                ..Default::default()
            },
            TradeRecord {
                ticker: "MSFT".to_string(),
                price: 410.55,
                size: 25.0,
                ..Default::default()
            },
            TradeRecord {
                ticker: "TSLA".to_string(),
                price: 0.0001,
                size: 1.0,
                ..Default::default()
            },
        ];
        // 2024-05-01 13:30:00 UTC in nanoseconds.
        TradeBatch::new(records, 1_714_570_200_000_000_000)
    }

    #[tokio::test]
    async fn round_trip_preserves_rows_and_prices() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = LocalSink::new(dir.path().to_path_buf()).unwrap();
        let batch = batch();

        let result = sink.deliver(&batch).await;
        assert!(result.delivered, "cause: {:?}", result.cause);

        let mut reader = csv::Reader::from_path(&result.destination).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            SCHEMA_COLUMNS.to_vec()
        );
        let rows: Vec<TradeRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), batch.len());
        for (read, written) in rows.iter().zip(batch.records()) {
            assert_eq!(read.price, written.price);
            assert_eq!(read.ticker, written.ticker);
            assert_eq!(read.conditions, written.conditions);
        }
    }

    #[tokio::test]
    async fn filename_is_derived_from_the_capture_second() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = LocalSink::new(dir.path().to_path_buf()).unwrap();
        let batch = batch();

        let result = sink.deliver(&batch).await;
        assert!(result.delivered);
        let name = Path::new(&result.destination)
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(name.starts_with("trades_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "trades_YYYYmmdd_HHMMSS.csv".len());
    }

    #[tokio::test]
    async fn unwritable_destination_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let mut sink = LocalSink::new(out.clone()).unwrap();

        // Replace the output directory with a plain file so the write
        // fails regardless of the user the tests run as.
        std::fs::remove_dir(&out).unwrap();
        std::fs::write(&out, b"not a directory").unwrap();

        let result = sink.deliver(&batch()).await;
        assert!(!result.delivered);
        assert!(result.cause.is_some());
        assert!(!result.destination.is_empty());
    }

    #[test]
    fn output_dir_that_cannot_be_created_is_a_startup_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();

        let err = LocalSink::new(blocker.join("out")).unwrap_err();
        assert!(matches!(err, ConfigError::CreateOutputDir { .. }));
    }
}
