//! Base dataset loading.
//!
//! The simulator is seeded from one CSV export whose rows act as templates
//! for every generated batch. The schema is required but coercible: a
//! missing column is synthesized with default values (empty strings for
//! text, zero for numbers) so a partial export still boots the simulator.

use crate::error::ConfigError;
use log::warn;
use std::path::Path;
use trades::{TradeRecord, SCHEMA_COLUMNS};

/// Loads the base dataset, warning once per schema column the file lacks.
///
/// # Returns
///
/// * `Ok(Vec<TradeRecord>)` with at least one row.
/// * `Err(ConfigError)` when the file cannot be read or holds no rows.
pub fn load_base_dataset(path: &Path) -> Result<Vec<TradeRecord>, ConfigError> {
    let read_err = |source| ConfigError::BaseDatasetRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;

    let headers = reader.headers().map_err(read_err)?.clone();
    for column in SCHEMA_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            warn!(
                "Column '{}' not found in {}. Using default values for it.",
                column,
                path.display()
            );
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TradeRecord = row.map_err(read_err)?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(ConfigError::EmptyBaseDataset);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_schema() {
        let file = write_csv(
            "localTS,localDate,ticker,conditions,correction,exchange,id,participant_timestamp,price,sequence_number,sip_timestamp,size,tape,trf_id,trf_timestamp\n\
             2024-05-01 09:30:00,2024-05-01,AAPL,@,0,11,1001,1714570200000000000,187.3,1,1714570200000000000,100,3,201,1714570200000000000\n",
        );

        let records = load_base_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker, "AAPL");
        assert_eq!(records[0].price, 187.3);
        assert_eq!(records[0].conditions, "@");
    }

    #[test]
    fn missing_columns_coerce_to_defaults() {
        let file = write_csv("ticker,price,size\nMSFT,410.5,25\n");

        let records = load_base_dataset(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker, "MSFT");
        assert_eq!(records[0].conditions, "");
        assert_eq!(records[0].local_ts, "");
        assert_eq!(records[0].exchange, 0);
        assert_eq!(records[0].sip_timestamp, 0);
    }

    #[test]
    fn missing_condition_values_coerce_to_empty_string() {
        let file = write_csv("ticker,price,size,conditions\nAAPL,187.3,100,\n");

        let records = load_base_dataset(file.path()).unwrap();
        assert_eq!(records[0].conditions, "");
    }

    #[test]
    fn header_only_file_is_rejected() {
        let file = write_csv("ticker,price,size\n");
        let err = load_base_dataset(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBaseDataset));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_base_dataset(Path::new("/nonexistent/trades.csv")).unwrap_err();
        assert!(matches!(err, ConfigError::BaseDatasetRead { .. }));
    }
}
