//! Directory-of-CSVs warehouse over the simulator's output.

use crate::error::{ModelError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use trades::{LabeledTrade, TradeRecord, Warehouse};

/// Treats the simulator's output directory as a trade warehouse.
///
/// The most recent batch is the most recently modified CSV file; labeled
/// rows are written as `<table>.csv` next to the batches.
pub struct CsvWarehouse {
    dir: PathBuf,
}

impl CsvWarehouse {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn csv_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|source| ModelError::ListDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ModelError::ListDir {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_csv = path
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv {
                paths.push(path);
            }
        }

        if paths.is_empty() {
            return Err(ModelError::NoCsvFiles(self.dir.clone()));
        }
        Ok(paths)
    }

    fn latest_path(&self) -> Result<PathBuf> {
        let mut latest: Option<(SystemTime, PathBuf)> = None;
        for path in self.csv_paths()? {
            let modified = std::fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .map_err(|source| ModelError::Inspect {
                    path: path.clone(),
                    source,
                })?;
            match &latest {
                Some((newest, _)) if *newest >= modified => {}
                _ => latest = Some((modified, path)),
            }
        }
        // csv_paths guarantees at least one entry.
        Ok(latest.map(|(_, path)| path).unwrap_or_default())
    }

    /// Every batch in the directory, concatenated in directory order.
    pub fn accumulated_trades(&self) -> Result<Vec<TradeRecord>> {
        let mut rows = Vec::new();
        for path in self.csv_paths()? {
            rows.extend(read_rows(&path)?);
        }
        Ok(rows)
    }
}

fn read_rows(path: &Path) -> Result<Vec<TradeRecord>> {
    let read_err = |source| ModelError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(read_err)?);
    }
    Ok(rows)
}

impl Warehouse for CsvWarehouse {
    fn latest_trades(&mut self) -> anyhow::Result<Vec<TradeRecord>> {
        let path = self.latest_path()?;
        Ok(read_rows(&path)?)
    }

    fn write_rows(&mut self, table: &str, rows: &[LabeledTrade]) -> anyhow::Result<()> {
        let path = self.dir.join(format!("{}.csv", table));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        for row in rows {
            writer
                .serialize(row)
                .with_context(|| format!("Failed to serialize row to {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        Ok(())
    }
}
