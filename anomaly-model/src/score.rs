//! The `score` command.

use crate::error::Result;
use crate::features;
use log::info;
use trades::{LabeledTrade, OutlierModel, Warehouse, ANOMALY};

/// Outcome of one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub rows: usize,
    pub anomalies: usize,
}

/// Labels the warehouse's most recent batch and writes the labeled rows
/// back under `table`.
pub fn score_latest<W, M>(warehouse: &mut W, model: &M, table: &str) -> Result<ScoreSummary>
where
    W: Warehouse,
    M: OutlierModel,
{
    let rows = warehouse.latest_trades()?;
    if rows.is_empty() {
        info!("No trade rows found in the latest batch; nothing to score");
        return Ok(ScoreSummary {
            rows: 0,
            anomalies: 0,
        });
    }

    let matrix = features::feature_matrix(&rows);
    let labels = model.predict(&matrix)?;

    let labeled: Vec<LabeledTrade> = rows
        .into_iter()
        .zip(labels)
        .map(|(trade, anomaly)| LabeledTrade { trade, anomaly })
        .collect();
    let anomalies = labeled.iter().filter(|l| l.anomaly == ANOMALY).count();

    warehouse.write_rows(table, &labeled)?;
    Ok(ScoreSummary {
        rows: labeled.len(),
        anomalies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::ZScoreDetector;
    use crate::warehouse::CsvWarehouse;
    use trades::TradeRecord;

    fn normal_row(i: usize) -> TradeRecord {
        TradeRecord {
            ticker: "AAPL".to_string(),
            price: 187.0 + (i % 5) as f64 / 10.0,
            size: 100.0 + (i % 3) as f64,
            ..Default::default()
        }
    }

    #[test]
    fn scores_the_latest_batch_and_writes_labeled_rows() {
        let dir = tempfile::tempdir().unwrap();
        let batch = dir.path().join("trades_20240501_093000.csv");
        let mut writer = csv::Writer::from_path(&batch).unwrap();
        let mut rows: Vec<TradeRecord> = (0..100).map(normal_row).collect();
        rows[40].price *= 3.5; // injected corruption
        for row in &rows {
            writer.serialize(row).unwrap();
        }
        writer.flush().unwrap();

        let mut detector = ZScoreDetector::default();
        let clean: Vec<TradeRecord> = (0..100).map(normal_row).collect();
        detector.fit(&features::feature_matrix(&clean)).unwrap();

        let mut warehouse = CsvWarehouse::new(dir.path());
        let summary = score_latest(&mut warehouse, &detector, "tagged_trades").unwrap();

        assert_eq!(summary.rows, 100);
        assert_eq!(summary.anomalies, 1);

        let labeled = dir.path().join("tagged_trades.csv");
        assert!(labeled.exists());
        let mut reader = csv::Reader::from_path(&labeled).unwrap();
        let anomalies = reader
            .records()
            .filter(|r| r.as_ref().unwrap().iter().last() == Some("-1"))
            .count();
        assert_eq!(anomalies, 1);
    }
}
