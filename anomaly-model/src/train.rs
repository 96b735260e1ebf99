//! The `train` command.

use crate::detector::ZScoreDetector;
use crate::error::Result;
use crate::features;
use crate::persistence;
use crate::warehouse::CsvWarehouse;
use log::info;
use std::path::Path;
use trades::OutlierModel;

/// Fits the outlier model on every accumulated batch and saves it.
pub fn run(output_dir: &Path, model_out: &Path, contamination: f64) -> Result<()> {
    let warehouse = CsvWarehouse::new(output_dir);
    let rows = warehouse.accumulated_trades()?;
    info!("Loaded {} rows from {}", rows.len(), output_dir.display());

    let matrix = features::feature_matrix(&rows);
    let mut model = ZScoreDetector::new(contamination);
    model.fit(&matrix)?;

    persistence::save_model(model_out, &model)?;
    info!("Model trained and saved to {}", model_out.display());
    Ok(())
}
