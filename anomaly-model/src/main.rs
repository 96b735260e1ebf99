//! Offline companion to the trade simulator.
//!
//! `train` fits the one-class outlier model on every accumulated batch;
//! `score` labels the most recent batch against a saved model.

use clap::Parser;
use log::{error, info};

pub mod args;
pub mod detector;
pub mod error;
pub mod features;
pub mod persistence;
pub mod score;
pub mod train;
pub mod warehouse;

use args::{Cli, Commands};
use detector::ZScoreDetector;
use error::ModelError;
use warehouse::CsvWarehouse;

fn main() -> Result<(), ModelError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Train {
            output_dir,
            model_out,
            contamination,
        } => match train::run(output_dir, model_out, *contamination) {
            Ok(()) => info!("Training complete"),
            Err(e) => {
                error!("Training failed: {}", e);
                return Err(e);
            }
        },
        Commands::Score {
            output_dir,
            model,
            table,
        } => {
            if !model.exists() {
                error!("Model file not found at {}", model.display());
                return Err(ModelError::ModelNotFound(model.clone()));
            }
            let detector: ZScoreDetector = persistence::load_model(model)?;
            let mut warehouse = CsvWarehouse::new(output_dir);
            match score::score_latest(&mut warehouse, &detector, table) {
                Ok(summary) => info!(
                    "Processed {} rows, {} anomalies detected",
                    summary.rows, summary.anomalies
                ),
                Err(e) => {
                    error!("Scoring failed: {}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
