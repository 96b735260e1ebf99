use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The offline model CLI.
#[derive(Parser, Debug)]
#[command(name = "anomaly-model")]
#[command(about = "Train and apply the trade outlier model", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fit the outlier model on every accumulated batch.
    Train {
        /// Directory holding the generated CSV batches.
        #[arg(long, env = "LOCAL_CSV_OUTPUT_PATH", default_value = "./output")]
        output_dir: PathBuf,

        /// Where the fitted model is saved.
        #[arg(long, default_value = "anomaly_model.json")]
        model_out: PathBuf,

        /// Fraction of training rows treated as outliers.
        #[arg(long, default_value_t = 0.01)]
        contamination: f64,
    },
    /// Label the most recent batch with a fitted model.
    Score {
        /// Directory holding the generated CSV batches.
        #[arg(long, env = "LOCAL_CSV_OUTPUT_PATH", default_value = "./output")]
        output_dir: PathBuf,

        /// Fitted model to load.
        #[arg(long, default_value = "anomaly_model.json")]
        model: PathBuf,

        /// Table name the labeled rows are written under.
        #[arg(long, default_value = "tagged_trades")]
        table: String,
    },
}
