//! Continuous synthetic trade-batch simulator.
//!
//! Samples a base CSV dataset into timestamped batches, corrupts a small
//! random subset of each batch's prices, and persists every batch through
//! the configured sink until interrupted.

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use trade_simulator::config::Args;
use trade_simulator::dataset;
use trade_simulator::generator::BatchGenerator;
use trade_simulator::injector::AnomalyInjector;
use trade_simulator::simulation::SimulationLoop;
use trade_simulator::sink;

/// Seconds between consecutive batches.
const BATCH_PERIOD_SECS: u64 = 60;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Everything that can be misconfigured fails here, before the loop.
    let sink_config = args.sink_config()?;
    let sink = sink::build(&sink_config)?;
    let base = dataset::load_base_dataset(&args.base_csv)?;
    let generator = BatchGenerator::new(base, StdRng::from_entropy())?;
    let injector = AnomalyInjector::new(StdRng::from_entropy());

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Stopping simulation on interrupt signal");
            let _ = stop_tx.send(true);
        }
    });

    let mut simulation =
        SimulationLoop::new(generator, injector, sink, stop_rx, BATCH_PERIOD_SECS);
    simulation.run().await
}
