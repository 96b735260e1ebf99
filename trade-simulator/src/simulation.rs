//! The simulation loop.
//!
//! Orchestrates generate -> inject -> deliver on a fixed cadence, forever,
//! until an external stop request arrives. Sink failures are isolated per
//! batch: a failed delivery is logged and the loop proceeds to the next
//! cycle (at-most-once delivery, no retry).

use crate::generator::BatchGenerator;
use crate::injector::AnomalyInjector;
use crate::rate_limiter::RateLimiter;
use anyhow::Result;
use log::{debug, error, info};
use rand::Rng;
use std::io::Write;
use tokio::sync::watch;
use trades::Sink;

/// Lifecycle states of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Cycling normally.
    Running,
    /// Stop observed; finishing the in-flight cycle and shutting the sink
    /// down.
    Stopping,
    /// Shutdown hooks have run; the loop has returned.
    Stopped,
}

/// Drives the batch pipeline until the stop channel fires.
pub struct SimulationLoop<R: Rng> {
    generator: BatchGenerator<R>,
    injector: AnomalyInjector<R>,
    sink: Box<dyn Sink>,
    stop: watch::Receiver<bool>,
    pacer: RateLimiter,
    period_secs: u64,
    state: LoopState,
}

impl<R: Rng> SimulationLoop<R> {
    /// Creates a loop emitting one batch every `period_secs` seconds.
    pub fn new(
        generator: BatchGenerator<R>,
        injector: AnomalyInjector<R>,
        sink: Box<dyn Sink>,
        stop: watch::Receiver<bool>,
        period_secs: u64,
    ) -> Self {
        Self {
            generator,
            injector,
            sink,
            stop,
            // One tick per second keeps the cadence anchored to a fixed
            // grid: time spent generating and delivering eats into the
            // countdown instead of stretching the period.
            pacer: RateLimiter::new(1.0),
            period_secs,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Runs until interrupted.
    ///
    /// An interruption is observed only at cycle boundaries and countdown
    /// ticks, never mid-batch: the in-flight delivery always finishes, the
    /// sink's shutdown hook runs, and the loop returns `Ok` rather than
    /// surfacing the interruption as an error.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting trade simulation");
        loop {
            if self.stop_requested() {
                break;
            }

            let mut batch = self.generator.generate();
            let reports = self.injector.inject(&mut batch);
            for report in &reports {
                debug!(
                    "Injected anomaly at index {}: price changed from {} to {}",
                    report.index, report.original_price, report.corrupted_price
                );
            }

            let result = self.sink.deliver(&batch).await;
            if result.delivered {
                info!(
                    "Delivered batch of {} rows ({} anomalies) to {}",
                    batch.len(),
                    reports.len(),
                    result.destination
                );
            } else {
                error!(
                    "Failed to deliver batch of {} rows to {}: {}",
                    batch.len(),
                    result.destination,
                    result.cause.as_deref().unwrap_or("unknown cause")
                );
            }

            self.countdown().await;
        }

        self.state = LoopState::Stopping;
        self.sink.shutdown().await?;
        self.state = LoopState::Stopped;
        info!("Simulation ended");
        Ok(())
    }

    /// Waits out the remainder of the period one second at a time, staying
    /// responsive to a stop request at every tick.
    async fn countdown(&mut self) {
        for remaining in (1..=self.period_secs).rev() {
            if self.stop_requested() {
                return;
            }
            print!("\rNext batch in: {} seconds", remaining);
            let _ = std::io::stdout().flush();

            tokio::select! {
                _ = self.pacer.acquire() => {}
                // The only value ever sent is the stop request; a dropped
                // sender means supervision is gone and stopping is the
                // orderly answer either way.
                _ = self.stop.changed() => {
                    self.state = LoopState::Stopping;
                    return;
                }
            }
        }
        println!();
    }

    fn stop_requested(&mut self) -> bool {
        if *self.stop.borrow() {
            self.state = LoopState::Stopping;
        }
        self.state != LoopState::Running
    }
}
