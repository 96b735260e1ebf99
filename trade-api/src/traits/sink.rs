//! Defines the `Sink` trait for batch delivery.
//!
//! This module specifies the contract that all delivery targets must
//! implement. It allows the simulation loop to abstract over destinations
//! (local filesystem, object storage) while keeping failure handling in one
//! place: a sink reports failure through [`SinkResult`], never by raising
//! past its own boundary.

use crate::model::batch::TradeBatch;
use crate::model::delivery::SinkResult;
use anyhow::Result;
use async_trait::async_trait;

/// A delivery target that durably persists batches.
///
/// Implementors serialize the batch and write it to their destination.
/// Delivery is attempted at most once per call; the caller decides what to
/// do with a failed [`SinkResult`].
#[async_trait]
pub trait Sink: Send {
    /// Persists one batch.
    ///
    /// # Returns
    ///
    /// A [`SinkResult`] carrying the destination identifier and, on
    /// failure, a human-readable cause. This method does not error: every
    /// delivery problem is folded into the result.
    async fn deliver(&mut self, batch: &TradeBatch) -> SinkResult;

    /// Releases any resources held by the sink.
    ///
    /// Invoked exactly once by the simulation loop during orderly shutdown.
    async fn shutdown(&mut self) -> Result<()>;
}
