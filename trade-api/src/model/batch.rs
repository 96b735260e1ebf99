//! Batch model.
//!
//! A `TradeBatch` is one generated set of trade records, owned by the
//! current simulation cycle until it is handed to a sink.

use crate::model::trade::TradeRecord;

/// An ordered set of trade records sharing a single capture timestamp.
#[derive(Debug, Clone)]
pub struct TradeBatch {
    records: Vec<TradeRecord>,
    captured_at_ns: i64,
}

impl TradeBatch {
    /// Creates a new batch from records and the nanosecond capture time
    /// stamped into them.
    pub fn new(records: Vec<TradeRecord>, captured_at_ns: i64) -> Self {
        Self {
            records,
            captured_at_ns,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Nanoseconds since the Unix epoch at which this batch was generated.
    pub fn captured_at_ns(&self) -> i64 {
        self.captured_at_ns
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Mutable access to the records.
    ///
    /// Intended for anomaly injection only; a batch is immutable once it
    /// has been handed to a sink.
    pub fn records_mut(&mut self) -> &mut [TradeRecord] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<TradeRecord> {
        self.records
    }
}

/// Record of one injected price corruption.
///
/// Transient: reports are logged by the simulation loop and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    /// Position of the corrupted record within the batch.
    pub index: usize,
    /// Price before corruption.
    pub original_price: f64,
    /// Multiplicative factor applied, in [2.0, 5.0).
    pub factor: f64,
    /// Price after corruption.
    pub corrupted_price: f64,
}
