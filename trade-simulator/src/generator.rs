//! Batch generation.

use crate::error::ConfigError;
use chrono::Local;
use rand::Rng;
use trades::{TradeBatch, TradeRecord};

/// Smallest number of rows a batch may hold.
pub const MIN_BATCH_ROWS: usize = 1000;
/// Largest number of rows a batch may hold.
pub const MAX_BATCH_ROWS: usize = 5000;

/// One wall-clock capture, shared by every row of a batch.
struct Capture {
    local_ts: String,
    local_date: String,
    ns: i64,
}

/// Produces one in-memory batch per call by sampling the base dataset with
/// replacement and stamping every sampled row with the capture time.
///
/// The random source is injected so tests can drive the generator with a
/// seeded `StdRng`.
pub struct BatchGenerator<R: Rng> {
    base: Vec<TradeRecord>,
    rng: R,
    last_capture_ns: i64,
}

impl<R: Rng> BatchGenerator<R> {
    /// Creates a generator over the given base dataset.
    ///
    /// # Returns
    ///
    /// * `Err(ConfigError::EmptyBaseDataset)` when there is nothing to
    ///   sample from.
    pub fn new(base: Vec<TradeRecord>, rng: R) -> Result<Self, ConfigError> {
        if base.is_empty() {
            return Err(ConfigError::EmptyBaseDataset);
        }
        Ok(Self {
            base,
            rng,
            last_capture_ns: 0,
        })
    }

    /// Generates the next batch.
    ///
    /// The row count is drawn uniformly from
    /// [`MIN_BATCH_ROWS`, `MAX_BATCH_ROWS`]; a single base row may be
    /// sampled any number of times. All time fields are overwritten with
    /// one capture of the current wall clock, identical across the batch.
    pub fn generate(&mut self) -> TradeBatch {
        let size = self.rng.gen_range(MIN_BATCH_ROWS..=MAX_BATCH_ROWS);
        let capture = self.capture_now();

        let mut records = Vec::with_capacity(size);
        for _ in 0..size {
            let template = &self.base[self.rng.gen_range(0..self.base.len())];
            let mut record = template.clone();
            record.local_ts = capture.local_ts.clone();
            record.local_date = capture.local_date.clone();
            record.participant_timestamp = capture.ns;
            record.sip_timestamp = capture.ns;
            record.trf_timestamp = capture.ns;
            records.push(record);
        }

        TradeBatch::new(records, capture.ns)
    }

    /// Captures the current wall clock, guaranteeing that successive
    /// captures carry strictly increasing nanosecond stamps even if the
    /// system clock stalls or steps backwards.
    fn capture_now(&mut self) -> Capture {
        let now = Local::now();
        // Saturates for dates past 2262, the representable range of i64 ns.
        let mut ns = now.timestamp_nanos_opt().unwrap_or(i64::MAX);
        if ns <= self.last_capture_ns {
            ns = self.last_capture_ns + 1;
        }
        self.last_capture_ns = ns;

        Capture {
            local_ts: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            local_date: now.format("%Y-%m-%d").to_string(),
            ns,
        }
    }
}
