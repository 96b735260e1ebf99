//! Anomaly injection.

use rand::seq::index;
use rand::Rng;
use trades::{AnomalyReport, TradeBatch};

/// Most records corrupted per batch.
pub const MAX_CORRUPTIONS: usize = 10;
/// Lower bound of the multiplicative corruption factor (inclusive).
pub const MIN_FACTOR: f64 = 2.0;
/// Upper bound of the multiplicative corruption factor (exclusive).
pub const MAX_FACTOR: f64 = 5.0;

/// Corrupts a random subset of a batch's prices to simulate detectable
/// market anomalies.
///
/// The random source is injected so tests can drive the injector with a
/// seeded `StdRng`.
pub struct AnomalyInjector<R: Rng> {
    rng: R,
}

impl<R: Rng> AnomalyInjector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Multiplies between 1 and [`MAX_CORRUPTIONS`] record prices (clipped
    /// to the batch size) by factors drawn uniformly from the half-open
    /// range [`MIN_FACTOR`]..[`MAX_FACTOR`], touching no other field.
    ///
    /// # Returns
    ///
    /// One [`AnomalyReport`] per corrupted record. An empty batch yields an
    /// empty report.
    pub fn inject(&mut self, batch: &mut TradeBatch) -> Vec<AnomalyReport> {
        let n = batch.len();
        if n == 0 {
            return Vec::new();
        }

        let count = self.rng.gen_range(1..=MAX_CORRUPTIONS).min(n);
        let indices = index::sample(&mut self.rng, n, count);

        let records = batch.records_mut();
        let mut reports = Vec::with_capacity(count);
        for idx in indices.iter() {
            let factor = self.rng.gen_range(MIN_FACTOR..MAX_FACTOR);
            let original_price = records[idx].price;
            records[idx].price = original_price * factor;
            reports.push(AnomalyReport {
                index: idx,
                original_price,
                factor,
                corrupted_price: records[idx].price,
            });
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use trades::TradeRecord;

    fn batch_of(n: usize) -> TradeBatch {
        let records = (0..n)
            .map(|i| TradeRecord {
                ticker: "AAPL".to_string(),
                conditions: "@".to_string(),
                price: 100.0 + i as f64,
                size: 10.0,
                sequence_number: i as i64,
                ..Default::default()
            })
            .collect();
        TradeBatch::new(records, 1)
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let mut injector = AnomalyInjector::new(StdRng::seed_from_u64(1));
        let mut batch = batch_of(0);
        let reports = injector.inject(&mut batch);
        assert!(reports.is_empty());
    }

    #[test]
    fn corruption_count_is_clipped_to_the_batch_size() {
        let mut injector = AnomalyInjector::new(StdRng::seed_from_u64(2));
        for n in [1, 3, 7] {
            let mut batch = batch_of(n);
            let reports = injector.inject(&mut batch);
            assert!(!reports.is_empty());
            assert!(reports.len() <= n);
        }
    }

    #[test]
    fn corruption_count_never_exceeds_the_cap() {
        for seed in 0..20 {
            let mut injector = AnomalyInjector::new(StdRng::seed_from_u64(seed));
            let mut batch = batch_of(500);
            let reports = injector.inject(&mut batch);
            assert!((1..=MAX_CORRUPTIONS).contains(&reports.len()));
        }
    }

    #[test]
    fn corrupted_indices_are_distinct() {
        for seed in 0..20 {
            let mut injector = AnomalyInjector::new(StdRng::seed_from_u64(seed));
            let mut batch = batch_of(12);
            let reports = injector.inject(&mut batch);
            let indices: HashSet<usize> = reports.iter().map(|r| r.index).collect();
            assert_eq!(indices.len(), reports.len());
        }
    }

    #[test]
    fn corrupted_price_is_original_times_factor() {
        for seed in 0..20 {
            let mut injector = AnomalyInjector::new(StdRng::seed_from_u64(seed));
            let mut batch = batch_of(50);
            let originals: Vec<f64> = batch.records().iter().map(|r| r.price).collect();

            let reports = injector.inject(&mut batch);
            for report in &reports {
                assert!(report.factor >= MIN_FACTOR);
                assert!(report.factor < MAX_FACTOR);
                assert_eq!(report.original_price, originals[report.index]);
                assert_eq!(
                    report.corrupted_price,
                    report.original_price * report.factor
                );
                assert_eq!(batch.records()[report.index].price, report.corrupted_price);
            }
        }
    }

    #[test]
    fn only_prices_change() {
        let mut injector = AnomalyInjector::new(StdRng::seed_from_u64(5));
        let mut batch = batch_of(40);
        let before = batch.clone();

        let reports = injector.inject(&mut batch);
        let corrupted: HashSet<usize> = reports.iter().map(|r| r.index).collect();

        for (i, (was, now)) in before.records().iter().zip(batch.records()).enumerate() {
            if corrupted.contains(&i) {
                let mut expected = was.clone();
                expected.price = now.price;
                assert_eq!(&expected, now);
                assert_ne!(was.price, now.price);
            } else {
                assert_eq!(was, now);
            }
        }
    }
}
