//! Wall-clock rate limiting.

use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Enforces a minimum interval between successive acquisitions.
///
/// The schedule is anchored to the previously scheduled slot rather than
/// the previous wake time: each acquisition advances the next allowed
/// instant by exactly one interval, however late the caller arrived. A
/// caller that falls behind does not earn a compensating burst of permits,
/// and one that never falls behind is throttled to precisely the
/// configured rate.
///
/// Single-caller usage only (`&mut self`).
pub struct RateLimiter {
    interval: Duration,
    next_slot: Instant,
}

impl RateLimiter {
    /// Creates a limiter permitting `rate_per_second` acquisitions per
    /// second. The first acquisition is immediate.
    ///
    /// # Panics
    ///
    /// Panics if the rate is not a positive, finite number.
    pub fn new(rate_per_second: f64) -> Self {
        assert!(
            rate_per_second.is_finite() && rate_per_second > 0.0,
            "rate must be positive"
        );
        Self {
            interval: Duration::from_secs_f64(1.0 / rate_per_second),
            next_slot: Instant::now(),
        }
    }

    /// Waits until the next scheduled slot, then advances the schedule by
    /// one interval.
    pub async fn acquire(&mut self) {
        let now = Instant::now();
        if now < self.next_slot {
            sleep_until(self.next_slot).await;
        }
        self.next_slot += self.interval;
    }
}
