use std::time::Duration;

/// Reduced statistics over one test's latency samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyStats {
    /// Number of attempts that completed with a measured latency.
    pub completed: u64,
    pub avg_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyStats {
    pub(crate) const EMPTY: Self = Self {
        completed: 0,
        avg_ms: 0,
        min_ms: 0,
        max_ms: 0,
    };
}

/// Folds latency samples as they are drained from a test's collector.
#[derive(Debug)]
pub struct LatencyReducer {
    count: u64,
    sum_ms: u128,
    min_ms: u64,
    max_ms: u64,
}

impl LatencyReducer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum_ms: 0,
            min_ms: u64::MAX,
            max_ms: 0,
        }
    }

    pub fn record(&mut self, sample: Duration) {
        let latency_ms = u64::try_from(sample.as_millis()).unwrap_or(u64::MAX);
        self.count = self.count.saturating_add(1);
        self.sum_ms = self.sum_ms.saturating_add(u128::from(latency_ms));
        self.min_ms = self.min_ms.min(latency_ms);
        self.max_ms = self.max_ms.max(latency_ms);
    }

    /// Zero recorded samples reduce to all-zero stats.
    #[must_use]
    pub fn finalize(&self) -> LatencyStats {
        if self.count == 0 {
            return LatencyStats::EMPTY;
        }
        let avg = self.sum_ms.checked_div(u128::from(self.count)).unwrap_or(0);
        LatencyStats {
            completed: self.count,
            avg_ms: u64::try_from(avg).map_or(u64::MAX, |value| value),
            min_ms: self.min_ms,
            max_ms: self.max_ms,
        }
    }
}

impl Default for LatencyReducer {
    fn default() -> Self {
        Self::new()
    }
}

/// Average requests per second as x100 fixed point.
///
/// A zero wall duration reports zero throughput rather than infinity.
#[must_use]
pub fn throughput_x100(completed: u64, wall: Duration) -> u64 {
    let wall_ms = wall.as_millis();
    if completed == 0 || wall_ms == 0 {
        return 0;
    }
    let scaled = u128::from(completed)
        .saturating_mul(100_000)
        .checked_div(wall_ms)
        .unwrap_or(0);
    u64::try_from(scaled).map_or(u64::MAX, |value| value)
}
