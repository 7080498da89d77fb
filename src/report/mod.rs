//! Report output: one [`ResultSummary`] per completed test, collected into a
//! JSON report file plus a one-line console rendering per test.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::config::HttpMethod;
use crate::error::AppResult;
use crate::metrics::{LatencyStats, throughput_x100};


/// Final statistics for one completed test. Immutable once produced.
///
/// Latencies are integer milliseconds; `duration` is wall-clock seconds from
/// dispatch start until the last attempt finished.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub name: String,
    pub method: HttpMethod,
    /// Number of attempts that completed with a measured latency. May be
    /// lower than the configured count when attempts failed in transport.
    pub requests: u64,
    pub duration: f64,
    pub rps: f64,
    pub avg_latency: u64,
    pub max_latency: u64,
    pub min_latency: u64,
}

impl ResultSummary {
    #[must_use]
    pub fn new(name: String, method: HttpMethod, stats: LatencyStats, wall: Duration) -> Self {
        let rps_x100 = throughput_x100(stats.completed, wall);
        Self {
            name,
            method,
            requests: stats.completed,
            duration: wall.as_secs_f64(),
            rps: fixed_x100_to_f64(rps_x100),
            avg_latency: stats.avg_ms,
            max_latency: stats.max_ms,
            min_latency: stats.min_ms,
        }
    }

    /// One-line console rendering: name, throughput, average latency.
    #[must_use]
    pub fn console_line(&self) -> String {
        format!(
            "Test '{}': {:.2} req/s, avg latency {}ms ({} completed)",
            self.name, self.rps, self.avg_latency, self.requests
        )
    }
}

const fn fixed_x100_to_f64(value_x100: u64) -> f64 {
    value_x100 as f64 / 100.0
}

/// Writes the collected summaries as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization fails or the file cannot be written.
pub fn save_report(path: &Path, summaries: &[ResultSummary]) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(summaries)?;
    std::fs::write(path, json)?;
    Ok(())
}
