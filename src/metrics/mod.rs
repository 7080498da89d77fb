//! Latency reduction over one test's collected samples.
//!
//! Latencies are folded as integer milliseconds with saturating arithmetic;
//! degenerate inputs (zero samples, zero wall time) reduce to zero sentinels
//! instead of a division fault.

mod reduce;


pub use reduce::{LatencyReducer, LatencyStats, throughput_x100};
