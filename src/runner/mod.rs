//! Test orchestration: one runner per test, one suite orchestrator over all
//! of them.
//!
//! Concurrency is nested three deep: the suite runs its tests in parallel,
//! each test dispatches parallel request attempts, and each attempt blocks
//! on network I/O. Samples flow through a per-test channel; nothing is
//! shared across tests and there is no module-level state.

mod dispatch;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::error;

use crate::config::{DispatchMode, TestSpec, validate};
use crate::error::AppResult;
use crate::http::{AttemptPlan, build_client};
use crate::metrics::LatencyReducer;
use crate::report::ResultSummary;

use dispatch::{run_count_mode, run_duration_mode};

/// Runs one test to completion and reduces its samples into a summary.
///
/// The wall-clock timer stops only after every launched attempt has
/// returned, including attempts still in flight when a duration-mode
/// deadline fired. Exactly one summary is produced per invocation.
///
/// # Errors
///
/// Returns an error when the spec fails validation or the HTTP client
/// cannot be built. Per-attempt failures are logged and reduce the
/// completed count instead of failing the test.
pub async fn run_test(spec: TestSpec) -> AppResult<ResultSummary> {
    let mode = validate(&spec)?;
    let client = build_client()?;
    let plan = Arc::new(AttemptPlan::from_spec(&spec));

    let (sample_tx, mut sample_rx) = mpsc::unbounded_channel();

    let started = Instant::now();
    match mode {
        DispatchMode::Count {
            requests,
            concurrency,
        } => {
            run_count_mode(&client, &plan, requests, concurrency, &sample_tx).await;
        }
        DispatchMode::Duration { secs } => {
            run_duration_mode(&client, &plan, Duration::from_secs(secs), &sample_tx).await;
        }
    }
    let wall = started.elapsed();

    // All attempt-held senders are gone once dispatch returns; dropping the
    // last one lets the drain below terminate.
    drop(sample_tx);
    let mut reducer = LatencyReducer::new();
    while let Some(sample) = sample_rx.recv().await {
        reducer.record(sample);
    }

    Ok(ResultSummary::new(
        spec.name,
        spec.method,
        reducer.finalize(),
        wall,
    ))
}

/// Runs every test in the suite concurrently and collects their summaries.
///
/// There is no cross-test concurrency limit; each test's own mode governs
/// its resource use. A failing test is logged and yields no summary without
/// aborting its siblings, so the returned collection can be shorter than the
/// input. Summary order is not guaranteed to match input order.
pub async fn run_suite(specs: Vec<TestSpec>) -> Vec<ResultSummary> {
    let mut tests = JoinSet::new();
    for spec in specs {
        tests.spawn(run_test(spec));
    }

    let mut summaries = Vec::new();
    while let Some(joined) = tests.join_next().await {
        match joined {
            Ok(Ok(summary)) => summaries.push(summary),
            Ok(Err(err)) => error!("Test run failed: {}", err),
            Err(err) => error!("Test task failed to join: {}", err),
        }
    }
    summaries
}
