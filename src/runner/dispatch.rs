use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::warn;

use crate::http::{AttemptPlan, execute_attempt};

/// Many-producer side of one test's latency collector. Every in-flight
/// attempt holds a clone; the runner drains the single consumer after the
/// join barrier.
pub(super) type SampleSender = mpsc::UnboundedSender<Duration>;

/// Count mode: exactly `requests` attempts with at most `concurrency` in
/// flight at any instant.
///
/// Admission is a counting semaphore of capacity `concurrency`; the permit
/// for attempt `i` is acquired before spawning it and released when the
/// attempt returns, success or failure. Errors never stop the launch loop.
/// Returns only after every spawned attempt has completed.
pub(super) async fn run_count_mode(
    client: &Client,
    plan: &Arc<AttemptPlan>,
    requests: u64,
    concurrency: u64,
    samples: &SampleSender,
) {
    let capacity = usize::try_from(concurrency)
        .unwrap_or(usize::MAX)
        .min(Semaphore::MAX_PERMITS);
    let permits = Arc::new(Semaphore::new(capacity));

    let mut attempts = JoinSet::new();
    for _ in 0..requests {
        let permit = match Arc::clone(&permits).acquire_owned().await {
            Ok(permit) => permit,
            // The semaphore is never closed; keep the barrier intact anyway.
            Err(_) => break,
        };
        attempts.spawn(attempt_task(
            client.clone(),
            Arc::clone(plan),
            samples.clone(),
            Some(permit),
        ));
    }

    while attempts.join_next().await.is_some() {}
}

/// Duration mode: launch attempts with no concurrency bound until the
/// deadline elapses, then await everything already in flight.
///
/// The deadline is checked before each launch; once it fires no further
/// attempts start, but none are abandoned mid-flight. In-flight growth is
/// unbounded when the endpoint responds slower than the launch rate. That is
/// the point of this mode, and the documented resource-exhaustion risk.
pub(super) async fn run_duration_mode(
    client: &Client,
    plan: &Arc<AttemptPlan>,
    window: Duration,
    samples: &SampleSender,
) {
    let started = Instant::now();
    let mut attempts = JoinSet::new();

    while started.elapsed() < window {
        attempts.spawn(attempt_task(
            client.clone(),
            Arc::clone(plan),
            samples.clone(),
            None,
        ));
        // Hand the scheduler back between launches so in-flight attempts
        // make progress and the timer check stays honest.
        tokio::task::yield_now().await;
    }

    while attempts.join_next().await.is_some() {}
}

async fn attempt_task(
    client: Client,
    plan: Arc<AttemptPlan>,
    samples: SampleSender,
    permit: Option<tokio::sync::OwnedSemaphorePermit>,
) {
    // Held for the full attempt; dropped on return regardless of outcome.
    let _permit = permit;
    if let Some(elapsed) = execute_attempt(&client, &plan).await
        && samples.send(elapsed).is_err()
    {
        warn!("Latency sample dropped; collector already closed.");
    }
}
